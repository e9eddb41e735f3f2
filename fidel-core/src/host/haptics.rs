use std::time::Duration;

/// Vibration motor of the device
pub trait HapticService {
    /// Whether the device can vibrate at all
    fn has_vibrator(&self) -> bool;

    /// Fire-and-forget pulse
    fn vibrate(&mut self, duration: Duration);
}

/// Records requested pulses instead of vibrating
#[derive(Debug, Clone, Default)]
pub struct PulseRecorder {
    capable: bool,
    pub pulses: Vec<Duration>,
}

impl PulseRecorder {
    pub fn new() -> Self {
        Self {
            capable: true,
            pulses: Vec::new(),
        }
    }

    /// A device without a vibration motor
    pub fn without_vibrator() -> Self {
        Self::default()
    }
}

impl HapticService for PulseRecorder {
    fn has_vibrator(&self) -> bool {
        self.capable
    }

    fn vibrate(&mut self, duration: Duration) {
        self.pulses.push(duration);
    }
}
