//! The focused text field

/// Action a text field declares for its enter key
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorAction {
    #[default]
    Unspecified = 0,
    None = 1,
    Go = 2,
    Search = 3,
    Send = 4,
    Next = 5,
    Done = 6,
    Previous = 7,
}

impl EditorAction {
    /// Low byte of the field's input options
    pub const MASK: i32 = 0xff;

    /// Decode the action from a field's input options; unknown values are `Unspecified`
    pub fn from_options(options: i32) -> Self {
        match options & Self::MASK {
            1 => EditorAction::None,
            2 => EditorAction::Go,
            3 => EditorAction::Search,
            4 => EditorAction::Send,
            5 => EditorAction::Next,
            6 => EditorAction::Done,
            7 => EditorAction::Previous,
            _ => EditorAction::Unspecified,
        }
    }

    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Actions the enter key performs instead of inserting a line break
    pub fn submits(self) -> bool {
        matches!(
            self,
            EditorAction::Go
                | EditorAction::Search
                | EditorAction::Send
                | EditorAction::Next
                | EditorAction::Done
        )
    }
}

/// Description of the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldInfo {
    pub action: EditorAction,
}

impl FieldInfo {
    pub fn new(action: EditorAction) -> Self {
        Self { action }
    }
}

/// Raw enter key strokes sent when the field has no submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStroke {
    EnterDown,
    EnterUp,
}

/// Text-commit sink of the focused field
pub trait TextSink {
    /// Insert text at the cursor
    fn commit_text(&mut self, text: &str);

    /// Remove `count` characters before the cursor
    fn delete_before_cursor(&mut self, count: usize);

    fn perform_editor_action(&mut self, action: EditorAction);

    fn send_key(&mut self, stroke: KeyStroke);
}

/// A text field held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    text: String,
    /// Cursor position in characters
    cursor: usize,
    pub actions: Vec<EditorAction>,
    pub strokes: Vec<KeyStroke>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field containing `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the text length
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.chars().count());
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextSink for MemorySink {
    fn commit_text(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    fn delete_before_cursor(&mut self, count: usize) {
        let start_char = self.cursor.saturating_sub(count);
        let start = self.byte_offset(start_char);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = start_char;
    }

    fn perform_editor_action(&mut self, action: EditorAction) {
        self.actions.push(action);
    }

    fn send_key(&mut self, stroke: KeyStroke) {
        if stroke == KeyStroke::EnterDown {
            self.commit_text("\n");
        }
        self.strokes.push(stroke);
    }
}
