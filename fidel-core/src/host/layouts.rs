use crate::engine::LayoutId;

/// Supplies the pre-built layout descriptors; the engine only selects
pub trait LayoutRegistry {
    type Layout;

    fn layout(&self, id: LayoutId) -> &Self::Layout;
}

/// Four descriptors indexed by [`LayoutId`]
#[derive(Debug, Clone)]
pub struct LayoutTable<T> {
    layouts: [T; 4],
}

impl<T> LayoutTable<T> {
    pub fn new(native_letters: T, latin_letters: T, native_symbols: T, latin_symbols: T) -> Self {
        Self {
            layouts: [native_letters, latin_letters, native_symbols, latin_symbols],
        }
    }

    /// Build each descriptor from its id
    pub fn from_fn(mut build: impl FnMut(LayoutId) -> T) -> Self {
        Self {
            layouts: LayoutId::ALL.map(&mut build),
        }
    }
}

impl<T> LayoutRegistry for LayoutTable<T> {
    type Layout = T;

    fn layout(&self, id: LayoutId) -> &T {
        &self.layouts[id.index()]
    }
}
