use core::fmt;
use core::num::NonZeroU32;

/// Handle of a component inside one network.
///
/// Ids are handed out densely by the network in insertion order and are
/// never reused, so a handle kept across a delete resolves to nothing
/// instead of to a newer component. The niche in `NonZeroU32` keeps every
/// `Option<CompId>` output slot at four bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompId(NonZeroU32);

impl CompId {
    /// Id for the component stored at `index`.
    ///
    /// Panics if `index` is `u32::MAX`; a network never grows that large.
    pub fn from_index(index: u32) -> Self {
        let raw = index
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .expect("component index overflow");
        Self(raw)
    }

    /// Zero-based position in the network's storage.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// [`index`](Self::index) widened for slice access.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompId({})", self.index())
    }
}

impl fmt::Display for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
