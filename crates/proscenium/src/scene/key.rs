use core::fmt;

/// Handle to a member held by a [`Stage`](super::Stage).
///
/// Handles are generational: once a member is removed its slot may be reused,
/// but old handles keep pointing at the removed member and resolve to nothing.
/// Followers store handles instead of references, so a removed target can
/// never be observed through a stale handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MemberId {
    /// Slot index inside the stage.
    pub(crate) index: u32,
    /// Slot generation at insertion time.
    pub(crate) generation: u32,
}

impl MemberId {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}
