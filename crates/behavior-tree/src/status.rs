//! Node outcome.

/// Outcome of ticking a node.
///
/// Every node resolves within the tick that evaluates it, so there is no
/// running state to resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The check held or the blackboard write was made.
    Success,
    /// The check did not hold; composites move on or give up.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(held: bool) -> Self {
        if held { Status::Success } else { Status::Failure }
    }
}
