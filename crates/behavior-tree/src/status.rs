//! Node result.

/// Outcome of a single node evaluation.
///
/// There is no `Running`: the tree is rebuilt from the root every frame, and
/// the entity state machines own anything that lasts longer than one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Conditions: the check held. Actions: the decision was written.
    Success,

    /// Conditions: the check did not hold. Actions never fail.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa. Backs [`crate::Inverter`].
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

/// `true` maps to `Success`, which keeps condition leaves one-liners.
impl From<bool> for Status {
    fn from(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Failure }
    }
}
