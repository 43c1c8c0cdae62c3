//! Actions a reconciliation run can perform.

use std::fmt;

/// What to do with an adjustment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Report drifted keys without touching the store.
    Get,
    /// Correct the breaking tier only.
    FixBreaking,
    /// Correct the breaking tier, then the recommend tier.
    FixAll,
}

/// Which tiers a fix touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixScope {
    Breaking,
    All,
}

impl Action {
    /// The tiers this action corrects, or `None` for a read-only action.
    pub fn fix_scope(&self) -> Option<FixScope> {
        match self {
            Action::Get => None,
            Action::FixBreaking => Some(FixScope::Breaking),
            Action::FixAll => Some(FixScope::All),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Get => write!(f, "get"),
            Action::FixBreaking => write!(f, "fix-breaking"),
            Action::FixAll => write!(f, "fix-all"),
        }
    }
}
