//! # Navigation State
//!
//! - **Idle**: nothing pending
//! - **Loading**: a read navigation is pending, with its target
//! - **Submitting**: a write navigation is pending, with its form data
//!
//! Every pending navigation carries an id. Only the most recent id may commit, an older
//! navigation finishing late is dropped (last navigation wins).
use crate::location::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    Push,
    Replace,
    /// The history cursor is already where it should be (back/forward, reload).
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    Link,
    Search,
    Pop,
    Redirect,
    Reload,
    /// Re-read of the rendered location after a write, not a user navigation.
    Revalidate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadIntent {
    pub location: Location,
    pub kind: LoadKind,
    pub history: HistoryAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    Idle,
    Loading {
        id: u64,
        intent: LoadIntent,
    },
    Submitting {
        id: u64,
        submission: Submission,
    },
}

impl Navigation {
    pub fn is_idle(&self) -> bool {
        matches!(self, Navigation::Idle)
    }
}

/// Whether search has been used, judged by the last committed `q`.
///
/// The first keystroke of a search pushes a history entry, the following ones replace it.
/// One "back" then leaves the search entirely instead of stepping through every keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Inactive,
    Active,
}

impl SearchPhase {
    pub fn from_committed(q: Option<&str>) -> Self {
        match q {
            None => SearchPhase::Inactive,
            Some(_) => SearchPhase::Active,
        }
    }

    pub fn history_action(self) -> HistoryAction {
        match self {
            SearchPhase::Inactive => HistoryAction::Push,
            SearchPhase::Active => HistoryAction::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_phase() {
        assert_eq!(SearchPhase::from_committed(None), SearchPhase::Inactive);
        assert_eq!(SearchPhase::from_committed(Some("")), SearchPhase::Active);
        assert_eq!(SearchPhase::from_committed(Some("a")), SearchPhase::Active);

        assert_eq!(SearchPhase::Inactive.history_action(), HistoryAction::Push);
        assert_eq!(SearchPhase::Active.history_action(), HistoryAction::Replace);
    }

    #[test]
    fn test_navigation_idle() {
        assert!(Navigation::default().is_idle());

        let submitting = Navigation::Submitting {
            id: 7,
            submission: Submission::new("/").field("a", "b"),
        };
        assert!(!submitting.is_idle());
    }
}
