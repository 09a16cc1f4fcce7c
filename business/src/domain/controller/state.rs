use crate::domain::catalog::model::OptionSets;
use crate::domain::comment::model::{Comment, CommentPaging};
use crate::domain::recipe::model::{Recipe, VoteKind};
use crate::domain::selection::model::Selection;

/// Monotonic tag carried by every recipe lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupToken(pub u64);

impl LookupToken {
    pub fn next(self) -> Self {
        LookupToken(self.0 + 1)
    }
}

/// Which lookup response is allowed to update the displayed recipe when
/// several are in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupOrdering {
    /// Only the most recently issued lookup may apply; older responses are dropped.
    #[default]
    LatestIssued,
    /// Every response applies; whichever completes last wins.
    LastCompleted,
}

impl std::fmt::Display for LookupOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupOrdering::LatestIssued => write!(f, "latest-issued"),
            LookupOrdering::LastCompleted => write!(f, "last-completed"),
        }
    }
}

impl std::str::FromStr for LookupOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest-issued" => Ok(LookupOrdering::LatestIssued),
            "last-completed" => Ok(LookupOrdering::LastCompleted),
            _ => Err(format!("Invalid lookup ordering: {}", s)),
        }
    }
}

/// Busy flags plus the last user-visible error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub loading_ingredients: bool,
    pub loading_recipe: bool,
    pub submitting_like: bool,
    pub submitting_dislike: bool,
    pub loading_comments: bool,
    pub submitting_comment: bool,
    pub error: Option<String>,
}

impl RequestState {
    pub fn submitting(&self, kind: VoteKind) -> bool {
        match kind {
            VoteKind::Like => self.submitting_like,
            VoteKind::Dislike => self.submitting_dislike,
        }
    }

    pub(crate) fn set_submitting(&mut self, kind: VoteKind, busy: bool) {
        match kind {
            VoteKind::Like => self.submitting_like = busy,
            VoteKind::Dislike => self.submitting_dislike = busy,
        }
    }
}

/// Everything the page renders. Only the reducer produces new values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub options: OptionSets,
    pub selection: Selection,
    pub recipe: Option<Recipe>,
    pub comments: Vec<Comment>,
    /// Position of `comments` in the backend's pagination, once a page was loaded.
    pub comment_paging: Option<CommentPaging>,
    pub request: RequestState,
    pub ordering: LookupOrdering,
    /// Token of the most recently issued lookup.
    pub latest_lookup: LookupToken,
    /// Lookups issued but not yet completed.
    pub lookups_in_flight: u32,
}

impl ControllerState {
    pub fn new(ordering: LookupOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    pub fn recipe_id(&self) -> Option<&str> {
        self.recipe.as_ref().map(|r| r.id.as_str())
    }
}
