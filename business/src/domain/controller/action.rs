use crate::domain::catalog::model::OptionSets;
use crate::domain::comment::model::{Comment, CommentPaging};
use crate::domain::recipe::model::{Recipe, VoteKind};
use crate::domain::selection::model::{Selection, SelectionField};

use super::state::LookupToken;

/// State transitions understood by [`super::reducer::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    LoadSucceeded(OptionSets),
    LoadFailed(String),
    SelectField(SelectionField, String),
    SelectAll(Selection),
    LookupStarted(LookupToken),
    LookupSucceeded {
        token: LookupToken,
        recipe: Option<Recipe>,
    },
    LookupFailed {
        token: LookupToken,
    },
    FeedbackStarted(VoteKind),
    FeedbackSucceeded {
        recipe_id: String,
        kind: VoteKind,
        count: u32,
    },
    FeedbackFinished(VoteKind),
    CommentsStarted,
    CommentsLoaded {
        recipe_id: String,
        comments: Vec<Comment>,
        paging: CommentPaging,
    },
    CommentsFinished,
    CommentSubmitStarted,
    CommentAdded {
        recipe_id: String,
        comment: Comment,
    },
    CommentSubmitFinished,
}
