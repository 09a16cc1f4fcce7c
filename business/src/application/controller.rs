use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

use crate::domain::catalog::use_cases::load::{LoadOptionsParams, LoadOptionsUseCase};
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::use_cases::add::{AddCommentParams, AddCommentUseCase};
use crate::domain::comment::use_cases::list::{ListCommentsParams, ListCommentsUseCase};
use crate::domain::controller::action::Action;
use crate::domain::controller::messages;
use crate::domain::controller::reducer::reduce;
use crate::domain::controller::state::{ControllerState, LookupOrdering};
use crate::domain::logger::Logger;
use crate::domain::recipe::model::{RecipeQuery, VoteKind};
use crate::domain::recipe::use_cases::find::{FindRecipeParams, FindRecipeUseCase};
use crate::domain::recipe::use_cases::vote::{VoteRecipeParams, VoteRecipeUseCase};
use crate::domain::selection::model::SelectionField;
use crate::domain::selection::randomizer::random_selection;

/// Comments fetched per page when the recipe card asks for them.
pub const COMMENTS_PER_PAGE: u32 = 20;

pub struct ControllerDeps {
    pub load_options: Arc<dyn LoadOptionsUseCase>,
    pub find_recipe: Arc<dyn FindRecipeUseCase>,
    pub vote_recipe: Arc<dyn VoteRecipeUseCase>,
    pub list_comments: Arc<dyn ListCommentsUseCase>,
    pub add_comment: Arc<dyn AddCommentUseCase>,
    pub logger: Arc<dyn Logger>,
}

/// Owns the page state and drives every backend call the page makes.
///
/// All state changes go through [`reduce`]. The state lock is only held to
/// apply an action or read inputs, never across a backend call, so lookups
/// and votes may overlap freely.
pub struct SelectionController {
    state: Mutex<ControllerState>,
    rng: Mutex<StdRng>,
    deps: ControllerDeps,
}

impl SelectionController {
    pub fn new(deps: ControllerDeps, ordering: LookupOrdering) -> Self {
        Self::with_rng(deps, ordering, StdRng::from_os_rng())
    }

    pub fn with_rng(deps: ControllerDeps, ordering: LookupOrdering, rng: StdRng) -> Self {
        Self {
            state: Mutex::new(ControllerState::new(ordering)),
            rng: Mutex::new(rng),
            deps,
        }
    }

    pub async fn snapshot(&self) -> ControllerState {
        self.state.lock().await.clone()
    }

    async fn dispatch(&self, action: Action) -> ControllerState {
        let mut state = self.state.lock().await;
        *state = reduce(&state, action);
        state.clone()
    }

    /// Fetches the three option lists. Runs once at startup and again on
    /// an explicit reload.
    pub async fn load_options(&self) -> ControllerState {
        self.dispatch(Action::LoadStarted).await;

        let action = match self
            .deps
            .load_options
            .execute(LoadOptionsParams::default())
            .await
        {
            Ok(options) => Action::LoadSucceeded(options),
            Err(err) => Action::LoadFailed(messages::ingredients_failed(&err)),
        };

        self.dispatch(action).await
    }

    /// Overwrites one selection field, then looks up a recipe if all three
    /// fields are now set.
    pub async fn select(&self, field: SelectionField, value: impl Into<String>) -> ControllerState {
        let state = self
            .dispatch(Action::SelectField(field, value.into()))
            .await;

        if state.selection.is_complete() {
            return self.lookup().await;
        }
        state
    }

    pub async fn set_vegetable(&self, value: impl Into<String>) -> ControllerState {
        self.select(SelectionField::Vegetable, value).await
    }

    pub async fn set_protein(&self, value: impl Into<String>) -> ControllerState {
        self.select(SelectionField::Protein, value).await
    }

    pub async fn set_flavor(&self, value: impl Into<String>) -> ControllerState {
        self.select(SelectionField::Flavor, value).await
    }

    /// Replaces the whole selection with a random pick and issues one lookup.
    pub async fn randomize(&self) -> ControllerState {
        let picked = {
            let state = self.state.lock().await;
            let mut rng = self.rng.lock().await;
            random_selection(&state.options, &mut *rng)
        };

        match picked {
            Some(selection) => {
                self.deps.logger.debug(&format!(
                    "Randomized selection: {:?} / {:?} / {:?}",
                    selection.vegetable, selection.protein, selection.flavor
                ));
                self.dispatch(Action::SelectAll(selection)).await;
                self.lookup().await
            }
            None => {
                self.deps
                    .logger
                    .warn("Cannot randomize before every option list has entries");
                self.snapshot().await
            }
        }
    }

    /// Looks up a recipe for the current selection.
    pub async fn lookup(&self) -> ControllerState {
        let (token, query) = {
            let mut state = self.state.lock().await;
            let token = state.latest_lookup.next();
            *state = reduce(&state, Action::LookupStarted(token));
            (token, query_for(&state))
        };

        let action = match self
            .deps
            .find_recipe
            .execute(FindRecipeParams { query })
            .await
        {
            Ok(recipe) => Action::LookupSucceeded { token, recipe },
            Err(_) => Action::LookupFailed { token },
        };

        self.dispatch(action).await
    }

    pub async fn like(&self) -> ControllerState {
        self.vote(VoteKind::Like).await
    }

    pub async fn dislike(&self) -> ControllerState {
        self.vote(VoteKind::Dislike).await
    }

    async fn vote(&self, kind: VoteKind) -> ControllerState {
        let recipe_id = self.state.lock().await.recipe_id().map(str::to_owned);
        let Some(recipe_id) = recipe_id else {
            self.deps
                .logger
                .debug(&format!("Ignoring {}: no recipe loaded", kind));
            return self.snapshot().await;
        };

        self.dispatch(Action::FeedbackStarted(kind)).await;

        match self
            .deps
            .vote_recipe
            .execute(VoteRecipeParams {
                recipe_id: recipe_id.clone(),
                kind,
            })
            .await
        {
            Ok(count) => {
                self.dispatch(Action::FeedbackSucceeded {
                    recipe_id,
                    kind,
                    count,
                })
                .await;
            }
            Err(err) => {
                self.deps
                    .logger
                    .error(&format!("Failed to submit {} for {}: {}", kind, recipe_id, err));
            }
        }

        self.dispatch(Action::FeedbackFinished(kind)).await
    }

    /// Fetches one page of comments for the displayed recipe. Pages start at 1.
    pub async fn load_comments(&self, page: u32) -> ControllerState {
        let recipe_id = self.state.lock().await.recipe_id().map(str::to_owned);
        let Some(recipe_id) = recipe_id else {
            return self.snapshot().await;
        };

        self.dispatch(Action::CommentsStarted).await;

        match self
            .deps
            .list_comments
            .execute(ListCommentsParams {
                recipe_id: recipe_id.clone(),
                page: page.max(1),
                per_page: COMMENTS_PER_PAGE,
            })
            .await
        {
            Ok(page) => {
                let paging = page.paging();
                self.dispatch(Action::CommentsLoaded {
                    recipe_id,
                    comments: page.comments,
                    paging,
                })
                .await;
            }
            Err(err) => {
                self.deps
                    .logger
                    .error(&format!("Failed to load comments for {}: {}", recipe_id, err));
            }
        }

        self.dispatch(Action::CommentsFinished).await
    }

    /// Posts a comment on the displayed recipe.
    pub async fn add_comment(&self, text: &str) -> Result<ControllerState, CommentError> {
        let recipe_id = self
            .state
            .lock()
            .await
            .recipe_id()
            .map(str::to_owned)
            .ok_or(CommentError::NoRecipe)?;

        self.dispatch(Action::CommentSubmitStarted).await;

        let result = self
            .deps
            .add_comment
            .execute(AddCommentParams {
                recipe_id: recipe_id.clone(),
                text: text.to_string(),
            })
            .await;

        let outcome = match result {
            Ok(comment) => {
                self.dispatch(Action::CommentAdded { recipe_id, comment })
                    .await;
                Ok(())
            }
            Err(err) => {
                self.deps
                    .logger
                    .error(&format!("Failed to add comment to {}: {}", recipe_id, err));
                Err(err)
            }
        };

        let state = self.dispatch(Action::CommentSubmitFinished).await;
        outcome.map(|_| state)
    }
}

fn query_for(state: &ControllerState) -> RecipeQuery {
    let id = |field: SelectionField| {
        let name = state.selection.get(field).unwrap_or_default();
        match field {
            SelectionField::Vegetable => state.options.vegetables.resolve_id(name),
            SelectionField::Protein => state.options.proteins.resolve_id(name),
            SelectionField::Flavor => state.options.flavors.resolve_id(name),
        }
    };

    RecipeQuery {
        veg_id: id(SelectionField::Vegetable),
        protein_id: id(SelectionField::Protein),
        flavor_id: id(SelectionField::Flavor),
    }
}
