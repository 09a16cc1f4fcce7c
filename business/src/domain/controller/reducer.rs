use super::action::Action;
use super::messages::{NO_MATCHING_RECIPE, RECIPE_LOOKUP_FAILED};
use super::state::{ControllerState, LookupOrdering, LookupToken};

fn lookup_applies(state: &ControllerState, token: LookupToken) -> bool {
    match state.ordering {
        LookupOrdering::LatestIssued => token == state.latest_lookup,
        LookupOrdering::LastCompleted => true,
    }
}

fn recipe_is(state: &ControllerState, recipe_id: &str) -> bool {
    state.recipe_id() == Some(recipe_id)
}

/// Pure transition function: returns the state that follows `action`.
pub fn reduce(state: &ControllerState, action: Action) -> ControllerState {
    let mut next = state.clone();

    match action {
        Action::LoadStarted => {
            next.request.loading_ingredients = true;
            next.request.error = None;
        }
        Action::LoadSucceeded(options) => {
            next.options = options;
            next.request.loading_ingredients = false;
        }
        Action::LoadFailed(message) => {
            next.request.loading_ingredients = false;
            next.request.error = Some(message);
        }
        Action::SelectField(field, value) => {
            next.selection = next.selection.with(field, value);
        }
        Action::SelectAll(selection) => {
            next.selection = selection;
        }
        Action::LookupStarted(token) => {
            next.latest_lookup = next.latest_lookup.max(token);
            next.lookups_in_flight += 1;
            next.request.loading_recipe = true;
            next.request.error = None;
        }
        Action::LookupSucceeded { token, recipe } => {
            next.lookups_in_flight = next.lookups_in_flight.saturating_sub(1);
            if lookup_applies(state, token) {
                next.request.error = recipe.is_none().then(|| NO_MATCHING_RECIPE.to_string());
                next.recipe = recipe;
                next.comments.clear();
                next.comment_paging = None;
                next.request.loading_recipe = false;
            }
        }
        Action::LookupFailed { token } => {
            next.lookups_in_flight = next.lookups_in_flight.saturating_sub(1);
            if lookup_applies(state, token) {
                next.recipe = None;
                next.comments.clear();
                next.comment_paging = None;
                next.request.error = Some(RECIPE_LOOKUP_FAILED.to_string());
                next.request.loading_recipe = false;
            }
        }
        Action::FeedbackStarted(kind) => {
            next.request.set_submitting(kind, true);
        }
        Action::FeedbackSucceeded {
            recipe_id,
            kind,
            count,
        } => {
            if recipe_is(state, &recipe_id) {
                next.recipe = next.recipe.take().map(|r| r.with_count(kind, count));
            }
        }
        Action::FeedbackFinished(kind) => {
            next.request.set_submitting(kind, false);
        }
        Action::CommentsStarted => {
            next.request.loading_comments = true;
        }
        Action::CommentsLoaded {
            recipe_id,
            comments,
            paging,
        } => {
            if recipe_is(state, &recipe_id) {
                next.comments = comments;
                next.comment_paging = Some(paging);
            }
        }
        Action::CommentsFinished => {
            next.request.loading_comments = false;
        }
        Action::CommentSubmitStarted => {
            next.request.submitting_comment = true;
        }
        Action::CommentAdded { recipe_id, comment } => {
            if recipe_is(state, &recipe_id) {
                next.comments.push(comment);
                if let Some(paging) = next.comment_paging.as_mut() {
                    paging.total += 1;
                }
            }
        }
        Action::CommentSubmitFinished => {
            next.request.submitting_comment = false;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{OptionSet, OptionSets};
    use crate::domain::comment::model::{Comment, CommentPaging};
    use crate::domain::recipe::model::{Recipe, VoteKind};
    use crate::domain::selection::model::{Selection, SelectionField};

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Recipe {}", id),
            context: "Chop, fry, serve.".to_string(),
            likes: 2,
            dislikes: 5,
        }
    }

    fn options() -> OptionSets {
        OptionSets {
            vegetables: OptionSet::from_names(["Cabbage", "Potato"]),
            proteins: OptionSet::from_names(["Egg"]),
            flavors: OptionSet::from_names(["Sour", "Spicy"]),
        }
    }

    fn run(state: ControllerState, actions: Vec<Action>) -> ControllerState {
        actions.into_iter().fold(state, |s, a| reduce(&s, a))
    }

    fn with_recipe(id: &str) -> ControllerState {
        ControllerState {
            recipe: Some(recipe(id)),
            ..ControllerState::default()
        }
    }

    #[test]
    fn should_not_mutate_input_state() {
        let state = ControllerState::default();

        let next = reduce(&state, Action::LoadStarted);

        assert!(!state.request.loading_ingredients);
        assert!(next.request.loading_ingredients);
    }

    #[test]
    fn should_fill_options_and_clear_flag_on_load_success() {
        let state = run(
            ControllerState::default(),
            vec![Action::LoadStarted, Action::LoadSucceeded(options())],
        );

        assert_eq!(state.options, options());
        assert!(!state.request.loading_ingredients);
        assert_eq!(state.request.error, None);
    }

    #[test]
    fn should_leave_options_empty_and_set_error_on_load_failure() {
        let state = run(
            ControllerState::default(),
            vec![
                Action::LoadStarted,
                Action::LoadFailed("failed to load ingredients: boom".to_string()),
            ],
        );

        assert!(state.options.is_empty());
        assert!(!state.request.loading_ingredients);
        assert_eq!(
            state.request.error.as_deref(),
            Some("failed to load ingredients: boom")
        );
    }

    #[test]
    fn should_keep_loaded_options_when_reload_fails() {
        let loaded = ControllerState {
            options: options(),
            ..ControllerState::default()
        };

        let state = run(
            loaded,
            vec![
                Action::LoadStarted,
                Action::LoadFailed("failed to load ingredients: reset".to_string()),
            ],
        );

        assert_eq!(state.options, options());
        assert!(!state.request.loading_ingredients);
        assert_eq!(
            state.request.error.as_deref(),
            Some("failed to load ingredients: reset")
        );
    }

    #[test]
    fn should_overwrite_one_field_on_select() {
        let state = ControllerState {
            selection: Selection::new("Cabbage", "Egg", "Sour"),
            ..ControllerState::default()
        };

        let next = reduce(
            &state,
            Action::SelectField(SelectionField::Flavor, "Spicy".to_string()),
        );

        assert_eq!(next.selection, Selection::new("Cabbage", "Egg", "Spicy"));
    }

    #[test]
    fn should_replace_whole_selection_on_select_all() {
        let next = reduce(
            &ControllerState::default(),
            Action::SelectAll(Selection::new("Potato", "Egg", "Sour")),
        );

        assert!(next.selection.is_complete());
        assert_eq!(next.selection.vegetable.as_deref(), Some("Potato"));
    }

    #[test]
    fn should_take_returned_recipe_on_lookup_success() {
        let state = run(
            ControllerState::default(),
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupSucceeded {
                    token: LookupToken(1),
                    recipe: Some(recipe("A")),
                },
            ],
        );

        assert_eq!(state.recipe, Some(recipe("A")));
        assert!(!state.request.loading_recipe);
        assert_eq!(state.request.error, None);
        assert_eq!(state.lookups_in_flight, 0);
    }

    #[test]
    fn should_report_no_match_when_lookup_returns_nothing() {
        let state = run(
            with_recipe("old"),
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupSucceeded {
                    token: LookupToken(1),
                    recipe: None,
                },
            ],
        );

        assert_eq!(state.recipe, None);
        assert_eq!(state.request.error.as_deref(), Some("no matching recipe found"));
        assert!(!state.request.loading_recipe);
    }

    #[test]
    fn should_clear_recipe_and_set_generic_error_on_lookup_failure() {
        let state = run(
            with_recipe("old"),
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupFailed {
                    token: LookupToken(1),
                },
            ],
        );

        assert_eq!(state.recipe, None);
        assert_eq!(state.request.error.as_deref(), Some(RECIPE_LOOKUP_FAILED));
        assert!(!state.request.loading_recipe);
    }

    #[test]
    fn should_drop_stale_response_under_latest_issued_ordering() {
        let state = run(
            ControllerState::new(LookupOrdering::LatestIssued),
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupStarted(LookupToken(2)),
                Action::LookupSucceeded {
                    token: LookupToken(2),
                    recipe: Some(recipe("B")),
                },
                Action::LookupSucceeded {
                    token: LookupToken(1),
                    recipe: Some(recipe("A")),
                },
            ],
        );

        assert_eq!(state.recipe, Some(recipe("B")));
        assert!(!state.request.loading_recipe);
        assert_eq!(state.lookups_in_flight, 0);
    }

    #[test]
    fn should_keep_loading_until_latest_lookup_lands() {
        let state = run(
            ControllerState::new(LookupOrdering::LatestIssued),
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupStarted(LookupToken(2)),
                Action::LookupFailed {
                    token: LookupToken(1),
                },
            ],
        );

        assert!(state.request.loading_recipe);
        assert_eq!(state.request.error, None);
        assert_eq!(state.lookups_in_flight, 1);
    }

    #[test]
    fn should_let_last_completed_response_win_under_last_completed_ordering() {
        let state = run(
            ControllerState::new(LookupOrdering::LastCompleted),
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupStarted(LookupToken(2)),
                Action::LookupSucceeded {
                    token: LookupToken(2),
                    recipe: Some(recipe("B")),
                },
                Action::LookupSucceeded {
                    token: LookupToken(1),
                    recipe: Some(recipe("A")),
                },
            ],
        );

        assert_eq!(state.recipe, Some(recipe("A")));
    }

    #[test]
    fn should_clear_comments_when_recipe_is_replaced() {
        let mut state = with_recipe("A");
        state.comments = vec![Comment {
            id: 1,
            text: "nice".to_string(),
        }];
        state.comment_paging = Some(CommentPaging {
            total: 1,
            pages: 1,
            current_page: 1,
        });

        let state = run(
            state,
            vec![
                Action::LookupStarted(LookupToken(1)),
                Action::LookupSucceeded {
                    token: LookupToken(1),
                    recipe: Some(recipe("B")),
                },
            ],
        );

        assert!(state.comments.is_empty());
        assert_eq!(state.comment_paging, None);
    }

    #[test]
    fn should_update_only_likes_on_like_feedback() {
        let state = run(
            with_recipe("A"),
            vec![
                Action::FeedbackStarted(VoteKind::Like),
                Action::FeedbackSucceeded {
                    recipe_id: "A".to_string(),
                    kind: VoteKind::Like,
                    count: 7,
                },
            ],
        );

        let shown = state.recipe.clone().unwrap();
        assert_eq!(shown.likes, 7);
        assert_eq!(shown, recipe("A").with_count(VoteKind::Like, 7));
        assert!(state.request.submitting_like);
        assert!(!state.request.submitting_dislike);

        let state = reduce(&state, Action::FeedbackFinished(VoteKind::Like));
        assert!(!state.request.submitting_like);
    }

    #[test]
    fn should_ignore_feedback_for_a_recipe_no_longer_shown() {
        let state = reduce(
            &with_recipe("B"),
            Action::FeedbackSucceeded {
                recipe_id: "A".to_string(),
                kind: VoteKind::Dislike,
                count: 99,
            },
        );

        assert_eq!(state.recipe, Some(recipe("B")));
    }

    #[test]
    fn should_load_and_append_comments_for_current_recipe() {
        let state = run(
            with_recipe("A"),
            vec![
                Action::CommentsStarted,
                Action::CommentsLoaded {
                    recipe_id: "A".to_string(),
                    comments: vec![Comment {
                        id: 1,
                        text: "tasty".to_string(),
                    }],
                    paging: CommentPaging {
                        total: 1,
                        pages: 1,
                        current_page: 1,
                    },
                },
                Action::CommentsFinished,
                Action::CommentSubmitStarted,
                Action::CommentAdded {
                    recipe_id: "A".to_string(),
                    comment: Comment {
                        id: 2,
                        text: "too oily".to_string(),
                    },
                },
                Action::CommentSubmitFinished,
            ],
        );

        assert_eq!(state.comments.len(), 2);
        assert_eq!(state.comments[1].text, "too oily");
        assert_eq!(state.comment_paging.map(|p| p.total), Some(2));
        assert!(!state.request.loading_comments);
        assert!(!state.request.submitting_comment);
    }

    #[test]
    fn should_ignore_comments_for_other_recipe() {
        let state = reduce(
            &with_recipe("A"),
            Action::CommentsLoaded {
                recipe_id: "Z".to_string(),
                comments: vec![Comment {
                    id: 1,
                    text: "hm".to_string(),
                }],
                paging: CommentPaging::default(),
            },
        );

        assert!(state.comments.is_empty());
        assert_eq!(state.comment_paging, None);
    }
}
