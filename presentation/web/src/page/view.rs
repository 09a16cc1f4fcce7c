use html_escape::{encode_double_quoted_attribute, encode_text};

use business::domain::catalog::model::OptionSet;
use business::domain::comment::model::CommentPaging;
use business::domain::controller::state::ControllerState;
use business::domain::recipe::model::{Recipe, VoteKind};
use business::domain::selection::model::SelectionField;

pub const LOADING_INGREDIENTS: &str = "Loading ingredients...";
pub const LOADING_RECIPE: &str = "Loading recipe...";
pub const PICK_HINT: &str = "Pick a vegetable, a protein and a flavor to get a recipe suggestion.";

const STYLE: &str = "body{font-family:sans-serif;max-width:52rem;margin:auto;padding:1rem}\
.card{border:1px solid #ccc;border-radius:.5rem;padding:1rem;margin-bottom:1rem}\
.options button{margin:.2rem}.selected{font-weight:bold;background:#222;color:#fff}\
.error{color:#c00}";

fn section_title(field: SelectionField) -> &'static str {
    match field {
        SelectionField::Vegetable => "Vegetables",
        SelectionField::Protein => "Proteins",
        SelectionField::Flavor => "Flavors",
    }
}

fn options_for(state: &ControllerState, field: SelectionField) -> &OptionSet {
    match field {
        SelectionField::Vegetable => &state.options.vegetables,
        SelectionField::Protein => &state.options.proteins,
        SelectionField::Flavor => &state.options.flavors,
    }
}

fn render_option_group(out: &mut String, state: &ControllerState, field: SelectionField) {
    let selected = state.selection.get(field);

    out.push_str(&format!("<h3>{}</h3>", section_title(field)));
    out.push_str(r#"<form method="post" action="/select" class="options">"#);
    out.push_str(&format!(
        r#"<input type="hidden" name="field" value="{}">"#,
        field
    ));
    for name in options_for(state, field).names() {
        let class = if selected == Some(name) {
            "option selected"
        } else {
            "option"
        };
        out.push_str(&format!(
            r#"<button type="submit" name="value" value="{}" class="{}">{}</button>"#,
            encode_double_quoted_attribute(name),
            class,
            encode_text(name)
        ));
    }
    out.push_str("</form>");
}

fn render_selection_card(out: &mut String, state: &ControllerState) {
    out.push_str(r#"<section class="card" id="ingredients">"#);
    out.push_str("<h2>Choose your ingredients</h2>");

    if state.request.loading_ingredients {
        out.push_str(&format!("<p>{}</p>", LOADING_INGREDIENTS));
    } else if state.options.is_empty() {
        if let Some(error) = &state.request.error {
            out.push_str(&format!(r#"<p class="error">{}</p>"#, encode_text(error)));
        }
        out.push_str(
            r#"<form method="post" action="/reload"><button type="submit">Retry</button></form>"#,
        );
    } else {
        for field in SelectionField::ALL {
            render_option_group(out, state, field);
        }
        out.push_str(
            r#"<form method="post" action="/randomize"><button type="submit" title="Random pick">Surprise me</button></form>"#,
        );
    }

    out.push_str("</section>");
}

fn vote_button(state: &ControllerState, recipe: &Recipe, kind: VoteKind) -> String {
    let busy = state.request.submitting(kind);
    let (action, label, busy_label, count) = match kind {
        VoteKind::Like => ("/like", "Like", "Liking...", recipe.likes),
        VoteKind::Dislike => ("/dislike", "Dislike", "Disliking...", recipe.dislikes),
    };
    let text = if busy {
        busy_label.to_string()
    } else {
        format!("{} ({})", label, count)
    };

    format!(
        r#"<form method="post" action="{}" class="vote"><button type="submit"{}>{}</button></form>"#,
        action,
        if busy { " disabled" } else { "" },
        text
    )
}

fn comment_page_button(page: u32, label: &str) -> String {
    format!(
        r#"<form method="post" action="/comments/load" class="pager"><input type="hidden" name="page" value="{}"><button type="submit">{}</button></form>"#,
        page, label
    )
}

fn render_comment_pager(out: &mut String, paging: CommentPaging) {
    if paging.has_previous() {
        out.push_str(&comment_page_button(paging.current_page - 1, "Newer"));
    }
    out.push_str(&format!(
        "<p>Page {} of {} ({} comments)</p>",
        paging.current_page,
        paging.pages.max(1),
        paging.total
    ));
    if paging.has_next() {
        out.push_str(&comment_page_button(paging.current_page + 1, "Older"));
    }
}

fn render_comments(out: &mut String, state: &ControllerState) {
    out.push_str(r#"<div class="comments"><h4>Comments</h4>"#);

    if state.request.loading_comments {
        out.push_str("<p>Loading comments...</p>");
    } else if state.comments.is_empty() {
        out.push_str(
            r#"<form method="post" action="/comments/load"><button type="submit">Show comments</button></form>"#,
        );
    } else {
        out.push_str("<ul>");
        for comment in &state.comments {
            out.push_str(&format!("<li>{}</li>", encode_text(&comment.text)));
        }
        out.push_str("</ul>");
        if let Some(paging) = state.comment_paging {
            render_comment_pager(out, paging);
        }
    }

    out.push_str(&format!(
        r#"<form method="post" action="/comments"><textarea name="text" rows="2"></textarea><button type="submit"{}>Post</button></form>"#,
        if state.request.submitting_comment {
            " disabled"
        } else {
            ""
        }
    ));
    out.push_str("</div>");
}

fn render_recipe_card(out: &mut String, state: &ControllerState) {
    out.push_str(r#"<section class="card" id="recipe">"#);
    out.push_str("<h2>Your recipe</h2>");

    if state.request.loading_recipe {
        out.push_str(&format!("<p>{}</p>", LOADING_RECIPE));
    } else if let Some(error) = state
        .request
        .error
        .as_ref()
        .filter(|_| !state.options.is_empty())
    {
        out.push_str(&format!(r#"<p class="error">{}</p>"#, encode_text(error)));
    } else if let Some(recipe) = &state.recipe {
        out.push_str(&format!(
            "<h3>{}</h3><p>{}</p>",
            encode_text(&recipe.name),
            encode_text(&recipe.context)
        ));
        out.push_str(&vote_button(state, recipe, VoteKind::Like));
        out.push_str(&vote_button(state, recipe, VoteKind::Dislike));
        render_comments(out, state);
    } else {
        out.push_str(&format!("<p>{}</p>", PICK_HINT));
    }

    out.push_str("</section>");
}

/// Renders the whole page for `state`.
pub fn render(state: &ControllerState) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str(&format!("<title>Recipe Picker</title><style>{}</style>", STYLE));
    out.push_str("</head><body><header><h1>Recipe Picker</h1></header>");

    render_selection_card(&mut out, state);
    render_recipe_card(&mut out, state);

    out.push_str(&format!(
        "<footer>v{}</footer></body></html>",
        env!("CARGO_PKG_VERSION")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::model::OptionSets;
    use business::domain::comment::model::Comment;
    use business::domain::selection::model::Selection;

    fn loaded() -> ControllerState {
        ControllerState {
            options: OptionSets {
                vegetables: OptionSet::from_names(["Spinach", "Bok choy"]),
                proteins: OptionSet::from_names(["Egg"]),
                flavors: OptionSet::from_names(["Sweet & sour"]),
            },
            ..ControllerState::default()
        }
    }

    fn recipe() -> Recipe {
        Recipe {
            id: "R1".to_string(),
            name: "Egg <b>fried</b> spinach".to_string(),
            context: "Heat the wok.".to_string(),
            likes: 7,
            dislikes: 1,
        }
    }

    #[test]
    fn should_show_loading_text_while_ingredients_load() {
        let mut state = ControllerState::default();
        state.request.loading_ingredients = true;

        let html = render(&state);

        assert!(html.contains(LOADING_INGREDIENTS));
        assert!(!html.contains("action=\"/select\""));
    }

    #[test]
    fn should_show_load_error_with_retry() {
        let mut state = ControllerState::default();
        state.request.error = Some("failed to load ingredients: gateway.status: 500".to_string());

        let html = render(&state);

        assert!(html.contains("failed to load ingredients: gateway.status: 500"));
        assert!(html.contains("action=\"/reload\""));
    }

    #[test]
    fn should_show_load_error_only_in_options_card() {
        let mut state = ControllerState::default();
        state.request.error = Some("failed to load ingredients: gateway.status: 500".to_string());

        let html = render(&state);

        assert_eq!(
            html.matches("failed to load ingredients: gateway.status: 500")
                .count(),
            1
        );
        assert!(html.contains(PICK_HINT));
    }

    #[test]
    fn should_render_options_and_highlight_selection() {
        let mut state = loaded();
        state.selection = Selection::default().with(SelectionField::Vegetable, "Bok choy");

        let html = render(&state);

        assert!(html.contains(
            r#"<button type="submit" name="value" value="Bok choy" class="option selected">Bok choy</button>"#
        ));
        assert!(html.contains(
            r#"<button type="submit" name="value" value="Spinach" class="option">Spinach</button>"#
        ));
        assert!(html.contains("Sweet &amp; sour"));
        assert!(html.contains(PICK_HINT));
    }

    #[test]
    fn should_escape_recipe_text_and_show_counts() {
        let mut state = loaded();
        state.recipe = Some(recipe());

        let html = render(&state);

        assert!(html.contains("Egg &lt;b&gt;fried&lt;/b&gt; spinach"));
        assert!(html.contains("Like (7)"));
        assert!(html.contains("Dislike (1)"));
    }

    #[test]
    fn should_show_busy_label_and_disable_vote_button() {
        let mut state = loaded();
        state.recipe = Some(recipe());
        state.request.submitting_like = true;

        let html = render(&state);

        assert!(html.contains("<button type=\"submit\" disabled>Liking...</button>"));
        assert!(html.contains("Dislike (1)"));
    }

    #[test]
    fn should_show_recipe_error_but_keep_options() {
        let mut state = loaded();
        state.request.error = Some("no matching recipe found".to_string());

        let html = render(&state);

        assert!(html.contains("no matching recipe found"));
        assert!(html.contains("value=\"Spinach\""));
    }

    #[test]
    fn should_list_comments() {
        let mut state = loaded();
        state.recipe = Some(recipe());
        state.comments = vec![Comment {
            id: 1,
            text: "<script>x</script>".to_string(),
        }];

        let html = render(&state);

        assert!(html.contains("<li>&lt;script&gt;x&lt;/script&gt;</li>"));
        assert!(!html.contains("Show comments"));
    }

    #[test]
    fn should_link_neighbouring_comment_pages() {
        let mut state = loaded();
        state.recipe = Some(recipe());
        state.comments = vec![Comment {
            id: 30,
            text: "middle".to_string(),
        }];
        state.comment_paging = Some(CommentPaging {
            total: 50,
            pages: 3,
            current_page: 2,
        });

        let html = render(&state);

        assert!(html.contains("Page 2 of 3 (50 comments)"));
        assert!(html.contains(r#"name="page" value="1"><button type="submit">Newer"#));
        assert!(html.contains(r#"name="page" value="3"><button type="submit">Older"#));
    }
}
