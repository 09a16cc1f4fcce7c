#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
}

/// One page of comments as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
}

impl CommentPage {
    pub fn paging(&self) -> CommentPaging {
        CommentPaging {
            total: self.total,
            pages: self.pages,
            current_page: self.current_page,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentPaging {
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
}

impl CommentPaging {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.pages
    }
}

/// Validates and normalizes comment text before it is sent.
pub fn normalize_comment_text(text: &str) -> Result<String, super::errors::CommentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(super::errors::CommentError::TextEmpty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::errors::CommentError;

    #[test]
    fn should_trim_comment_text() {
        assert_eq!(
            normalize_comment_text("  too salty  ").unwrap(),
            "too salty"
        );
    }

    #[test]
    fn should_report_neighbouring_pages() {
        let first = CommentPaging {
            total: 45,
            pages: 3,
            current_page: 1,
        };
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = CommentPaging {
            current_page: 3,
            ..first
        };
        assert!(last.has_previous());
        assert!(!last.has_next());

        assert!(!CommentPaging::default().has_next());
    }

    #[test]
    fn should_reject_blank_comment_text() {
        assert!(matches!(
            normalize_comment_text(" \n\t "),
            Err(CommentError::TextEmpty)
        ));
    }
}
