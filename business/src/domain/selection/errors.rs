#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection.invalid_field")]
    InvalidField(String),
}
