pub mod catalog;
pub mod client;
pub mod comments;
mod dto;
pub mod recipe_finder;
pub mod recipe_voter;
