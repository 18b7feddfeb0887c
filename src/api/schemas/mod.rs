pub mod catalog;
pub mod health;
pub mod push_tokens;
