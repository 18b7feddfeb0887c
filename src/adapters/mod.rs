pub mod catalog;
pub mod push;
