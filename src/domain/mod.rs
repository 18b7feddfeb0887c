pub mod catalog;
pub mod notification;
