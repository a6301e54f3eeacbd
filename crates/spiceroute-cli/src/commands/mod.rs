pub mod catalog;
pub mod chat;
pub mod detail;
pub mod list;
