pub mod event;
pub mod notice;
pub mod recommendation;
pub mod user;
