// AI event recommendations.
// Flow: validate form → build prompt → one model call → validate output.
// All model calls go through llm_client::CompletionModel.

pub mod flow;
pub mod form;
pub mod handlers;
pub mod prompts;
