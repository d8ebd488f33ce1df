pub mod chat_context;
pub mod condition;
pub mod evaluation;
pub mod history;
pub mod input;
pub mod profile;
