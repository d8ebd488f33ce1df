pub mod chat;
pub mod evaluate;
pub mod health;
pub mod report;
pub mod static_files;
