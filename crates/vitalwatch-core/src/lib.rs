//! vitalwatch-core
//!
//! Pure domain types for the VitalWatch health-check service. No I/O and no
//! HTTP dependency: this is the shared vocabulary of the rule engine, the
//! report assembler, the chat responder and the server.

pub mod error;
pub mod models;
