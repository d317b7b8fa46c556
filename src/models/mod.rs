//! Serializable models shared between command handlers.

pub mod output;
