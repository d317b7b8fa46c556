//! Type-safe wrappers and enums for fantasy cricket data.

pub mod role;

pub use role::Role;
