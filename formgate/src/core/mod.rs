//! Deterministic, pure logic for sign-up form validation.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! snapshots and return deterministic outputs suitable for tests.

pub mod engine;
pub mod form;
pub mod rules;
pub mod types;
