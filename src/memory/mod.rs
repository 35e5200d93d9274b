//! Session Memory
//!
//! In-memory store for one coaching session: the chat transcript, mood
//! history, and a read-only stats projection

pub mod store;

pub use store::{SessionStats, SessionStore};
