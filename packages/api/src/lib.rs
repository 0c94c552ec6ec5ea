//! # API crate — client access to the activities backend
//!
//! Everything the board UI needs to talk to the backend, with no UI dependency.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: `Activity`, `Activities`, `Participant`, `SignupRequest`, `ServerReply` |
//! | [`backend`] | The `ActivityBackend` trait and its reqwest implementation, `HttpBackend` |
//! | [`error`] | `ApiError`, the single error type every backend returns |
//! | [`settings`] | Client settings (backend origin, message auto-hide delay) |
//!
//! `MemoryBackend` implements the same trait in memory for tests.

pub mod backend;
pub mod error;
pub mod models;
pub mod settings;

mod memory;
pub use memory::MemoryBackend;

pub use backend::{ActivityBackend, HttpBackend};
pub use error::ApiError;
pub use models::{Activities, Activity, Participant, ServerReply, SignupRequest};
pub use settings::Settings;
