//! Feature encoding and inference over the trained pollution model.
//!
//! The model and the column list it was trained on are opaque artifacts
//! loaded once at startup; `ModelBundle` couples them and is handed
//! immutably to both the batch sweep and the single-query check.

pub mod encoder;
pub mod model;
