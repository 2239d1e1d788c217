//! Project-listing domain: shared models, the listing API contract, and response shaping.

pub mod response;
pub mod service;
pub mod types;
