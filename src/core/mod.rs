//! Core processing building blocks: center crop, Lanczos resize, the in-memory
//! render pipeline, and save helpers. These are internal primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
