//! Property tests for embedgen.
//!
//! Properties use randomized input generation to protect invariants of the
//! array emitter and identifier derivation.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/emitter.rs"]
mod emitter;

#[path = "properties/array_name.rs"]
mod array_name;
