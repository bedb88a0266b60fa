//! Domain Services
//!
//! Pure rendering logic with no I/O dependencies.

mod array_emitter;

pub use array_emitter::{ArrayEmitter, EmittedArray};
