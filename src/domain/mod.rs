//! Domain Layer
//!
//! Pure generation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Asset and API summary
//! - `value_objects/` - Array name, language, literal format, layout
//! - `services/` - The array emitter
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Rendering is deterministic and testable in memory
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
