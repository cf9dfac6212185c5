//! Platform abstraction layer
//!
//! Adapters between browser events and the simulation:
//! - Keyboard input to `InputFlags`

pub mod input;

pub use input::{InputKey, apply_key};
