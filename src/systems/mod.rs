//! Application systems
//!
//! Frame-level drivers kept out of main.rs so they can be tested headless.

mod animation;

pub use animation::{AnimationResult, AnimationSystem, SetupError};
