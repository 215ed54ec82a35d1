//! Core data models for shortcut-app generation

pub mod manifest;
pub mod target;
pub mod icon;
pub mod overrides;

pub use manifest::*;
pub use target::*;
pub use icon::*;
pub use overrides::*;
