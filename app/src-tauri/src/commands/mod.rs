// PURPOSE: Exposes all sub-modules to the rest of the app, maintaining the same API surface.

pub mod auth;
pub mod data;
pub mod styles;

// Re-export commands so they are accessible via crate::commands::*
pub use auth::*;
pub use data::*;
pub use styles::*;
