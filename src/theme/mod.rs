//! Light/dark theme preference
//!
//! Resolution order: a valid persisted choice, then the system preference, then light.

pub mod manager;
pub mod system;

pub use manager::{DEFAULT_THEME_KEY, ListenerId, ThemeManager};
pub use system::{EnvAppearance, FixedAppearance, SystemAppearance};
