//! Presentation support.
//!
//! - `theme`: color palettes
//! - `icons`: icon identifiers used by the data tables
//! - `components`: form, carousel and typewriter view-models

pub mod components;
pub mod icons;
pub mod theme;

pub use icons::Icon;
pub use theme::{Theme, ThemeColors};
