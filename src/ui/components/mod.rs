//! View-models for interactive pieces of the page.
//!
//! These hold the state and arithmetic behind components; markup is left to
//! whatever renders them, styled from the theme palette.

pub mod carousel;
pub mod input;
pub mod typewriter;

pub use carousel::{CardPosition, Carousel, AUTOPLAY_INTERVAL};
pub use input::{contact_fields, submit_label, FormField, InputKind};
pub use typewriter::{Typewriter, HERO_ROLES};
