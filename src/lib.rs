//! Paelles - a paella recipe calculator.
//!
//! Paelles scales a six-person seafood paella to any number of guests and
//! any of the supported pan sizes, and builds a shareable summary with a
//! link that reopens the same calculation.
//!
//! # Features
//!
//! - Linear scaling of every measured ingredient
//! - Broth derived from the rice weight and the pan's ratio
//! - Localized units with singular/plural labels
//! - Share text and share links, clipboard integration
//! - Interactive terminal UI with Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use paelles::recipe::{scale_recipe, PanSize};
//!
//! let recipe = scale_recipe(PanSize::Cm70, 6);
//! assert_eq!(recipe.get("Arros"), Some("600 grams"));
//! assert_eq!(recipe.get("Fumet de peix"), Some("2.70 litres"));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod recipe;
pub mod share;
pub mod text;
pub mod ui;

pub use calculator::{calculate, InputSource, Inputs, RecipeRenderer, TextRenderer};
pub use error::{PaellaError, Result};
