//! Recipe data and scaling.
//!
//! This module holds the immutable reference tables (base recipe and pan
//! ratios) and the pure function that scales them to a guest count.

mod base;
mod format;
mod pan;
mod scaler;

pub use base::{Ingredient, Measure, Portion, BASE_RECIPE, BASE_RICE_GRAMS, BASE_SERVINGS, TO_TASTE};
pub use format::{display_name, format_quantity};
pub use pan::PanSize;
pub use scaler::{scale_recipe, RecipeLine, ScaledRecipe};
