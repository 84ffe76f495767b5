//! The recipe scaler.

use super::base::{Measure, Portion, BASE_RECIPE, BASE_RICE_GRAMS, BASE_SERVINGS, TO_TASTE};
use super::format::{display_name, format_quantity};
use super::pan::PanSize;

/// One line of a scaled recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeLine {
    /// Display name, e.g. "Fumet de peix".
    pub name: String,
    /// Decorative symbol.
    pub emoji: &'static str,
    /// Scaled amount in the measure's base unit, `None` for "to taste".
    pub amount: Option<f64>,
    /// Formatted quantity, e.g. "2.70 litres".
    pub quantity: String,
}

/// Ingredients scaled for a pan and a number of guests.
///
/// Lines keep the base recipe's declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaledRecipe {
    lines: Vec<RecipeLine>,
}

impl ScaledRecipe {
    /// All lines, in recipe order.
    pub fn lines(&self) -> &[RecipeLine] {
        &self.lines
    }

    /// Iterate over (display name, formatted quantity) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.lines
            .iter()
            .map(|line| (line.name.as_str(), line.quantity.as_str()))
    }

    /// Look up the formatted quantity for a display name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.quantity.as_str())
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the recipe has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Scale the base recipe to `guests` people cooking in a `pan`.
///
/// Everything but the broth scales linearly with the guest count. The broth
/// is derived from the scaled rice weight and the pan's litres-per-kilogram
/// ratio, so a wider pan needs more liquid for the same rice.
pub fn scale_recipe(pan: PanSize, guests: u32) -> ScaledRecipe {
    let guests = f64::from(guests);
    let total_rice = BASE_RICE_GRAMS / BASE_SERVINGS * guests;
    let total_broth = total_rice / 1000.0 * pan.broth_ratio();

    let lines = BASE_RECIPE
        .iter()
        .map(|ingredient| {
            let (amount, quantity) = match ingredient.portion {
                Portion::Measured { amount, measure } => {
                    let scaled = match measure {
                        Measure::Rice => total_rice,
                        Measure::Broth => total_broth,
                        _ => amount / BASE_SERVINGS * guests,
                    };
                    (Some(scaled), format_quantity(scaled, measure))
                },
                Portion::ToTaste => (None, TO_TASTE.to_string()),
            };

            RecipeLine {
                name: display_name(ingredient.id),
                emoji: ingredient.emoji,
                amount,
                quantity,
            }
        })
        .collect();

    ScaledRecipe { lines }
}
