//! The reference recipe, defined for six people.

/// Number of servings the base recipe is written for.
pub const BASE_SERVINGS: f64 = 6.0;

/// Grams of rice in the base recipe. Broth is derived from this.
pub const BASE_RICE_GRAMS: f64 = 600.0;

/// Phrase shown for ingredients that are not measured.
pub const TO_TASTE: &str = "Al gust";

/// How a measured ingredient is scaled and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Rice, in grams. Shown in kilograms from 1000 g up.
    Rice,
    /// Broth, in litres. Follows the rice and the pan ratio.
    Broth,
    /// Dessertspoons (sweet paprika).
    Dessertspoon,
    /// Saffron infusions.
    Infusion,
    /// Whole pieces.
    Unit,
}

/// Base amount of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Portion {
    /// Numeric amount for six people.
    Measured {
        /// Quantity in the measure's base unit.
        amount: f64,
        /// Measure driving scaling and formatting.
        measure: Measure,
    },
    /// Not quantified.
    ToTaste,
}

/// An entry of the base recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ingredient {
    /// Slug identifier, underscore separated.
    pub id: &'static str,
    /// Symbol used in the share text.
    pub emoji: &'static str,
    /// Base amount.
    pub portion: Portion,
}

impl Ingredient {
    const fn measured(id: &'static str, emoji: &'static str, amount: f64, measure: Measure) -> Self {
        Self {
            id,
            emoji,
            portion: Portion::Measured { amount, measure },
        }
    }

    const fn to_taste(id: &'static str, emoji: &'static str) -> Self {
        Self {
            id,
            emoji,
            portion: Portion::ToTaste,
        }
    }
}

/// Seafood paella for six, in declaration (display) order.
pub const BASE_RECIPE: [Ingredient; 13] = [
    Ingredient::measured("arros", "🌾", BASE_RICE_GRAMS, Measure::Rice),
    Ingredient::measured("fumet_de_peix", "🐟", 1.0, Measure::Broth),
    Ingredient::measured("calamar_gran", "🦑", 1.0, Measure::Unit),
    Ingredient::measured("sipia_gran", "🦑", 1.0, Measure::Unit),
    Ingredient::measured("gambons", "🦐", 12.0, Measure::Unit),
    Ingredient::measured("nyora", "🌶️", 1.0, Measure::Unit),
    Ingredient::measured("ceba_de_figueres", "🧅", 1.0, Measure::Unit),
    Ingredient::measured("tomàquet_de_pera_madur", "🍅", 3.0, Measure::Unit),
    Ingredient::measured("grills_all", "🧄", 2.0, Measure::Unit),
    Ingredient::measured("pebre_vermell_dolç", "🌶️", 1.0, Measure::Dessertspoon),
    Ingredient::measured("zafrà", "🌼", 1.0, Measure::Infusion),
    Ingredient::to_taste("oli", "🫒"),
    Ingredient::to_taste("sal", "🧂"),
];
