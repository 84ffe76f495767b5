//! Quantity and name formatting.

use super::base::Measure;

/// Turn an ingredient slug into a display name.
///
/// Underscores become spaces and the first character is uppercased. The
/// rest of the string keeps its casing.
pub fn display_name(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a scaled amount for display, with its localized unit.
pub fn format_quantity(value: f64, measure: Measure) -> String {
    match measure {
        Measure::Rice if value >= 1000.0 => format!("{:.2} kg", value / 1000.0),
        Measure::Rice => counted(value, "gram", "grams"),
        Measure::Broth => format!("{:.2} litres", value),
        Measure::Dessertspoon => counted(value, "cullerada de postre", "cullerades de postre"),
        Measure::Infusion => counted(value, "infusió", "infusions"),
        Measure::Unit => counted(value, "unitat", "unitats"),
    }
}

// Label is picked on the rounded value, the one the reader sees.
fn counted(value: f64, singular: &str, plural: &str) -> String {
    let rounded = value.round();
    let label = if rounded == 1.0 { singular } else { plural };
    format!("{:.0} {}", rounded, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_deslugifies() {
        assert_eq!(display_name("fumet_de_peix"), "Fumet de peix");
        assert_eq!(display_name("zafrà"), "Zafrà");
        assert_eq!(display_name("pebre_vermell_dolç"), "Pebre vermell dolç");
        assert_eq!(display_name("àpat_gran"), "Àpat gran");
        assert_eq!(display_name("oli_DOP"), "Oli DOP");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn rice_switches_to_kilograms() {
        assert_eq!(format_quantity(600.0, Measure::Rice), "600 grams");
        assert_eq!(format_quantity(999.4, Measure::Rice), "999 grams");
        assert_eq!(format_quantity(1000.0, Measure::Rice), "1.00 kg");
        assert_eq!(format_quantity(2000.0, Measure::Rice), "2.00 kg");
        assert_eq!(format_quantity(1.2, Measure::Rice), "1 gram");
    }

    #[test]
    fn broth_always_has_two_decimals() {
        assert_eq!(format_quantity(2.7, Measure::Broth), "2.70 litres");
        assert_eq!(format_quantity(1.0, Measure::Broth), "1.00 litres");
        assert_eq!(format_quantity(0.0, Measure::Broth), "0.00 litres");
    }

    #[test]
    fn labels_follow_rounded_value() {
        assert_eq!(format_quantity(0.67, Measure::Unit), "1 unitat");
        assert_eq!(format_quantity(1.4, Measure::Unit), "1 unitat");
        assert_eq!(format_quantity(0.33, Measure::Unit), "0 unitats");
        assert_eq!(format_quantity(1.5, Measure::Unit), "2 unitats");
        assert_eq!(format_quantity(1.0, Measure::Dessertspoon), "1 cullerada de postre");
        assert_eq!(format_quantity(2.0, Measure::Dessertspoon), "2 cullerades de postre");
        assert_eq!(format_quantity(1.0, Measure::Infusion), "1 infusió");
        assert_eq!(format_quantity(3.0, Measure::Infusion), "3 infusions");
    }
}
