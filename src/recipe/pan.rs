//! Supported paella pans and their broth ratios.

use std::fmt;
use std::str::FromStr;

use crate::error::{PaellaError, Result};

/// Paella pan diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanSize {
    /// 70 cm pan.
    #[default]
    Cm70,
    /// 60 cm pan.
    Cm60,
    /// 50 cm pan.
    Cm50,
}

impl PanSize {
    /// All supported sizes, in selector order.
    pub const ALL: [PanSize; 3] = [PanSize::Cm70, PanSize::Cm60, PanSize::Cm50];

    /// Diameter in centimetres.
    pub fn centimetres(self) -> u32 {
        match self {
            PanSize::Cm70 => 70,
            PanSize::Cm60 => 60,
            PanSize::Cm50 => 50,
        }
    }

    /// Litres of broth per kilogram of rice.
    pub fn broth_ratio(self) -> f64 {
        match self {
            PanSize::Cm70 => 4.5,
            PanSize::Cm60 => 3.5,
            PanSize::Cm50 => 3.0,
        }
    }

    /// Get the next size in the selector, wrapping around.
    pub fn next(self) -> Self {
        match self {
            PanSize::Cm70 => PanSize::Cm60,
            PanSize::Cm60 => PanSize::Cm50,
            PanSize::Cm50 => PanSize::Cm70,
        }
    }

    /// Get the previous size in the selector, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            PanSize::Cm70 => PanSize::Cm50,
            PanSize::Cm60 => PanSize::Cm70,
            PanSize::Cm50 => PanSize::Cm60,
        }
    }
}

impl fmt::Display for PanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.centimetres())
    }
}

impl FromStr for PanSize {
    type Err = PaellaError;

    /// Only the exact selector values are accepted ("70", "60", "50").
    fn from_str(s: &str) -> Result<Self> {
        PanSize::ALL
            .into_iter()
            .find(|size| size.to_string() == s)
            .ok_or_else(|| PaellaError::unsupported_pan_size(s))
    }
}
