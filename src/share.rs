//! Share text and share links.
//!
//! A share link carries the calculator state in two query parameters,
//! `persones` (guests) and `mida_paella` (pan size). Parsing a link goes
//! through the same validation as the input interface, so an unknown pan
//! size or an unreadable guest count falls back to the defaults.

use url::{form_urlencoded, Url};

use crate::calculator::Inputs;
use crate::error::{PaellaError, Result};
use crate::recipe::{scale_recipe, PanSize};

/// Query parameter holding the guest count.
pub const GUESTS_PARAM: &str = "persones";

/// Query parameter holding the pan diameter.
pub const PAN_SIZE_PARAM: &str = "mida_paella";

/// Title used when sharing.
pub const SHARE_TITLE: &str = "Calculadora de Paella de marisc";

/// Build a link that reopens the calculator with `inputs`.
pub fn share_link(base_url: &str, inputs: &Inputs) -> Result<String> {
    let mut url = Url::parse(base_url).map_err(|e| PaellaError::invalid_link(base_url, e))?;

    url.query_pairs_mut()
        .clear()
        .append_pair(GUESTS_PARAM, &inputs.guests.to_string())
        .append_pair(PAN_SIZE_PARAM, &inputs.pan_size.to_string());

    Ok(url.to_string())
}

/// Build the human-readable summary shared with other people.
pub fn share_text(base_url: &str, inputs: &Inputs) -> Result<String> {
    let recipe = scale_recipe(inputs.pan_size, inputs.guests);
    let link = share_link(base_url, inputs)?;

    let mut text = format!(
        "🥘 Paella de marisc:\n\nPersones: {}\nMida paella: {} cm:\n\nIngredients:\n",
        inputs.guests, inputs.pan_size
    );

    let items: Vec<String> = recipe
        .lines()
        .iter()
        .map(|line| format!("{} {}: {}", line.emoji, line.name, line.quantity))
        .collect();
    text.push_str(&items.join("\n"));

    text.push_str("\n👩‍🍳 Bon profit!");
    text.push_str(&format!("\n\nGenerat amb {}", link));

    Ok(text.trim().to_string())
}

impl Inputs {
    /// Read inputs from a query string such as `persones=8&mida_paella=60`.
    ///
    /// Missing or invalid values are replaced with [`Inputs::default`]. A
    /// leading `?` is ignored.
    pub fn from_query(query: &str) -> Self {
        Self::from_query_or(query, Inputs::default())
    }

    /// Like [`Inputs::from_query`], falling back to `defaults`.
    pub fn from_query_or(query: &str, defaults: Inputs) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut pan_value = None;
        let mut guests_value = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                PAN_SIZE_PARAM if pan_value.is_none() => pan_value = Some(value.into_owned()),
                GUESTS_PARAM if guests_value.is_none() => guests_value = Some(value.into_owned()),
                _ => {},
            }
        }

        let pan_size = match pan_value {
            Some(value) => value.parse::<PanSize>().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", PAN_SIZE_PARAM, e);
                defaults.pan_size
            }),
            None => defaults.pan_size,
        };

        let guests = match guests_value.as_deref() {
            None | Some("") => defaults.guests,
            Some(value) => value.parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring {}: not a guest count: {}", GUESTS_PARAM, value);
                defaults.guests
            }),
        };

        Self { pan_size, guests }
    }

    /// Read inputs from a full share link.
    pub fn from_link(link: &str) -> Result<Self> {
        Self::from_link_or(link, Inputs::default())
    }

    /// Like [`Inputs::from_link`], falling back to `defaults`.
    pub fn from_link_or(link: &str, defaults: Inputs) -> Result<Self> {
        let url = Url::parse(link).map_err(|e| PaellaError::invalid_link(link, e))?;
        Ok(Self::from_query_or(url.query().unwrap_or_default(), defaults))
    }
}
