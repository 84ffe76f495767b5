//! Calculation entry point and the seams around it.
//!
//! The scaler itself is pure. Front ends plug in through two small traits:
//! [`InputSource`] supplies the pan size and guest count, and
//! [`RecipeRenderer`] displays the result.

use std::io::Write;

use crate::error::Result;
use crate::recipe::{scale_recipe, PanSize, ScaledRecipe};
use crate::text::{column_width, pad_to_width};

/// Default number of guests.
pub const DEFAULT_GUESTS: u32 = 6;

/// Calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs {
    /// Pan diameter.
    pub pan_size: PanSize,
    /// Number of guests.
    pub guests: u32,
}

impl Inputs {
    /// Create calculator inputs.
    pub fn new(pan_size: PanSize, guests: u32) -> Self {
        Self { pan_size, guests }
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::new(PanSize::default(), DEFAULT_GUESTS)
    }
}

/// Something that can supply the current inputs.
pub trait InputSource {
    /// Read the current pan size and guest count.
    fn read_inputs(&self) -> Inputs;
}

impl InputSource for Inputs {
    fn read_inputs(&self) -> Inputs {
        *self
    }
}

/// Something that can display a scaled recipe.
pub trait RecipeRenderer {
    /// Display `recipe`, computed from `inputs`.
    fn render(&mut self, inputs: &Inputs, recipe: &ScaledRecipe) -> Result<()>;
}

/// Read inputs, scale the recipe and hand it to the renderer.
pub fn calculate<S, R>(source: &S, renderer: &mut R) -> Result<ScaledRecipe>
where
    S: InputSource + ?Sized,
    R: RecipeRenderer + ?Sized,
{
    let inputs = source.read_inputs();
    tracing::debug!(
        pan_size = inputs.pan_size.centimetres(),
        guests = inputs.guests,
        "Calculating recipe"
    );

    let recipe = scale_recipe(inputs.pan_size, inputs.guests);
    renderer.render(&inputs, &recipe)?;
    Ok(recipe)
}

/// Renders a recipe as a plain-text table.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecipeRenderer for TextRenderer<W> {
    fn render(&mut self, inputs: &Inputs, recipe: &ScaledRecipe) -> Result<()> {
        writeln!(
            self.out,
            "Paella de marisc: {} persones, paella de {} cm",
            inputs.guests, inputs.pan_size
        )?;
        writeln!(self.out)?;

        let width = column_width(recipe.entries().map(|(name, _)| name));
        for (name, quantity) in recipe.entries() {
            writeln!(self.out, "{}  {}", pad_to_width(name, width), quantity)?;
        }

        self.out.flush()?;
        Ok(())
    }
}
