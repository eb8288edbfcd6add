use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::errors::{RenderError, try_vec_with_capacity};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKinds;
use crate::core::fractals::mandelbrot::colour_mapping::maps::blue_white_gradient::blue_white_gradient;
use crate::core::fractals::mandelbrot::colour_mapping::maps::fire_gradient::fire_gradient;

/// Builds the palette for `kind`.
///
/// Gradients are sampled to `max_iterations + 1` entries so every escape
/// iteration gets its own colour; entry 0 (bounded points) is always black.
pub fn mandelbrot_palette_factory(
    kind: PaletteKinds,
    max_iterations: u32,
) -> Result<Palette, RenderError> {
    let gradient: fn(f64) -> Colour = match kind {
        PaletteKinds::BlackWhite => return Ok(Palette::default()),
        PaletteKinds::FireGradient => fire_gradient,
        PaletteKinds::BlueWhiteGradient => blue_white_gradient,
    };

    let len = usize::try_from(max_iterations)
        .ok()
        .and_then(|max| max.checked_add(1))
        .unwrap_or(usize::MAX);
    let mut colours = try_vec_with_capacity::<Colour>(len)?;
    colours.push(Colour::BLACK);
    colours.extend(
        (1..=max_iterations)
            .map(|iteration| gradient(f64::from(iteration) / f64::from(max_iterations.max(1)))),
    );

    Ok(Palette::new(colours)?)
}
