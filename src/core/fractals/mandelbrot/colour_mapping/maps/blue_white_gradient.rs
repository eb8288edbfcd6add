use crate::core::data::colour::Colour;

#[must_use]
pub fn blue_white_gradient(t: f64) -> Colour {
    let t = t.clamp(0.0, 1.0);
    let s = 1.0 - t;

    Colour {
        r: (9.0 * s * t * t * t * 255.0) as u8,
        g: (15.0 * s * s * t * t * 255.0) as u8,
        b: (8.5 * s * s * s * t * 255.0) as u8,
    }
}
