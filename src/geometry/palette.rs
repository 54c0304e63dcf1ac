//! Color palette shared by all generated primitives.
//!
//! Every primitive draws its base color, its special-face color, and its
//! list swatch from the same fixed six-entry palette.

use rand::Rng;

use crate::error::GeometryError;

/// RGB color with components in `0.0..=1.0`.
pub type Rgb = [f32; 3];

/// The fixed palette primitives are colored from.
///
/// Hex values: `#e53935 #fbc02d #43a047 #1e88e5 #8e24aa #fb8c00`.
pub const PALETTE: [Rgb; 6] = [
    [229.0 / 255.0, 57.0 / 255.0, 53.0 / 255.0],
    [251.0 / 255.0, 192.0 / 255.0, 45.0 / 255.0],
    [67.0 / 255.0, 160.0 / 255.0, 71.0 / 255.0],
    [30.0 / 255.0, 136.0 / 255.0, 229.0 / 255.0],
    [142.0 / 255.0, 36.0 / 255.0, 170.0 / 255.0],
    [251.0 / 255.0, 140.0 / 255.0, 0.0],
];

/// Picks one palette color uniformly at random.
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

/// Picks a (base, special) color pair with `special != base`.
///
/// The special color is drawn by rejection sampling: draw, compare against
/// the base, redraw on collision. A palette without two distinct entries
/// would never terminate, so that case is rejected up front as a
/// configuration error.
pub(crate) fn pick_color_pair<R: Rng>(
    rng: &mut R,
    palette: &[Rgb],
) -> Result<(Rgb, Rgb), GeometryError> {
    if palette.len() < 2 || palette.iter().all(|c| *c == palette[0]) {
        return Err(GeometryError::PaletteTooSmall);
    }

    let base = palette[rng.random_range(0..palette.len())];
    let mut special = palette[rng.random_range(0..palette.len())];
    while special == base {
        special = palette[rng.random_range(0..palette.len())];
    }

    Ok((base, special))
}

/// Parses a `#RRGGBB` hex string into an [`Rgb`] triple.
///
/// Returns `None` for anything that is not exactly six hex digits
/// (an optional leading `#` is allowed).
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ])
}

/// Formats an [`Rgb`] triple as a `#rrggbb` string for swatch display.
pub fn rgb_to_hex(color: Rgb) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(color[0]), byte(color[1]), byte(color[2]))
}
