//! Colour helpers.
//!
//! Configuration carries colours as `#RRGGBB` strings authored in sRGB.
//! Lighting and material data want linear values, so the conversion lives
//! here next to the parser.

use glam::Vec3;

use crate::errors::{Result, SkyringError};

/// Parses a `#RRGGBB` (or `RRGGBB`) hex string into sRGB components in `[0, 1]`.
pub fn parse_hex(hex: &str) -> Result<Vec3> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(SkyringError::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| f32::from(v) / 255.0)
            .map_err(|_| SkyringError::InvalidColor(hex.to_string()))
    };

    Ok(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Converts a single sRGB channel to linear.
#[inline]
#[must_use]
pub fn srgb_to_linear_channel(c: f32) -> f32 {
    if c < 0.040_45 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_703).powf(2.4)
    }
}

/// Converts an sRGB colour to linear space.
#[must_use]
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_to_linear_channel(c.x),
        srgb_to_linear_channel(c.y),
        srgb_to_linear_channel(c.z),
    )
}

/// Parses a hex sRGB string straight into a linear colour.
pub fn linear_from_hex(hex: &str) -> Result<Vec3> {
    parse_hex(hex).map(srgb_to_linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(parse_hex("#FFFFFF").ok(), Some(Vec3::ONE));
        assert_eq!(parse_hex("000000").ok(), Some(Vec3::ZERO));
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_hex("#FFF").is_err());
        assert!(parse_hex("#GG0000").is_err());
        assert!(parse_hex("#ff8a0é").is_err());
    }

    #[test]
    fn linear_conversion_endpoints() {
        assert!((srgb_to_linear_channel(1.0) - 1.0).abs() < 1e-5);
        assert_eq!(srgb_to_linear_channel(0.0), 0.0);
        // mid grey is roughly 0.214 in linear space
        assert!((srgb_to_linear_channel(0.5) - 0.214).abs() < 1e-3);
    }
}
