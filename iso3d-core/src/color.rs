/// RGB colors with HSL conversion, used for face shading
use std::fmt;

/// An RGB color with 0-255 channels and a 0-100 alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: (a.clamp(0.0, 100.0) * 100.0).round() / 100.0,
        }
    }

    /// An opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 100.0 }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Hue, saturation and lightness, each in 0-1
    pub fn hsl(&self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // achromatic
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    /// Build a color from HSL components in 0-1. Channels are truncated, not
    /// rounded.
    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Self {
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::new(channel(r * 255.0), channel(g * 255.0), channel(b * 255.0), a)
    }

    /// Tint by `light_color`, then raise lightness by `percentage` (capped
    /// at full lightness). A negative percentage darkens.
    pub fn lighten(&self, percentage: f64, light_color: Color) -> Self {
        let tinted = Self::new(
            channel(light_color.r as f64 / 255.0 * self.r as f64),
            channel(light_color.g as f64 / 255.0 * self.g as f64),
            channel(light_color.b as f64 / 255.0 * self.b as f64),
            self.a,
        );

        let (h, s, l) = tinted.hsl();
        Self::from_hsl(h, s, (l + percentage).min(1.0), self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// Truncating conversion, saturating at the channel bounds
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Color::rgb(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::from_hex("#a0b1c2"), Some(Color::rgb(0xa0, 0xb1, 0xc2)));
        assert_eq!(Color::from_hex("a0b1c2"), Some(Color::rgb(0xa0, 0xb1, 0xc2)));
        assert_eq!(Color::from_hex("#abc"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("+12345"), None);
    }

    #[test]
    fn test_alpha_rounded() {
        assert_eq!(Color::new(0, 0, 0, 50.456).a, 50.46);
        assert_eq!(Color::new(0, 0, 0, 250.0).a, 100.0);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Color::rgb(255, 0, 0).hsl(), (0.0, 1.0, 0.5));
        let (h, s, l) = Color::rgb(0, 255, 0).hsl();
        assert!((h - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!((s, l), (1.0, 0.5));
        let (h, _, _) = Color::rgb(0, 0, 255).hsl();
        assert!((h - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_hsl_achromatic() {
        let (h, s, l) = Color::rgb(255, 255, 255).hsl();
        assert_eq!((h, s, l), (0.0, 0.0, 1.0));
        assert_eq!(Color::BLACK.hsl(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_hsl() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5, 100.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(0.0, 0.0, 1.0, 100.0), Color::WHITE);
        assert_eq!(Color::from_hsl(0.0, 0.0, 0.0, 40.0), Color::new(0, 0, 0, 40.0));
    }

    #[test]
    fn test_lighten() {
        let base = Color::rgb(160, 60, 50);
        let (_, _, l) = base.hsl();
        let (_, _, lighter) = base.lighten(0.2, Color::WHITE).hsl();
        assert!(lighter > l);

        let saturated = base.lighten(2.0, Color::WHITE);
        assert!(saturated.r >= 254 && saturated.g >= 254 && saturated.b >= 254);
    }

    #[test]
    fn test_lighten_tints_by_light_color() {
        let lit = Color::rgb(200, 200, 200).lighten(0.0, Color::rgb(255, 0, 0));
        assert_eq!((lit.g, lit.b), (0, 0));
        assert!(lit.r > 0);
    }

    #[test]
    fn test_lighten_keeps_alpha() {
        let lit = Color::new(10, 20, 30, 55.0).lighten(0.1, Color::WHITE);
        assert_eq!(lit.a, 55.0);
    }
}
