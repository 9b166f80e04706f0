use serde::{Deserialize, Serialize};

/// A colour, expressed in RGB, CMYK or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string into an RGB colour
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Blend this colour towards white. `amount` of 0.0 leaves the colour
    /// unchanged, 1.0 yields white. Used for panel and callout backgrounds.
    pub fn tint(self, amount: f32) -> Colour {
        let amount = amount.clamp(0.0, 1.0);
        let lift = |v: f32| v + (1.0 - v) * amount;
        match self {
            Colour::RGB { r, g, b } => Colour::RGB {
                r: lift(r),
                g: lift(g),
                b: lift(b),
            },
            Colour::CMYK { c, m, y, k } => Colour::CMYK {
                c: c * (1.0 - amount),
                m: m * (1.0 - amount),
                y: y * (1.0 - amount),
                k: k * (1.0 - amount),
            },
            Colour::Grey { g } => Colour::Grey { g: lift(g) },
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants, including the default brand palette
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    /// Deep teal used for the brand name and rules
    pub const BRAND_PRIMARY: Colour = Colour::RGB {
        r: 0.1647,
        g: 0.4353,
        b: 0.4667,
    };
    /// Warm coral used for section headings and stat values
    pub const BRAND_ACCENT: Colour = Colour::RGB {
        r: 0.8510,
        g: 0.4235,
        b: 0.3098,
    };
    /// Body text
    pub const INK: Colour = Colour::RGB {
        r: 0.1765,
        g: 0.2039,
        b: 0.2118,
    };
    /// Captions, labels and footers
    pub const MUTED: Colour = Colour::RGB {
        r: 0.4980,
        g: 0.5490,
        b: 0.5529,
    };
    /// Writing-space rules and light dividers
    pub const RULE: Colour = Colour::RGB {
        r: 0.7843,
        g: 0.8157,
        b: 0.8235,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(
            Colour::from_hex("#ff0000"),
            Some(Colour::RGB {
                r: 1.0,
                g: 0.0,
                b: 0.0
            })
        );
        assert_eq!(Colour::from_hex("00ff00"), Colour::from_hex("#00FF00"));
        assert_eq!(Colour::from_hex("#fff"), None);
        assert_eq!(Colour::from_hex("#gg0000"), None);
    }

    #[test]
    fn full_tint_is_white() {
        assert_eq!(colours::BLACK.tint(1.0), colours::WHITE);
        assert_eq!(colours::BRAND_ACCENT.tint(0.0), colours::BRAND_ACCENT);
    }
}
