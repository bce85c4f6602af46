/// An RGBA colour with 8 bits per channel. An alpha of 0 is fully
/// transparent, 255 is fully opaque.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour, r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an explicit alpha channel
    pub fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque colour, r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::new_rgb_bytes(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    /// Create a new opaque grey, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Colour::new_rgba_bytes(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// The same colour with a different opacity, from 0.0 to 1.0
    pub fn with_opacity(self, opacity: f32) -> Colour {
        Colour {
            a: unit_to_byte(opacity),
            ..self
        }
    }

    /// Relative luminance of the colour channels (alpha is ignored), from 0.0 to 255.0
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32
    }

    /// Black or white, whichever reads better on top of this colour
    pub fn contrasting(&self) -> Colour {
        if self.luminance() < 128.0 {
            colours::WHITE
        } else {
            colours::BLACK
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba_bytes(c.0, c.1, c.2, c.3)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::new_rgba_bytes(r, g, b, a)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Colour::new_rgba_bytes(r, g, b, a)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    /// White with zero alpha, the default background
    pub const TRANSPARENT: Colour = Colour {
        r: 255,
        g: 255,
        b: 255,
        a: 0,
    };
    pub const BLACK: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Colour = Colour {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const RED: Colour = Colour {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const GREEN: Colour = Colour {
        r: 0,
        g: 255,
        b: 0,
        a: 255,
    };
    pub const BLUE: Colour = Colour {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };
    pub const ANTIQUE_WHITE: Colour = Colour {
        r: 250,
        g: 235,
        b: 215,
        a: 255,
    };
}
