//! Color palette: shade families for the supported color schemes.

use crate::color::Color;

/// The shade stops every family declares, lightest to darkest.
const STOPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A ladder of ten shades (stops 50–900) of one hue.
#[derive(Debug, Clone)]
pub struct ShadeFamily {
    shades: [Color; 10],
}

impl ShadeFamily {
    fn from_hex(hex: [&str; 10]) -> Self {
        Self {
            shades: hex.map(|h| Color::from_hex(h).unwrap()),
        }
    }

    fn alpha_ladder(base: Color, alphas: [f32; 10]) -> Self {
        Self {
            shades: alphas.map(|a| base.with_alpha(a)),
        }
    }

    /// Look up a shade by stop (50, 100, 200, … 900).
    pub fn shade(&self, stop: u16) -> Option<Color> {
        STOPS
            .iter()
            .position(|&s| s == stop)
            .map(|i| self.shades[i])
    }
}

/// A palette of named shade families.
///
/// The ten hue families are the valid color-scheme names for the switch; the
/// translucent `white_alpha` / `black_alpha` ladders are neutral overlays
/// used for inactive track tints.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    /// Neutral gray family (the default color scheme).
    pub gray: ShadeFamily,
    /// Red family.
    pub red: ShadeFamily,
    /// Orange family.
    pub orange: ShadeFamily,
    /// Yellow family.
    pub yellow: ShadeFamily,
    /// Green family.
    pub green: ShadeFamily,
    /// Teal family.
    pub teal: ShadeFamily,
    /// Blue family.
    pub blue: ShadeFamily,
    /// Cyan family.
    pub cyan: ShadeFamily,
    /// Purple family.
    pub purple: ShadeFamily,
    /// Pink family.
    pub pink: ShadeFamily,
    /// Translucent white overlay ladder.
    pub white_alpha: ShadeFamily,
    /// Translucent black overlay ladder.
    pub black_alpha: ShadeFamily,
}

const OVERLAY_ALPHAS: [f32; 10] = [0.04, 0.06, 0.08, 0.16, 0.24, 0.36, 0.48, 0.64, 0.80, 0.92];

impl ColorPalette {
    /// Create the built-in palette.
    pub fn builtin() -> Self {
        Self {
            gray: ShadeFamily::from_hex([
                "#F7FAFC", "#EDF2F7", "#E2E8F0", "#CBD5E0", "#A0AEC0", "#718096", "#4A5568",
                "#2D3748", "#1A202C", "#171923",
            ]),
            red: ShadeFamily::from_hex([
                "#FFF5F5", "#FED7D7", "#FEB2B2", "#FC8181", "#F56565", "#E53E3E", "#C53030",
                "#9B2C2C", "#822727", "#63171B",
            ]),
            orange: ShadeFamily::from_hex([
                "#FFFAF0", "#FEEBC8", "#FBD38D", "#F6AD55", "#ED8936", "#DD6B20", "#C05621",
                "#9C4221", "#7B341E", "#652B19",
            ]),
            yellow: ShadeFamily::from_hex([
                "#FFFFF0", "#FEFCBF", "#FAF089", "#F6E05E", "#ECC94B", "#D69E2E", "#B7791F",
                "#975A16", "#744210", "#5F370E",
            ]),
            green: ShadeFamily::from_hex([
                "#F0FFF4", "#C6F6D5", "#9AE6B4", "#68D391", "#48BB78", "#38A169", "#2F855A",
                "#276749", "#22543D", "#1C4532",
            ]),
            teal: ShadeFamily::from_hex([
                "#E6FFFA", "#B2F5EA", "#81E6D9", "#4FD1C5", "#38B2AC", "#319795", "#2C7A7B",
                "#285E61", "#234E52", "#1D4044",
            ]),
            blue: ShadeFamily::from_hex([
                "#EBF8FF", "#BEE3F8", "#90CDF4", "#63B3ED", "#4299E1", "#3182CE", "#2B6CB0",
                "#2C5282", "#2A4365", "#1A365D",
            ]),
            cyan: ShadeFamily::from_hex([
                "#EDFDFD", "#C4F1F9", "#9DECF9", "#76E4F7", "#0BC5EA", "#00B5D8", "#00A3C4",
                "#0987A0", "#086F83", "#065666",
            ]),
            purple: ShadeFamily::from_hex([
                "#FAF5FF", "#E9D8FD", "#D6BCFA", "#B794F4", "#9F7AEA", "#805AD5", "#6B46C1",
                "#553C9A", "#44337A", "#322659",
            ]),
            pink: ShadeFamily::from_hex([
                "#FFF5F7", "#FED7E2", "#FBB6CE", "#F687B3", "#ED64A6", "#D53F8C", "#B83280",
                "#97266D", "#702459", "#521B41",
            ]),
            white_alpha: ShadeFamily::alpha_ladder(Color::WHITE, OVERLAY_ALPHAS),
            black_alpha: ShadeFamily::alpha_ladder(Color::BLACK, OVERLAY_ALPHAS),
        }
    }

    /// Look up a hue family by color-scheme name.
    ///
    /// The overlay ladders are not addressable as schemes.
    pub fn family(&self, name: &str) -> Option<&ShadeFamily> {
        match name {
            "gray" => Some(&self.gray),
            "red" => Some(&self.red),
            "orange" => Some(&self.orange),
            "yellow" => Some(&self.yellow),
            "green" => Some(&self.green),
            "teal" => Some(&self.teal),
            "blue" => Some(&self.blue),
            "cyan" => Some(&self.cyan),
            "purple" => Some(&self.purple),
            "pink" => Some(&self.pink),
            _ => None,
        }
    }

    /// Names of all hue families, in declaration order.
    pub fn scheme_names() -> [&'static str; 10] {
        [
            "gray", "red", "orange", "yellow", "green", "teal", "blue", "cyan", "purple", "pink",
        ]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::builtin()
    }
}
