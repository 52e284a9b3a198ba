//! Style token value types.
//!
//! Theme tokens carry their unit so derived values (the thumb travel
//! distance) can be expressed in the same unit the presets were declared in,
//! and only resolved to pixels when a renderer asks for it.

use std::fmt;
use std::ops::Neg;

/// A length token with an explicit unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Relative to the root font size.
    Rem(f32),
    /// Zero length.
    #[default]
    Zero,
}

impl Length {
    /// Create a pixel length.
    pub const fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Create a rem length.
    pub const fn rem(value: f32) -> Self {
        Self::Rem(value)
    }

    /// Resolve the length to pixels given the root font size.
    pub fn to_px(self, root_font_size: f32) -> f32 {
        match self {
            Self::Px(v) => v,
            Self::Rem(v) => v * root_font_size,
            Self::Zero => 0.0,
        }
    }

    /// Whether the resolved length is zero.
    pub fn is_zero(self) -> bool {
        match self {
            Self::Px(v) | Self::Rem(v) => v == 0.0,
            Self::Zero => true,
        }
    }

    /// Subtract another length declared in the same unit.
    ///
    /// Returns `None` when the units differ; mixed-unit arithmetic would need
    /// a resolution context and tokens never require it.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Px(a), Self::Px(b)) => Some(Self::Px(a - b)),
            (Self::Rem(a), Self::Rem(b)) => Some(Self::Rem(a - b)),
            (lhs, Self::Zero) => Some(lhs),
            (Self::Zero, rhs) => Some(-rhs),
            _ => None,
        }
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Px(v) => Self::Px(-v),
            Self::Rem(v) => Self::Rem(-v),
            Self::Zero => Self::Zero,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Rem(v) => write!(f, "{v}rem"),
            Self::Zero => write!(f, "0"),
        }
    }
}
