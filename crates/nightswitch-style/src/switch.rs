//! Icon switch variant presets: sizes, defaults, registry entry.

use crate::types::Length;

/// Component name the icon switch presets are registered under.
pub const ICON_SWITCH: &str = "IconSwitch";

/// The named size variants of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchSize {
    /// Small: 2.875rem × 1.25rem track.
    #[default]
    Sm,
    /// Medium: 3.875rem × 1.5rem track.
    Md,
    /// Large: 4.875rem × 1.75rem track.
    Lg,
}

impl SwitchSize {
    /// Parse a size name, returning `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            _ => None,
        }
    }

    /// The variant name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Sm => 0,
            Self::Md => 1,
            Self::Lg => 2,
        }
    }
}

/// The tokens a size variant declares: track geometry and icon font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTokens {
    /// Track width.
    pub track_width: Length,
    /// Track height. The thumb diameter equals this.
    pub track_height: Length,
    /// Font size used to scale the track icons.
    pub font_size: Length,
}

/// The preset block registered for the switch in a theme.
#[derive(Debug, Clone)]
pub struct SwitchPresets {
    sizes: [SizeTokens; 3],
    /// Size used when the caller names an unknown variant.
    pub default_size: SwitchSize,
    /// Color scheme used when the caller names an unknown one.
    pub default_scheme: String,
}

impl SwitchPresets {
    /// The built-in presets.
    pub fn builtin() -> Self {
        Self {
            sizes: [
                SizeTokens {
                    track_width: Length::rem(2.875),
                    track_height: Length::rem(1.25),
                    font_size: Length::rem(1.0),
                },
                SizeTokens {
                    track_width: Length::rem(3.875),
                    track_height: Length::rem(1.5),
                    font_size: Length::rem(1.25),
                },
                SizeTokens {
                    track_width: Length::rem(4.875),
                    track_height: Length::rem(1.75),
                    font_size: Length::rem(1.5),
                },
            ],
            default_size: SwitchSize::Sm,
            default_scheme: "gray".to_string(),
        }
    }

    /// Tokens for a size variant.
    pub fn size_tokens(&self, size: SwitchSize) -> &SizeTokens {
        &self.sizes[size.index()]
    }

    /// Resolve a size name, falling back to the default for unknown names.
    pub fn size_from_name(&self, name: &str) -> SwitchSize {
        SwitchSize::parse(name).unwrap_or_else(|| {
            tracing::debug!(size = name, fallback = self.default_size.name(), "unknown switch size");
            self.default_size
        })
    }
}

impl Default for SwitchPresets {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_parse() {
        assert_eq!(SwitchSize::parse("md"), Some(SwitchSize::Md));
        assert_eq!(SwitchSize::parse("xl"), None);
    }

    #[test]
    fn unknown_size_falls_back_to_default() {
        let presets = SwitchPresets::builtin();
        assert_eq!(presets.size_from_name("xl"), SwitchSize::Sm);
        assert_eq!(presets.size_from_name("lg"), SwitchSize::Lg);
    }

    #[test]
    fn builtin_size_tokens() {
        let presets = SwitchPresets::builtin();

        let md = presets.size_tokens(SwitchSize::Md);
        assert_eq!(md.track_width, Length::rem(3.875));
        assert_eq!(md.track_height, Length::rem(1.5));

        let lg = presets.size_tokens(SwitchSize::Lg);
        assert_eq!(lg.track_width, Length::rem(4.875));
        assert_eq!(lg.track_height, Length::rem(1.75));
    }
}
