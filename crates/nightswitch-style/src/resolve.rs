//! Style resolution for the icon switch.
//!
//! [`resolve_switch_style`] turns a theme plus variant props into an
//! immutable per-part style record. Resolution is pure: the same theme and
//! props always produce the same record, so callers may re-run it every
//! render.

use tracing::{debug, trace};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::switch::ICON_SWITCH;
use crate::theme::Theme;
use crate::types::Length;

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left. The thumb travel offset is negated so the thumb slides
    /// toward the visually opposite edge.
    Rtl,
}

/// Variant props the caller supplies per resolution.
#[derive(Debug, Clone, Copy)]
pub struct SwitchStyleProps<'a> {
    /// Size variant name. Unknown names fall back to the preset default.
    pub size: &'a str,
    /// Color scheme name. Unknown names fall back to the preset default.
    pub color_scheme: &'a str,
    /// Current checked state.
    pub checked: bool,
    /// Whether interaction is suppressed.
    pub disabled: bool,
    /// Layout direction.
    pub direction: LayoutDirection,
}

/// Resolved container tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    /// Font size for scaling the track icons.
    pub font_size: Length,
    /// Signed thumb travel distance for the checked state:
    /// `track width − track height`, negated in RTL.
    pub thumb_travel: Length,
}

/// Resolved track tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    /// Track width.
    pub width: Length,
    /// Track height.
    pub height: Length,
    /// Inner padding around the thumb.
    pub padding: Length,
    /// Corner radius (pill shape).
    pub radius: Length,
    /// Background tint for the checked state: the scheme's 600 shade.
    pub tint_active: Color,
    /// Neutral translucent tint for the unchecked state.
    pub tint_inactive: Color,
    /// Background for the current checked state and color mode.
    pub background: Color,
    /// Opacity, dimmed to 0.4 when disabled.
    pub opacity: f32,
}

/// Resolved thumb tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbStyle {
    /// Thumb diameter; always equals the track height.
    pub diameter: Length,
    /// Offset from the track's leading/top edge.
    pub inset: Length,
    /// Thumb fill.
    pub background: Color,
    /// Horizontal translation: zero unchecked, the signed travel when checked.
    pub translate_x: Length,
}

/// The full per-part style record for one render of the switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchStyle {
    /// Container tokens.
    pub container: ContainerStyle,
    /// Track tokens.
    pub track: TrackStyle,
    /// Thumb tokens.
    pub thumb: ThumbStyle,
}

/// Pill corner radius.
const RADIUS_FULL: Length = Length::px(9999.0);
/// Track padding and thumb inset.
const TRACK_PADDING: Length = Length::px(2.0);
/// Opacity applied to the whole control when disabled.
const DISABLED_OPACITY: f32 = 0.4;

/// Resolve the per-part style record for the icon switch.
///
/// Unknown size and color-scheme names fall back to the registered defaults.
/// A theme without an [`ICON_SWITCH`] entry is an integration error and
/// yields [`Error::UnknownComponent`].
pub fn resolve_switch_style(theme: &Theme, props: &SwitchStyleProps<'_>) -> Result<SwitchStyle> {
    let presets = theme
        .component(ICON_SWITCH)
        .ok_or_else(|| Error::unknown_component(ICON_SWITCH))?;

    let size = presets.size_from_name(props.size);
    let tokens = presets.size_tokens(size);

    let family = match theme.palette.family(props.color_scheme) {
        Some(family) => family,
        None => {
            debug!(
                scheme = props.color_scheme,
                fallback = presets.default_scheme.as_str(),
                "unknown color scheme"
            );
            theme.palette.family(&presets.default_scheme).ok_or_else(|| {
                Error::invalid_value(
                    "colorScheme",
                    format!("default scheme '{}' missing from palette", presets.default_scheme),
                )
            })?
        }
    };

    let tint_active = family.shade(600).ok_or_else(|| {
        Error::invalid_value("colorScheme", "family does not declare a 600 shade")
    })?;
    let tint_inactive = theme.palette.white_alpha.shade(400).ok_or_else(|| {
        Error::invalid_value("colorScheme", "overlay ladder does not declare a 400 shade")
    })?;

    // Travel is declared-unit arithmetic: width − height, sign flipped in RTL.
    let travel = tokens
        .track_width
        .checked_sub(tokens.track_height)
        .ok_or_else(|| {
            Error::invalid_value("trackWidth", "width and height use different units")
        })?;
    let travel = match props.direction {
        LayoutDirection::Ltr => travel,
        LayoutDirection::Rtl => -travel,
    };

    let background = if props.checked {
        tint_active
    } else {
        theme.mode.pick(tint_active, tint_inactive)
    };

    let style = SwitchStyle {
        container: ContainerStyle {
            font_size: tokens.font_size,
            thumb_travel: travel,
        },
        track: TrackStyle {
            width: tokens.track_width,
            height: tokens.track_height,
            padding: TRACK_PADDING,
            radius: RADIUS_FULL,
            tint_active,
            tint_inactive,
            background,
            opacity: if props.disabled { DISABLED_OPACITY } else { 1.0 },
        },
        thumb: ThumbStyle {
            diameter: tokens.track_height,
            inset: TRACK_PADDING,
            background: Color::WHITE,
            translate_x: if props.checked { travel } else { Length::Zero },
        },
    };

    trace!(
        size = size.name(),
        checked = props.checked,
        translate_x = %style.thumb.translate_x,
        "resolved switch style"
    );

    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorMode, ColorPalette};

    fn props(size: &'static str, scheme: &'static str, checked: bool) -> SwitchStyleProps<'static> {
        SwitchStyleProps {
            size,
            color_scheme: scheme,
            checked,
            disabled: false,
            direction: LayoutDirection::Ltr,
        }
    }

    #[test]
    fn md_blue_scenario() {
        let theme = Theme::light();

        let unchecked = resolve_switch_style(&theme, &props("md", "blue", false)).unwrap();
        assert_eq!(unchecked.track.width, Length::rem(3.875));
        assert_eq!(unchecked.track.height, Length::rem(1.5));
        assert_eq!(unchecked.thumb.translate_x, Length::Zero);

        let checked = resolve_switch_style(&theme, &props("md", "blue", true)).unwrap();
        assert_eq!(checked.thumb.translate_x, Length::rem(2.375));
        assert_eq!(checked.container.thumb_travel, Length::rem(2.375));
    }

    #[test]
    fn thumb_is_inscribed_in_track() {
        let theme = Theme::light();
        for size in ["sm", "md", "lg"] {
            let style = resolve_switch_style(&theme, &props(size, "gray", false)).unwrap();
            assert_eq!(style.thumb.diameter, style.track.height);
        }
    }

    #[test]
    fn tints_differ_for_every_scheme() {
        let theme = Theme::light();
        for scheme in ColorPalette::scheme_names() {
            let style = resolve_switch_style(&theme, &props("sm", scheme, false)).unwrap();
            assert_ne!(style.track.tint_active, style.track.tint_inactive, "{scheme}");
        }
    }

    #[test]
    fn rtl_negates_travel() {
        let theme = Theme::light();

        let mut rtl = props("md", "blue", true);
        rtl.direction = LayoutDirection::Rtl;

        let ltr_style = resolve_switch_style(&theme, &props("md", "blue", true)).unwrap();
        let rtl_style = resolve_switch_style(&theme, &rtl).unwrap();
        assert_eq!(rtl_style.thumb.translate_x, -ltr_style.thumb.translate_x);
        assert_eq!(rtl_style.thumb.translate_x, Length::rem(-2.375));
    }

    #[test]
    fn unknown_size_behaves_as_sm() {
        let theme = Theme::light();
        let fallback = resolve_switch_style(&theme, &props("enormous", "gray", true)).unwrap();
        let sm = resolve_switch_style(&theme, &props("sm", "gray", true)).unwrap();
        assert_eq!(fallback, sm);
    }

    #[test]
    fn unknown_scheme_behaves_as_gray() {
        let theme = Theme::light();
        let fallback = resolve_switch_style(&theme, &props("sm", "chartreuse", false)).unwrap();
        let gray = resolve_switch_style(&theme, &props("sm", "gray", false)).unwrap();
        assert_eq!(fallback, gray);
    }

    #[test]
    fn checked_track_uses_active_tint() {
        for theme in [Theme::light(), Theme::dark()] {
            let style = resolve_switch_style(&theme, &props("sm", "purple", true)).unwrap();
            assert_eq!(style.track.background, style.track.tint_active);
        }
    }

    #[test]
    fn unchecked_track_is_mode_aware() {
        let light = Theme::light();
        let style = resolve_switch_style(&light, &props("sm", "purple", false)).unwrap();
        assert_eq!(style.track.background, style.track.tint_active);

        let dark = Theme::dark();
        let style = resolve_switch_style(&dark, &props("sm", "purple", false)).unwrap();
        assert_eq!(style.track.background, style.track.tint_inactive);
        assert_eq!(dark.mode, ColorMode::Dark);
    }

    #[test]
    fn disabled_dims_opacity() {
        let theme = Theme::light();
        let mut disabled = props("sm", "gray", false);
        disabled.disabled = true;

        let style = resolve_switch_style(&theme, &disabled).unwrap();
        assert_eq!(style.track.opacity, 0.4);
    }

    #[test]
    fn missing_registry_entry_is_an_error() {
        let mut theme = Theme::light();
        theme.unregister(ICON_SWITCH);

        let err = resolve_switch_style(&theme, &props("sm", "gray", false)).unwrap_err();
        assert!(matches!(err, Error::UnknownComponent { .. }));
    }
}
