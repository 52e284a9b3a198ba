//! The icon switch control.
//!
//! [`IconSwitch`] composes the toggle primitive with resolved style tokens
//! into a four-part visual description: a root label wrapper, the focusable
//! input node carrying the real checked state, a track row showing up to two
//! icons, and a thumb translated horizontally by the resolved travel when
//! checked.

use std::fmt;

use tracing::trace;

use nightswitch_style::{LayoutDirection, Length, Result, SwitchStyleProps, Theme, resolve_switch_style};

use crate::event::{KeyPressEvent, KeyReleaseEvent, MousePressEvent, MouseReleaseEvent};
use crate::glyph::Glyph;
use crate::signal::Signal;
use crate::toggle::{InteractionState, ToggleCore, WidgetId};

/// Which extreme of the track an icon sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconEdge {
    /// The start of the track (before the thumb's resting position).
    Leading,
    /// The end of the track.
    Trailing,
}

/// One icon placed in the track row.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSlot {
    /// The glyph to show.
    pub glyph: Glyph,
    /// Which extreme it sits at.
    pub edge: IconEdge,
    /// Margin between the icon and the adjacent content.
    pub spacing: Length,
    /// Font size scaling the glyph, from the container tokens.
    pub font_size: Length,
}

/// The root label wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootPart {
    /// Layout direction the parts are composed in.
    pub direction: LayoutDirection,
}

/// The focusable input node. This is the real state carrier; everything else
/// is decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPart {
    /// Identity of the node, for focus routing.
    pub id: WidgetId,
    /// Current checked state.
    pub checked: bool,
    /// Whether interaction is suppressed.
    pub disabled: bool,
    /// Whether the node has keyboard focus.
    pub focused: bool,
}

/// The pill-shaped track row.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPart {
    /// Track width token.
    pub width: Length,
    /// Track height token.
    pub height: Length,
    /// Inner padding.
    pub padding: Length,
    /// Corner radius.
    pub radius: Length,
    /// Background for the current state and color mode.
    pub background: nightswitch_style::Color,
    /// Opacity, dimmed when disabled.
    pub opacity: f32,
    /// Whether the pointer is over the control. Cosmetic.
    pub hovered: bool,
    /// Icons in the row; empty when neither icon is configured.
    pub icons: Vec<IconSlot>,
}

/// The sliding thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPart {
    /// Diameter; equals the track height.
    pub diameter: Length,
    /// Offset from the track edge.
    pub inset: Length,
    /// Thumb fill.
    pub background: nightswitch_style::Color,
    /// Horizontal translation: zero unchecked, the signed travel checked.
    pub translate_x: Length,
}

/// Optional label text after the switch.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPart {
    /// The label text.
    pub text: String,
    /// Margin between the switch and the label.
    pub spacing: Length,
}

/// One render of the switch: the composed visual parts.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchVisual {
    /// The root label wrapper.
    pub root: RootPart,
    /// The focusable input node.
    pub input: InputPart,
    /// The track row.
    pub track: TrackPart,
    /// The thumb.
    pub thumb: ThumbPart,
    /// The optional label.
    pub label: Option<LabelPart>,
}

/// Default margin between an icon and adjacent track content.
const DEFAULT_ICON_SPACING: Length = Length::rem(0.4);
/// Default margin between the switch and its label text.
const DEFAULT_LABEL_SPACING: Length = Length::rem(0.5);

/// A binary toggle rendering a pill track with two icon extremes and a
/// sliding thumb.
///
/// Checked-state storage and interaction semantics are delegated to the
/// embedded [`ToggleCore`]; the switch holds no boolean state of its own.
/// [`IconSwitch::render`] is a pure function of the configuration, the
/// interaction state, and the theme passed by the caller.
pub struct IconSwitch {
    core: ToggleCore,
    left_icon: Option<Glyph>,
    right_icon: Option<Glyph>,
    icon_spacing: Length,
    label_spacing: Length,
    label: Option<String>,
    size: String,
    color_scheme: String,
    direction: LayoutDirection,
    focus_report: Option<Box<dyn Fn(WidgetId) + Send + Sync>>,
}

impl IconSwitch {
    /// Create a switch with default configuration (size `sm`, scheme `gray`,
    /// no icons, no label).
    pub fn new() -> Self {
        Self {
            core: ToggleCore::new(),
            left_icon: None,
            right_icon: None,
            icon_spacing: DEFAULT_ICON_SPACING,
            label_spacing: DEFAULT_LABEL_SPACING,
            label: None,
            size: "sm".to_string(),
            color_scheme: "gray".to_string(),
            direction: LayoutDirection::Ltr,
            focus_report: None,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the icon shown before the thumb's resting position.
    pub fn set_left_icon(&mut self, icon: Option<Glyph>) {
        self.left_icon = icon;
    }

    /// Set the left icon using builder pattern.
    pub fn with_left_icon(mut self, icon: Glyph) -> Self {
        self.left_icon = Some(icon);
        self
    }

    /// Set the icon shown at the far end of the track.
    pub fn set_right_icon(&mut self, icon: Option<Glyph>) {
        self.right_icon = icon;
    }

    /// Set the right icon using builder pattern.
    pub fn with_right_icon(mut self, icon: Glyph) -> Self {
        self.right_icon = Some(icon);
        self
    }

    /// Set the margin between icons and adjacent track content.
    pub fn set_icon_spacing(&mut self, spacing: Length) {
        self.icon_spacing = spacing;
    }

    /// Set icon spacing using builder pattern.
    pub fn with_icon_spacing(mut self, spacing: Length) -> Self {
        self.icon_spacing = spacing;
        self
    }

    /// Set the margin between the switch and its label.
    pub fn set_label_spacing(&mut self, spacing: Length) {
        self.label_spacing = spacing;
    }

    /// Set label spacing using builder pattern.
    pub fn with_label_spacing(mut self, spacing: Length) -> Self {
        self.label_spacing = spacing;
        self
    }

    /// Set the label text.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the size variant name. Unknown names resolve as the theme default.
    pub fn set_size(&mut self, size: impl Into<String>) {
        self.size = size.into();
    }

    /// Set the size using builder pattern.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the color scheme name. Unknown names resolve as the theme default.
    pub fn set_color_scheme(&mut self, scheme: impl Into<String>) {
        self.color_scheme = scheme.into();
    }

    /// Set the color scheme using builder pattern.
    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = scheme.into();
        self
    }

    /// Set the layout direction.
    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Set the direction using builder pattern.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.core.set_checked(checked);
    }

    /// Set checked using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.core.set_checked(checked);
        self
    }

    /// Enable or disable interaction.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.core.set_disabled(disabled);
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.core.set_disabled(disabled);
        self
    }

    /// Register a callback that receives the focusable input node's identity
    /// on every render, so external code can focus or inspect it.
    pub fn with_focus_report<F>(mut self, report: F) -> Self
    where
        F: Fn(WidgetId) + Send + Sync + 'static,
    {
        self.focus_report = Some(Box::new(report));
        self
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Current checked state.
    pub fn is_checked(&self) -> bool {
        self.core.is_checked()
    }

    /// Whether interaction is suppressed.
    pub fn is_disabled(&self) -> bool {
        self.core.is_disabled()
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.core.toggle();
    }

    /// Activate the control as a user interaction would.
    pub fn click(&mut self) {
        self.core.click();
    }

    /// Snapshot the interaction state.
    pub fn state(&self) -> InteractionState {
        self.core.state()
    }

    /// Identity of the focusable input node.
    pub fn input_id(&self) -> WidgetId {
        self.core.id()
    }

    /// The embedded toggle primitive.
    pub fn core(&self) -> &ToggleCore {
        &self.core
    }

    /// The embedded toggle primitive, mutably.
    pub fn core_mut(&mut self) -> &mut ToggleCore {
        &mut self.core
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Signal emitted whenever the checked state changes.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.core.toggled
    }

    /// Signal emitted on user activation.
    pub fn clicked(&self) -> &Signal<bool> {
        &self.core.clicked
    }

    /// Signal emitted when the control is pressed down.
    pub fn pressed(&self) -> &Signal<()> {
        &self.core.pressed
    }

    /// Signal emitted when the press is released.
    pub fn released(&self) -> &Signal<()> {
        &self.core.released
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Route a mouse press to the toggle primitive.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        self.core.handle_mouse_press(event)
    }

    /// Route a mouse release to the toggle primitive.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        self.core.handle_mouse_release(event)
    }

    /// Route a key press to the toggle primitive.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        self.core.handle_key_press(event)
    }

    /// Route a key release to the toggle primitive.
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        self.core.handle_key_release(event)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Compose the visual parts for the current state under the given theme.
    ///
    /// Pure and idempotent: no internal state changes besides invoking the
    /// focus-report callback with the input node's identity.
    pub fn render(&self, theme: &Theme) -> Result<SwitchVisual> {
        let state = self.core.state();

        let style = resolve_switch_style(
            theme,
            &SwitchStyleProps {
                size: &self.size,
                color_scheme: &self.color_scheme,
                checked: state.is_checked,
                disabled: self.core.is_disabled(),
                direction: self.direction,
            },
        )?;

        if let Some(report) = &self.focus_report {
            report(self.core.id());
        }

        let mut icons = Vec::with_capacity(2);
        if let Some(glyph) = &self.left_icon {
            icons.push(IconSlot {
                glyph: glyph.clone(),
                edge: IconEdge::Leading,
                spacing: self.icon_spacing,
                font_size: style.container.font_size,
            });
        }
        if let Some(glyph) = &self.right_icon {
            icons.push(IconSlot {
                glyph: glyph.clone(),
                edge: IconEdge::Trailing,
                spacing: self.icon_spacing,
                font_size: style.container.font_size,
            });
        }

        let visual = SwitchVisual {
            root: RootPart {
                direction: self.direction,
            },
            input: InputPart {
                id: self.core.id(),
                checked: state.is_checked,
                disabled: self.core.is_disabled(),
                focused: state.is_focused,
            },
            track: TrackPart {
                width: style.track.width,
                height: style.track.height,
                padding: style.track.padding,
                radius: style.track.radius,
                background: style.track.background,
                opacity: style.track.opacity,
                hovered: state.is_hovered,
                icons,
            },
            thumb: ThumbPart {
                diameter: style.thumb.diameter,
                inset: style.thumb.inset,
                background: style.thumb.background,
                translate_x: style.thumb.translate_x,
            },
            label: self.label.as_ref().map(|text| LabelPart {
                text: text.clone(),
                spacing: self.label_spacing,
            }),
        };

        trace!(
            id = %visual.input.id,
            checked = visual.input.checked,
            translate_x = %visual.thumb.translate_x,
            "composed switch visual"
        );

        Ok(visual)
    }
}

impl Default for IconSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IconSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconSwitch")
            .field("core", &self.core)
            .field("left_icon", &self.left_icon)
            .field("right_icon", &self.right_icon)
            .field("label", &self.label)
            .field("size", &self.size)
            .field("color_scheme", &self.color_scheme)
            .field("direction", &self.direction)
            .field("focus_report", &self.focus_report.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(IconSwitch: Send, Sync);
