//! A themeable icon-switch toggle control.
//!
//! The switch renders as a pill-shaped track holding up to two small icons
//! (one per extreme) and a circular thumb that slides between them when
//! toggled. The control is headless: [`IconSwitch::render`] produces a
//! structured per-part description ([`SwitchVisual`]) that a host shell can
//! rasterize however it likes.
//!
//! Checked-state storage, change notification, and keyboard/mouse activation
//! live in [`ToggleCore`], the accessible toggle primitive the switch is
//! composed over. Styling comes from [`nightswitch_style`]: callers pass a
//! theme explicitly and the switch asks the style engine for per-part tokens
//! each render.
//!
//! # Example
//!
//! ```
//! use nightswitch::{Glyph, IconSwitch};
//! use nightswitch_style::Theme;
//!
//! let mut switch = IconSwitch::new()
//!     .with_left_icon(Glyph::sun())
//!     .with_right_icon(Glyph::moon())
//!     .with_size("md")
//!     .with_color_scheme("purple");
//!
//! switch.toggled().connect(|&checked| {
//!     println!("switched {}", if checked { "on" } else { "off" });
//! });
//!
//! let theme = Theme::light();
//! let visual = switch.render(&theme)?;
//! assert!(visual.thumb.translate_x.is_zero());
//!
//! switch.toggle();
//! let visual = switch.render(&theme)?;
//! assert!(!visual.thumb.translate_x.is_zero());
//! # Ok::<(), nightswitch_style::Error>(())
//! ```

pub mod event;
pub mod glyph;
pub mod signal;
pub mod switch;
pub mod toggle;

pub use event::{Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent, MouseReleaseEvent};
pub use glyph::Glyph;
pub use signal::{ConnectionId, Signal};
pub use switch::{
    IconEdge, IconSlot, IconSwitch, InputPart, LabelPart, RootPart, SwitchVisual, ThumbPart,
    TrackPart,
};
pub use toggle::{InteractionState, ToggleCore, WidgetId};
