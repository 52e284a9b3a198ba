//! Theme definitions and style resolution for the nightswitch toggle control.
//!
//! This crate is the styling half of nightswitch. Given a [`Theme`] and a set
//! of variant props (size, color scheme, checked, layout direction), it
//! resolves an immutable per-part style record for the icon switch:
//!
//! - **container**: icon font size and the thumb travel distance
//! - **track**: the pill-shaped background row (width, height, tints)
//! - **thumb**: the sliding circle (diameter, horizontal translation)
//!
//! Themes are plain values passed explicitly by the caller; there is no
//! global theme context.
//!
//! # Example
//!
//! ```
//! use nightswitch_style::prelude::*;
//!
//! let theme = Theme::light();
//! let props = SwitchStyleProps {
//!     size: "md",
//!     color_scheme: "blue",
//!     checked: true,
//!     disabled: false,
//!     direction: LayoutDirection::Ltr,
//! };
//!
//! let style = resolve_switch_style(&theme, &props)?;
//! assert_eq!(style.track.width, Length::rem(3.875));
//! assert_eq!(style.thumb.translate_x, Length::rem(2.375));
//! # Ok::<(), nightswitch_style::Error>(())
//! ```

pub mod color;
pub mod resolve;
pub mod switch;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

pub use color::Color;
pub use resolve::{
    ContainerStyle, LayoutDirection, SwitchStyle, SwitchStyleProps, ThumbStyle, TrackStyle,
    resolve_switch_style,
};
pub use switch::{ICON_SWITCH, SizeTokens, SwitchPresets, SwitchSize};
pub use theme::{ColorMode, ColorPalette, ShadeFamily, Theme};
pub use types::Length;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::resolve::{
        ContainerStyle, LayoutDirection, SwitchStyle, SwitchStyleProps, ThumbStyle, TrackStyle,
        resolve_switch_style,
    };
    pub use crate::switch::{ICON_SWITCH, SizeTokens, SwitchPresets, SwitchSize};
    pub use crate::theme::{ColorMode, ColorPalette, ShadeFamily, Theme};
    pub use crate::types::Length;
    pub use crate::{Error, Result};
}
