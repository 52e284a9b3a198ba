//! Theme values: color palette, color mode, and the component registry.

mod mode;
mod palette;

pub use mode::ColorMode;
pub use palette::{ColorPalette, ShadeFamily};

use std::collections::HashMap;

use crate::switch::{ICON_SWITCH, SwitchPresets};

/// A complete theme: color mode, palette, and per-component presets.
///
/// Themes are plain values passed explicitly to style resolution. The
/// component registry is keyed by component name; the built-in constructors
/// pre-register the icon switch presets under [`ICON_SWITCH`].
#[derive(Debug, Clone)]
pub struct Theme {
    /// The active color mode.
    pub mode: ColorMode,
    /// The shade-family palette.
    pub palette: ColorPalette,
    /// Per-component style presets, keyed by component name.
    components: HashMap<String, SwitchPresets>,
}

impl Theme {
    fn with_mode(mode: ColorMode) -> Self {
        let mut components = HashMap::new();
        components.insert(ICON_SWITCH.to_string(), SwitchPresets::builtin());

        Self {
            mode,
            palette: ColorPalette::default(),
            components,
        }
    }

    /// Create a light theme.
    pub fn light() -> Self {
        Self::with_mode(ColorMode::Light)
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::with_mode(ColorMode::Dark)
    }

    /// Create a theme following the operating system color scheme.
    pub fn system() -> Self {
        Self::with_mode(ColorMode::system())
    }

    /// Register (or replace) the presets for a component.
    pub fn register(&mut self, component: impl Into<String>, presets: SwitchPresets) {
        self.components.insert(component.into(), presets);
    }

    /// Remove the presets for a component, returning them if present.
    pub fn unregister(&mut self, component: &str) -> Option<SwitchPresets> {
        self.components.remove(component)
    }

    /// Look up the presets registered for a component.
    pub fn component(&self, component: &str) -> Option<&SwitchPresets> {
        self.components.get(component)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let light = Theme::light();
        assert_eq!(light.mode, ColorMode::Light);

        let dark = Theme::dark();
        assert_eq!(dark.mode, ColorMode::Dark);
    }

    #[test]
    fn theme_registers_icon_switch() {
        let theme = Theme::light();
        assert!(theme.component(ICON_SWITCH).is_some());
        assert!(theme.component("Slider").is_none());
    }

    #[test]
    fn theme_register_replaces_entry() {
        let mut theme = Theme::light();
        theme.register("Dimmer", SwitchPresets::builtin());
        assert!(theme.component("Dimmer").is_some());
    }
}
