//! Light/dark color mode.

/// The active color mode of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorMode {
    /// Detect the operating system color scheme.
    ///
    /// Falls back to [`ColorMode::Light`] when the platform cannot report a
    /// preference.
    pub fn system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::Dark,
            dark_light::Mode::Light => Self::Light,
            dark_light::Mode::Default => {
                tracing::trace!("system color scheme unknown, assuming light");
                Self::Light
            }
        }
    }

    /// Whether the mode is dark.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Select between two values based on the mode.
    ///
    /// This is the mode-aware token selection rule: `pick(a, b)` yields `a`
    /// in light mode and `b` in dark mode.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_pick() {
        assert_eq!(ColorMode::Light.pick(1, 2), 1);
        assert_eq!(ColorMode::Dark.pick(1, 2), 2);
    }

    #[test]
    fn mode_is_dark() {
        assert!(ColorMode::Dark.is_dark());
        assert!(!ColorMode::Light.is_dark());
    }
}
