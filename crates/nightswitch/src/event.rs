//! Input event types for the toggle primitive.
//!
//! The control is headless, so hit-testing happens in the host shell: mouse
//! release events carry an `inside` flag instead of a position.

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The middle button.
    Middle,
}

/// A keyboard key. Only activation keys are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The space bar.
    Space,
    /// The enter/return key.
    Enter,
    /// The tab key.
    Tab,
    /// Any other key.
    Other(char),
}

/// A mouse button was pressed over the control.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// The pressed button.
    pub button: MouseButton,
}

/// A mouse button was released.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// The released button.
    pub button: MouseButton,
    /// Whether the pointer was still over the control at release.
    pub inside: bool,
}

/// A key was pressed while the control had focus.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// The pressed key.
    pub key: Key,
    /// Whether this press is an auto-repeat.
    pub is_repeat: bool,
}

/// A key was released while the control had focus.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    /// The released key.
    pub key: Key,
}
