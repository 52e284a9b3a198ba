//! The accessible toggle primitive.
//!
//! [`ToggleCore`] owns the real checked state and the interaction semantics
//! every toggle-like control shares: click detection (press then release over
//! the control), keyboard activation (Space/Enter), disabled gating, and the
//! cosmetic hovered/focused flags. Visual controls embed it and read an
//! [`InteractionState`] snapshot each render.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::event::{Key, KeyPressEvent, KeyReleaseEvent, MouseButton, MousePressEvent, MouseReleaseEvent};
use crate::signal::Signal;

/// Process-unique identity of a focusable input node.
///
/// Host shells use this to route focus and keyboard events back to the
/// control that owns the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// A read-only snapshot of the primitive's interaction state.
///
/// Derived fresh per query; controls read it, they never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    /// Current checked state.
    pub is_checked: bool,
    /// Whether the pointer is over the control. Purely cosmetic.
    pub is_hovered: bool,
    /// Whether the input node has keyboard focus. Purely cosmetic.
    pub is_focused: bool,
}

/// The toggle primitive: checked state plus interaction handling.
///
/// # Signals
///
/// - `toggled(bool)`: emitted whenever the checked state changes
/// - `clicked(bool)`: emitted when the control is activated by the user
/// - `pressed(())`: emitted when the control is pressed down
/// - `released(())`: emitted when the press is released
pub struct ToggleCore {
    id: WidgetId,
    checked: bool,
    disabled: bool,
    /// Press in progress (mouse or activation key held).
    down: bool,
    hovered: bool,
    focused: bool,

    /// Signal emitted when the checked state changes.
    pub toggled: Signal<bool>,
    /// Signal emitted on user activation, carrying the new checked state.
    pub clicked: Signal<bool>,
    /// Signal emitted when the control is pressed down.
    pub pressed: Signal<()>,
    /// Signal emitted when the press is released.
    pub released: Signal<()>,
}

impl ToggleCore {
    /// Create an unchecked, enabled toggle.
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            checked: false,
            disabled: false,
            down: false,
            hovered: false,
            focused: false,
            toggled: Signal::new(),
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    /// Identity of the focusable input node.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    // =========================================================================
    // Checked State
    // =========================================================================

    /// Current checked state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state, emitting `toggled` on change.
    ///
    /// Programmatic changes are allowed while disabled.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.toggled.emit(checked);
        }
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Activate the control as a user interaction would.
    ///
    /// Toggles the state and emits `clicked` with the new value. Does nothing
    /// while disabled.
    pub fn click(&mut self) {
        if self.disabled {
            return;
        }

        self.toggle();
        self.clicked.emit(self.checked);
    }

    // =========================================================================
    // Disabled / Cosmetic Flags
    // =========================================================================

    /// Whether interaction is suppressed.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable interaction. Disabling cancels any press in
    /// progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            if disabled {
                self.down = false;
            }
        }
    }

    /// Whether the pointer is over the control.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Update the hover flag (pointer enter/leave).
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !hovered {
            self.down = false;
        }
    }

    /// Whether the input node has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Update the focus flag (focus in/out).
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.down = false;
        }
    }

    /// Snapshot the interaction state.
    pub fn state(&self) -> InteractionState {
        InteractionState {
            is_checked: self.checked,
            is_hovered: self.hovered,
            is_focused: self.focused,
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a mouse press. Returns `true` if the event was consumed.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left || self.disabled {
            return false;
        }

        self.down = true;
        self.pressed.emit(());
        true
    }

    /// Handle a mouse release. A click fires only when the press began on the
    /// control and the pointer is still inside. Returns `true` on click.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left || self.disabled {
            return false;
        }

        let was_down = self.down;
        self.down = false;
        self.released.emit(());

        if event.inside && was_down {
            self.click();
            return true;
        }

        false
    }

    /// Handle a key press. Space and Enter arm the control; auto-repeat
    /// presses do not re-emit `pressed`.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if self.disabled {
            return false;
        }

        match event.key {
            Key::Space | Key::Enter => {
                if !event.is_repeat {
                    self.down = true;
                    self.pressed.emit(());
                }
                true
            }
            _ => false,
        }
    }

    /// Handle a key release. Space and Enter complete the activation.
    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if self.disabled {
            return false;
        }

        match event.key {
            Key::Space | Key::Enter => {
                self.down = false;
                self.released.emit(());
                self.click();
                true
            }
            _ => false,
        }
    }
}

impl Default for ToggleCore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToggleCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleCore")
            .field("id", &self.id)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("hovered", &self.hovered)
            .field("focused", &self.focused)
            .finish()
    }
}

static_assertions::assert_impl_all!(ToggleCore: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn ids_are_unique() {
        let a = ToggleCore::new();
        let b = ToggleCore::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn toggle_flips_state_and_emits() {
        let mut core = ToggleCore::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        core.toggled.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        core.toggle();
        assert!(core.is_checked());
        core.toggle();
        assert!(!core.is_checked());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn set_checked_is_idempotent() {
        let mut core = ToggleCore::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        core.toggled.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        core.set_checked(true);
        core.set_checked(true);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn click_emits_clicked_with_new_state() {
        let mut core = ToggleCore::new();
        let last = Arc::new(AtomicU32::new(99));

        let last_clone = last.clone();
        core.clicked.connect(move |&checked| {
            last_clone.store(checked as u32, Ordering::SeqCst);
        });

        core.click();
        assert_eq!(last.load(Ordering::SeqCst), 1);
        core.click();
        assert_eq!(last.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn disabled_suppresses_interaction() {
        let mut core = ToggleCore::new();
        core.set_disabled(true);

        core.click();
        assert!(!core.is_checked());

        assert!(!core.handle_mouse_press(&MousePressEvent { button: MouseButton::Left }));
        assert!(!core.handle_key_press(&KeyPressEvent { key: Key::Space, is_repeat: false }));
    }

    #[test]
    fn programmatic_set_checked_works_while_disabled() {
        let mut core = ToggleCore::new();
        core.set_disabled(true);
        core.set_checked(true);
        assert!(core.is_checked());
    }

    #[test]
    fn mouse_click_requires_release_inside() {
        let mut core = ToggleCore::new();

        core.handle_mouse_press(&MousePressEvent { button: MouseButton::Left });
        assert!(!core.handle_mouse_release(&MouseReleaseEvent {
            button: MouseButton::Left,
            inside: false,
        }));
        assert!(!core.is_checked());

        core.handle_mouse_press(&MousePressEvent { button: MouseButton::Left });
        assert!(core.handle_mouse_release(&MouseReleaseEvent {
            button: MouseButton::Left,
            inside: true,
        }));
        assert!(core.is_checked());
    }

    #[test]
    fn release_without_press_does_not_click() {
        let mut core = ToggleCore::new();
        assert!(!core.handle_mouse_release(&MouseReleaseEvent {
            button: MouseButton::Left,
            inside: true,
        }));
        assert!(!core.is_checked());
    }

    #[test]
    fn non_left_buttons_are_ignored() {
        let mut core = ToggleCore::new();
        assert!(!core.handle_mouse_press(&MousePressEvent { button: MouseButton::Right }));
        assert!(!core.handle_mouse_release(&MouseReleaseEvent {
            button: MouseButton::Middle,
            inside: true,
        }));
    }

    #[test]
    fn keyboard_activation() {
        let mut core = ToggleCore::new();

        assert!(core.handle_key_press(&KeyPressEvent { key: Key::Space, is_repeat: false }));
        assert!(core.handle_key_release(&KeyReleaseEvent { key: Key::Space }));
        assert!(core.is_checked());

        assert!(core.handle_key_press(&KeyPressEvent { key: Key::Enter, is_repeat: false }));
        assert!(core.handle_key_release(&KeyReleaseEvent { key: Key::Enter }));
        assert!(!core.is_checked());

        assert!(!core.handle_key_press(&KeyPressEvent { key: Key::Tab, is_repeat: false }));
    }

    #[test]
    fn repeat_key_press_does_not_re_emit_pressed() {
        let mut core = ToggleCore::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        core.pressed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        core.handle_key_press(&KeyPressEvent { key: Key::Space, is_repeat: false });
        core.handle_key_press(&KeyPressEvent { key: Key::Space, is_repeat: true });
        core.handle_key_press(&KeyPressEvent { key: Key::Space, is_repeat: true });

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn hover_and_focus_are_cosmetic() {
        let mut core = ToggleCore::new();
        core.set_hovered(true);
        core.set_focused(true);

        let state = core.state();
        assert!(state.is_hovered);
        assert!(state.is_focused);
        assert!(!state.is_checked);

        core.set_hovered(false);
        assert!(!core.state().is_hovered);
    }

    #[test]
    fn leaving_cancels_press_in_progress() {
        let mut core = ToggleCore::new();

        core.handle_mouse_press(&MousePressEvent { button: MouseButton::Left });
        core.set_hovered(false);
        assert!(!core.handle_mouse_release(&MouseReleaseEvent {
            button: MouseButton::Left,
            inside: true,
        }));
        assert!(!core.is_checked());
    }
}
