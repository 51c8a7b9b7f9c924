//! Keyboard handling for the fireworks window.
//!
//! [`Input`] turns raw window events into per-frame key state and maps it to
//! launch requests:
//!
//! | Key | Launch |
//! |-----|--------|
//! | `1` | [`LaunchSite::Left`] |
//! | `2` | [`LaunchSite::Center`] |
//! | `3` | [`LaunchSite::Right`] |
//! | any key while `Shift` is down, `Shift` included | [`LaunchSite::Anywhere`] |
//!
//! Every keydown launches, auto-repeat included, so holding a key keeps
//! firing. Command keys (`Escape`, `F12`) only count the first press.

use crate::emitter::LaunchSite;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the fireworks window reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Key1,
    Key2,
    Key3,
    Shift,
    Escape,
    F12,
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Digit1 | WinitKeyCode::Numpad1 => KeyCode::Key1,
            WinitKeyCode::Digit2 | WinitKeyCode::Numpad2 => KeyCode::Key2,
            WinitKeyCode::Digit3 | WinitKeyCode::Numpad3 => KeyCode::Key3,
            WinitKeyCode::ShiftLeft | WinitKeyCode::ShiftRight => KeyCode::Shift,
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::F12 => KeyCode::F12,
            _ => KeyCode::Other(key as u32),
        }
    }
}

impl KeyCode {
    /// Site a keydown launches from, given whether `Shift` is down.
    pub fn launch_site(self, shift: bool) -> Option<LaunchSite> {
        if shift || self == KeyCode::Shift {
            return Some(LaunchSite::Anywhere);
        }
        match self {
            KeyCode::Key1 => Some(LaunchSite::Left),
            KeyCode::Key2 => Some(LaunchSite::Center),
            KeyCode::Key3 => Some(LaunchSite::Right),
            _ => None,
        }
    }
}

/// Keyboard state for the current frame.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    // One entry per keydown, in arrival order.
    launches: Vec<LaunchSite>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` went down this frame (auto-repeat excluded).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether `key` is currently down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Launches requested by keydowns since the last [`Input::begin_frame`].
    pub fn launch_sites(&self) -> &[LaunchSite] {
        &self.launches
    }

    /// Clear per-frame presses and launches. Call after they were consumed.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.launches.clear();
    }

    /// Record a keydown. Repeats of a held key still launch.
    pub(crate) fn press(&mut self, key: KeyCode) {
        let shift = self.key_held(KeyCode::Shift);
        if let Some(site) = key.launch_site(shift) {
            self.launches.push(site);
        }
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub(crate) fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = KeyCode::from(code);
                    match event.state {
                        ElementState::Pressed => self.press(key),
                        ElementState::Released => self.release(key),
                    }
                }
            }
            WindowEvent::Focused(false) => {
                // Releases are not delivered while unfocused.
                self.keys_held.clear();
            }
            _ => {}
        }
    }
}
