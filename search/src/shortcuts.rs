//! Global keyboard shortcuts for the search overlay.
//!
//! Shortcut format: `[Mod+][Ctrl+][Alt+][Shift+][Meta+]<e.code>`
//! where `<e.code>` is the DOM KeyboardEvent.code value (e.g., "KeyK", "Slash",
//! "Escape") and `Mod` accepts either Ctrl or Meta (Cmd on macOS).

use folio_core::types::ShortcutsConfig;
use keycode::KeyMappingCode;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("shortcut is empty")]
    Empty,

    #[error("shortcut has no key: {0}")]
    MissingKey(String),

    #[error("shortcut has more than one key: {0}")]
    MultipleKeys(String),

    #[error("unknown key code: {0}")]
    UnknownKey(String),

    #[error("global key listener is already registered")]
    AlreadyRegistered,
}

/// Modifier state of a key event or binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// A key press as delivered by the host's keydown listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// DOM KeyboardEvent.code, e.g. "KeyK".
    pub code: String,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }
}

/// Parsed keyboard shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub modifiers: Modifiers,
    /// `Mod`: either Ctrl or Meta satisfies the binding.
    pub primary: bool,
    pub code: String,
}

impl Shortcut {
    /// A bare key without modifiers.
    pub fn key(code: &str) -> Self {
        Self {
            modifiers: Modifiers::default(),
            primary: false,
            code: code.to_string(),
        }
    }

    /// Parses a shortcut string like "Mod+KeyK" or "Ctrl+Shift+KeyF".
    pub fn parse(shortcut: &str) -> Result<Self, ShortcutError> {
        let shortcut = shortcut.trim();
        if shortcut.is_empty() {
            return Err(ShortcutError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut primary = false;
        let mut key_part: Option<&str> = None;

        for part in shortcut.split('+') {
            let part = part.trim();
            match part.to_lowercase().as_str() {
                "mod" | "cmdorctrl" => primary = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "win" | "super" => modifiers.meta = true,
                _ => {
                    if key_part.is_some() {
                        return Err(ShortcutError::MultipleKeys(shortcut.to_string()));
                    }
                    key_part = Some(part);
                }
            }
        }

        let key = key_part
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ShortcutError::MissingKey(shortcut.to_string()))?;
        // e.code names are case-sensitive ("KeyK", not "keyk").
        if key.parse::<KeyMappingCode>().is_err() {
            return Err(ShortcutError::UnknownKey(key.to_string()));
        }

        Ok(Self {
            modifiers,
            primary,
            code: key.to_string(),
        })
    }

    pub fn matches(&self, input: &KeyInput) -> bool {
        if self.code != input.code {
            return false;
        }

        let pressed = input.modifiers;
        let wanted = self.modifiers;
        if pressed.alt != wanted.alt || pressed.shift != wanted.shift {
            return false;
        }

        if self.primary {
            // Either key satisfies Mod; an explicitly named one is still required.
            (pressed.ctrl || pressed.meta)
                && (!wanted.ctrl || pressed.ctrl)
                && (!wanted.meta || pressed.meta)
        } else {
            pressed.ctrl == wanted.ctrl && pressed.meta == wanted.meta
        }
    }
}

/// What a global shortcut asks the overlay to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCommand {
    Toggle,
    Open,
    Close,
}

/// The overlay's global bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalShortcuts {
    pub toggle: Shortcut,
    pub open: Shortcut,
    pub close: Shortcut,
}

impl GlobalShortcuts {
    /// Parses every binding, failing on the first invalid one.
    pub fn try_from_config(config: &ShortcutsConfig) -> Result<Self, ShortcutError> {
        Ok(Self {
            toggle: Shortcut::parse(&config.toggle_search)?,
            open: Shortcut::parse(&config.open_search)?,
            close: Shortcut::parse(&config.close_search)?,
        })
    }

    /// Parses every binding, falling back to the default for invalid ones.
    pub fn from_config(config: &ShortcutsConfig) -> Self {
        let defaults = Self::default();
        let parse_or = |name: &str, value: &str, default: Shortcut| {
            Shortcut::parse(value).unwrap_or_else(|err| {
                tracing::warn!(shortcut = name, value, %err, "invalid shortcut, using default");
                default
            })
        };

        Self {
            toggle: parse_or("toggle_search", &config.toggle_search, defaults.toggle),
            open: parse_or("open_search", &config.open_search, defaults.open),
            close: parse_or("close_search", &config.close_search, defaults.close),
        }
    }

    /// Maps a key press to an overlay command.
    ///
    /// The open binding is ignored while the overlay is open so it stays
    /// typeable in the search box.
    pub fn resolve(&self, input: &KeyInput, is_open: bool) -> Option<OverlayCommand> {
        if self.toggle.matches(input) {
            return Some(OverlayCommand::Toggle);
        }
        if !is_open && self.open.matches(input) {
            return Some(OverlayCommand::Open);
        }
        if self.close.matches(input) {
            return Some(OverlayCommand::Close);
        }
        None
    }
}

impl Default for GlobalShortcuts {
    /// `Mod+KeyK` toggles, `Slash` opens, `Escape` closes.
    fn default() -> Self {
        Self {
            toggle: Shortcut {
                modifiers: Modifiers::default(),
                primary: true,
                code: "KeyK".to_string(),
            },
            open: Shortcut::key("Slash"),
            close: Shortcut::key("Escape"),
        }
    }
}

/// Tracks whether the global key listener is installed.
///
/// Hosts call `register()` when the overlay mounts and keep the guard until
/// it unmounts; a second mount while the first is alive is refused.
pub struct ListenerSlot {
    registered: AtomicBool,
}

/// Process-wide slot for the overlay's keydown listener.
pub static GLOBAL_LISTENER: ListenerSlot = ListenerSlot::new();

impl ListenerSlot {
    pub const fn new() -> Self {
        Self {
            registered: AtomicBool::new(false),
        }
    }

    pub fn register(&self) -> Result<ListenerGuard<'_>, ShortcutError> {
        self.registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ShortcutError::AlreadyRegistered)?;
        tracing::debug!("global key listener registered");
        Ok(ListenerGuard { slot: self })
    }

    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }
}

impl Default for ListenerSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Deregisters the listener when dropped.
pub struct ListenerGuard<'a> {
    slot: &'a ListenerSlot,
}

impl Drop for ListenerGuard<'_> {
    fn drop(&mut self) {
        self.slot.registered.store(false, Ordering::Release);
        tracing::debug!("global key listener deregistered");
    }
}
