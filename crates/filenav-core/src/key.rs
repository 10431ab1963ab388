//! Key identifiers understood by the navigation controller.

/// The three keys that move or clear a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Down,
    Up,
    Escape,
}

impl NavKey {
    pub const ARROW_DOWN: &'static str = "ArrowDown";
    pub const ARROW_UP: &'static str = "ArrowUp";
    pub const ESCAPE: &'static str = "Escape";

    /// Parse a platform key identifier. Matching is exact and case-sensitive.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            Self::ARROW_DOWN => Some(Self::Down),
            Self::ARROW_UP => Some(Self::Up),
            Self::ESCAPE => Some(Self::Escape),
            _ => None,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::Down => Self::ARROW_DOWN,
            Self::Up => Self::ARROW_UP,
            Self::Escape => Self::ESCAPE,
        }
    }

    /// Whether handling this key should suppress the platform's default action.
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }
}

/// A single key-down event as delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    key: String,
    default_prevented: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn nav_key(&self) -> Option<NavKey> {
        NavKey::from_identifier(&self.key)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
