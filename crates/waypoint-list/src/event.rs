//! UI Events
//!
//! The presenter only needs two things from an event: a way to cancel its
//! default effect, and for keyboard events the key identifier. Front ends wrap
//! their native events in these traits.

/// Key identifier of the cancel key
pub const ESCAPE_KEY: &str = "Escape";

/// Exact match against [`ESCAPE_KEY`]
pub fn is_escape(key: &str) -> bool {
    key == ESCAPE_KEY
}

/// An activation event (click, submit)
pub trait UiEvent {
    /// Suppress the platform's default effect (navigation, form submission)
    fn prevent_default(&mut self);

    fn default_prevented(&self) -> bool;
}

/// A key press
pub trait KeyInput: UiEvent {
    fn key(&self) -> &str;
}

/// Plain event for callers without a native event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntheticEvent {
    prevented: bool,
}

impl SyntheticEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UiEvent for SyntheticEvent {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.prevented
    }
}

/// Plain key press for callers without a native event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticKey {
    key: String,
    prevented: bool,
}

impl SyntheticKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prevented: false,
        }
    }

    pub fn escape() -> Self {
        Self::new(ESCAPE_KEY)
    }
}

impl UiEvent for SyntheticKey {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.prevented
    }
}

impl KeyInput for SyntheticKey {
    fn key(&self) -> &str {
        &self.key
    }
}
