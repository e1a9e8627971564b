//! Session identity.
//!
//! The display name captured before the board becomes usable. It is set at
//! most once per session and gates every note-creation gesture.

use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the display name submitted by the identity-capture screen.
    ///
    /// Surrounding whitespace is trimmed. Blank names are refused, and once an
    /// identity is set later submissions are ignored. Returns whether the
    /// identity was accepted.
    pub fn submit_identity(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            warn!("identity refused: blank name");
            return false;
        }
        if let Some(current) = &self.identity {
            warn!(current = %current, "identity already set for this session");
            return false;
        }

        info!(name, "session identity set");
        self.identity = Some(name.to_string());
        true
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Whether the board may be interacted with.
    pub fn is_identified(&self) -> bool {
        self.identity.is_some()
    }
}
