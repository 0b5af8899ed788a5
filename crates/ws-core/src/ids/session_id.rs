use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionIdError {
    #[error("session id must not be empty")]
    Empty,
}

/// Session identifier generated once per preferences lifetime.
///
/// Identifies a wallet instance when it is created; regenerated on every
/// global reset. Always a non-empty UUID v4 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SessionId {
    type Error = SessionIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(SessionIdError::Empty);
        }
        Ok(Self(s))
    }
}

impl TryFrom<&str> for SessionId {
    type Error = SessionIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.to_string())
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_session_ids_are_unique_and_non_empty() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_id_serializes_as_plain_string() {
        let id = SessionId::try_from("5f0c7d2e-aaaa-bbbb-cccc-000000000000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5f0c7d2e-aaaa-bbbb-cccc-000000000000\"");
        assert_eq!(serde_json::from_str::<SessionId>(&json).unwrap(), id);
    }

    #[test]
    fn test_empty_session_id_is_rejected() {
        assert_eq!(SessionId::try_from(""), Err(SessionIdError::Empty));
        assert_eq!(SessionId::try_from("  "), Err(SessionIdError::Empty));
        assert!(serde_json::from_str::<SessionId>("\"\"").is_err());
    }
}
