//! Navigable views and their textual addresses.
//!
//! Routes mirror the web layout the app started from: `/`, `/input`,
//! `/feedback/<session>` and `/rewrite/<session>`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier that addresses a feedback or rewrite view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A view the app can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing view.
    #[default]
    Home,
    /// Text entry and model selection.
    Input,
    /// Feedback results for a session.
    Feedback(SessionId),
    /// Rewrite results for a session.
    Rewrite(SessionId),
}

impl Route {
    /// Whether the view holds the viewport's scroll lock while mounted.
    #[must_use]
    pub const fn locks_scroll(&self) -> bool {
        matches!(self, Self::Home | Self::Input)
    }

    /// Session shown by a results view.
    #[must_use]
    pub const fn session(&self) -> Option<&SessionId> {
        match self {
            Self::Feedback(id) | Self::Rewrite(id) => Some(id),
            Self::Home | Self::Input => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Input => f.write_str("/input"),
            Self::Feedback(id) => write!(f, "/feedback/{id}"),
            Self::Rewrite(id) => write!(f, "/rewrite/{id}"),
        }
    }
}

/// Why a route string could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The path names no known view.
    #[error("unknown route `{0}`")]
    Unknown(String),
    /// A results view was requested without a session id.
    #[error("route `{0}` needs a session id")]
    MissingSession(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        let head = segments.next().unwrap_or_default();
        let session = segments.next().filter(|rest| !rest.is_empty());

        match (head, session) {
            ("", None) => Ok(Self::Home),
            ("input", None) => Ok(Self::Input),
            ("feedback", Some(id)) => Ok(Self::Feedback(SessionId::new(id))),
            ("rewrite", Some(id)) => Ok(Self::Rewrite(SessionId::new(id))),
            ("feedback" | "rewrite", None) => Err(RouteError::MissingSession(s.to_string())),
            _ => Err(RouteError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_known_routes() -> Result<(), RouteError> {
        assert_eq!("/".parse::<Route>()?, Route::Home);
        assert_eq!("".parse::<Route>()?, Route::Home);
        assert_eq!("/input".parse::<Route>()?, Route::Input);
        assert_eq!("input/".parse::<Route>()?, Route::Input);
        assert_eq!(
            "/feedback/abc-123".parse::<Route>()?,
            Route::Feedback(SessionId::new("abc-123"))
        );
        assert_eq!(
            "/rewrite/xyz".parse::<Route>()?,
            Route::Rewrite(SessionId::new("xyz"))
        );
        Ok(())
    }

    #[test]
    fn test_parse_missing_session() {
        assert_eq!(
            "/feedback".parse::<Route>(),
            Err(RouteError::MissingSession("/feedback".to_string()))
        );
        assert_eq!(
            "/rewrite/".parse::<Route>(),
            Err(RouteError::MissingSession("/rewrite/".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "/history".parse::<Route>(),
            Err(RouteError::Unknown("/history".to_string()))
        );
        assert!("/input/extra".parse::<Route>().is_err());
    }

    #[test]
    fn test_display_roundtrips() -> Result<(), RouteError> {
        for route in [
            Route::Home,
            Route::Input,
            Route::Feedback(SessionId::new("s1")),
            Route::Rewrite(SessionId::new("s2")),
        ] {
            assert_eq!(route.to_string().parse::<Route>()?, route);
        }
        Ok(())
    }

    #[test]
    fn test_locks_scroll() {
        assert!(Route::Home.locks_scroll());
        assert!(Route::Input.locks_scroll());
        assert!(!Route::Feedback(SessionId::new("s")).locks_scroll());
        assert!(!Route::Rewrite(SessionId::new("s")).locks_scroll());
    }

    #[test]
    fn test_generated_session_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }
}
