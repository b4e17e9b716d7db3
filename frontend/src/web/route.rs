//! Route definitions
//!
//! Pure mapping between URL paths and screens, no DOM access.

use std::fmt::Display;

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Catalog (default route)
    #[default]
    Home,
    /// Login / signup screen
    Login,
}

impl AppRoute {
    /// Parse a URL path. Trailing slashes are ignored; unknown paths give `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            _ => None,
        }
    }

    /// Resolve a path to the route that will be shown; unknown paths land on home.
    pub fn resolve(path: &str) -> Self {
        Self::from_path(path).unwrap_or_else(Self::fallback)
    }

    /// Redirect target for unknown paths
    pub fn fallback() -> Self {
        Self::Home
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
