use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One GitHub account as returned by the list endpoints
/// (`/users/{login}/followers` and `/users/{login}/following`).
///
/// Identity is the `login`, case-sensitive as returned by the API.
/// The list endpoints omit most profile fields, so everything beyond
/// the login is defaulted when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub followers: u64,
}

impl Account {
    /// Display name if the account has one, otherwise the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// A full GitHub profile from the `/users/{login}` API.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    /// Followers per followed account; zero when the profile follows nobody.
    pub fn follower_ratio(&self) -> f64 {
        if self.following > 0 {
            self.followers as f64 / self.following as f64
        } else {
            0.0
        }
    }
}
