use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The login of a GitHub user.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserLogin(pub String);

impl Deref for UserLogin {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for UserLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile of a GitHub user, as returned by `GET /users/{user}`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// The login of the user.
    login: UserLogin,

    /// The URL of the user avatar.
    avatar_url: String,

    /// The display name of the user, if the user has set one.
    #[serde(rename = "name")]
    display_name: Option<String>,

    /// The number of followers.
    #[serde(rename = "followers")]
    follower_count: u64,

    /// The number of users followed.
    #[serde(rename = "following")]
    following_count: u64,

    /// The number of public repositories owned by the user.
    #[serde(rename = "public_repos")]
    public_repo_count: u64,
}

impl UserProfile {
    /// Creates a new `UserProfile` instance.
    pub fn new(
        login: &str,
        avatar_url: &str,
        display_name: Option<&str>,
        follower_count: u64,
        following_count: u64,
        public_repo_count: u64,
    ) -> Self {
        Self {
            login: UserLogin(login.to_string()),
            avatar_url: avatar_url.to_string(),
            display_name: display_name.map(str::to_string),
            follower_count,
            following_count,
            public_repo_count,
        }
    }

    /// Retrieves the user login.
    pub fn login(&self) -> &UserLogin {
        &self.login
    }

    /// Retrieves the avatar URL.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Retrieves the display name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Retrieves the number of followers.
    pub fn follower_count(&self) -> u64 {
        self.follower_count
    }

    /// Retrieves the number of users followed.
    pub fn following_count(&self) -> u64 {
        self.following_count
    }

    /// Retrieves the number of public repositories.
    pub fn public_repo_count(&self) -> u64 {
        self.public_repo_count
    }

    /// Creates a dummy `UserProfile` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(login: &str, public_repo_count: u64) -> Self {
        Self::new(
            login,
            "https://avatars.githubusercontent.com/u/1",
            Some("Dummy User"),
            1500,
            42,
            public_repo_count,
        )
    }
}

impl Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {}, Followers: {}, Following: {}, Repositories: {}",
            self.login, self.follower_count, self.following_count, self.public_repo_count
        )
    }
}

/// Summary of a public repository, as listed by `GET /users/{user}/repos`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// The unique identifier of the repository.
    id: u64,

    /// The name of the repository.
    name: String,

    /// The description of the repository.
    description: Option<String>,

    /// The URL of the repository web page.
    html_url: String,
}

impl RepositorySummary {
    /// Creates a new `RepositorySummary` instance.
    pub fn new(id: u64, name: &str, description: Option<&str>, html_url: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
            html_url: html_url.to_string(),
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the repository web page URL.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }
}

impl Display for RepositorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Repository: {} (#{}), URL: {}", self.name, self.id, self.html_url)
    }
}
