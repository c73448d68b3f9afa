use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::models::{Account, Profile};
use crate::pagination::{Page, PageSource};

const API_ROOT: &str = "https://api.github.com";

/// Page size requested from the list endpoints; the maximum GitHub allows.
pub const PER_PAGE: u32 = 100;

/// Errors surfaced by the GitHub API client.
///
/// Rate limiting gets no special handling beyond its own variant: there
/// is no retry or backoff, the caller sees it like any other failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user \"{0}\" not found")]
    NotFound(String),
    #[error("GitHub API rate limit exceeded")]
    RateLimited,
    #[error("GitHub API error ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to reach GitHub API: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid token value")]
    InvalidToken,
}

/// The two list-valued relations a subject account has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Followers,
    Following,
}

impl Relation {
    fn as_str(self) -> &'static str {
        match self {
            Relation::Followers => "followers",
            Relation::Following => "following",
        }
    }
}

/// HTTP client preconfigured with the headers GitHub expects.
///
/// Works unauthenticated against public data; an optional token raises
/// the rate limit but grants no extra visibility here.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
}

impl GithubClient {
    pub fn new(token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("gh-insights"));
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = token {
            let val = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidToken)?;
            headers.insert(AUTHORIZATION, val);
        }

        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self { http })
    }

    /// Fetches a full GitHub profile by username.
    pub async fn fetch_user(&self, login: &str) -> Result<Profile, ApiError> {
        let url = format!("{API_ROOT}/users/{login}");
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, login).await?;
        Ok(response.json::<Profile>().await?)
    }

    /// Fetches one relation of the subject in full, following the page
    /// cursor until the upstream signals end of data.
    pub async fn fetch_relation(
        &self,
        login: &str,
        relation: Relation,
    ) -> Result<Vec<Account>, ApiError> {
        let source = RelationPages {
            client: self,
            login,
            relation,
        };
        crate::pagination::fetch_all_pages(&source).await
    }
}

/// One relation of one subject, viewed as a paged source.
struct RelationPages<'a> {
    client: &'a GithubClient,
    login: &'a str,
    relation: Relation,
}

#[async_trait]
impl PageSource for RelationPages<'_> {
    async fn fetch_page(&self, page: u32) -> Result<Page, ApiError> {
        let url = format!(
            "{API_ROOT}/users/{}/{}?per_page={PER_PAGE}&page={page}",
            self.login,
            self.relation.as_str(),
        );
        debug!("GET {url}");
        let response = self.client.http.get(&url).send().await?;
        let response = check_status(response, self.login).await?;
        let body: serde_json::Value = response.json().await?;

        // A success response that is not a well-formed account array is a
        // benign end-of-pagination signal, never an error.
        match serde_json::from_value::<Vec<Account>>(body) {
            Ok(items) => Ok(Page::Items(items)),
            Err(_) => Ok(Page::End),
        }
    }
}

/// Maps non-success statuses to the error taxonomy.
async fn check_status(
    response: reqwest::Response,
    login: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(login.to_string())),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimited),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status { status, body })
        }
    }
}
