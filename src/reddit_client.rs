use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

pub const REDDIT_BASE_URL: &str = "https://www.reddit.com";
const REDDIT_USER_AGENT: &str = "Mozilla/5.0 (compatible; EngineerPath/1.0; +http://localhost)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum RedditError {
    #[error("Rate limited by the Reddit API")]
    RateLimited,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    #[serde(default)]
    pub created_utc: f64,
}

#[derive(Debug, Clone)]
pub struct TopComment {
    pub author: String,
    pub body: String,
    pub score: i64,
}

#[derive(serde::Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Default, serde::Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<PostChild>,
}

#[derive(serde::Deserialize)]
struct PostChild {
    data: Post,
}

#[derive(serde::Deserialize)]
struct CommentListing {
    #[serde(default)]
    data: CommentListingData,
}

#[derive(Default, serde::Deserialize)]
struct CommentListingData {
    #[serde(default)]
    children: Vec<CommentChild>,
}

#[derive(serde::Deserialize)]
struct CommentChild {
    #[serde(default)]
    data: CommentData,
}

#[derive(Default, serde::Deserialize)]
struct CommentData {
    #[serde(default)]
    author: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    score: i64,
}

/// Read-only client for the public Reddit JSON API. Every request is paced
/// to stay inside the API's rate budget; a 429 answer aborts the run.
pub struct RedditClient {
    http_client: Client,
    base_url: String,
    pacing: Duration,
}

impl RedditClient {
    pub fn new(base_url: String, pacing: Duration) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            pacing,
        }
    }

    pub fn production() -> Self {
        Self::new(REDDIT_BASE_URL.to_string(), Duration::from_secs(2))
    }

    /// Searches a subreddit, most relevant posts first.
    #[tracing::instrument(name = "Searching subreddit", skip(self))]
    pub async fn search(
        &self,
        subreddit: &str,
        term: &str,
        limit: u32,
    ) -> Result<Vec<Post>, RedditError> {
        let url = format!("{}/r/{}/search.json", self.base_url, subreddit);
        let params = [
            ("q", term.to_string()),
            ("restrict_sr", "1".to_string()),
            ("sort", "relevance".to_string()),
            ("limit", limit.to_string()),
            ("raw_json", "1".to_string()),
        ];
        let listing: Listing = self.get_json(url, &params).await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect())
    }

    /// Fetches the top comment of a post, if it has any. The body is
    /// truncated to 200 characters.
    #[tracing::instrument(name = "Fetching top comment", skip(self))]
    pub async fn top_comment(
        &self,
        subreddit: &str,
        post_id: &str,
    ) -> Result<Option<TopComment>, RedditError> {
        let url = format!("{}/r/{}/comments/{}.json", self.base_url, subreddit, post_id);
        let params = [("raw_json", "1".to_string()), ("limit", "1".to_string())];
        // The comments endpoint answers with two listings: the post itself,
        // then its comment tree.
        let listings: Vec<CommentListing> = self.get_json(url, &params).await?;
        let Some(comments) = listings.into_iter().nth(1) else {
            return Ok(None);
        };
        Ok(comments
            .data
            .children
            .into_iter()
            .next()
            .map(|child| TopComment {
                author: child.data.author,
                body: child.data.body.chars().take(200).collect(),
                score: child.data.score,
            }))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T, RedditError> {
        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, REDDIT_USER_AGENT)
            .query(params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(RedditError::RateLimited);
        }
        let payload = response.error_for_status()?.json::<T>().await?;
        tokio::time::sleep(self.pacing).await;
        Ok(payload)
    }
}
