use std::fmt;
use std::str::FromStr;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::Endpoints;
use crate::domain::{decode, CommentsResponse, Item, ListingResponse, SingleCommentRoot, SoundboardItem};
use crate::utils::error::{DumpertError, Result};
use crate::utils::validation::{normalize_period, split_article_id};

/// Direction for the item rating endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDirection {
    Up,
    Down,
}

impl RateDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            RateDirection::Up => "up",
            RateDirection::Down => "down",
        }
    }
}

impl fmt::Display for RateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateDirection {
    type Err = DumpertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(RateDirection::Up),
            "down" => Ok(RateDirection::Down),
            other => Err(DumpertError::InvalidArgument {
                field: "up_down".to_string(),
                value: other.to_string(),
                reason: "expected \"up\" or \"down\"".to_string(),
            }),
        }
    }
}

/// Raw result of the write-like endpoints (rating, kudos). The upstream
/// response body has no stable JSON shape, so it is passed through verbatim
/// next to the HTTP success flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateOutcome {
    pub success: bool,
    pub response: String,
}

/// Stateless client for the upstream API. One shared connection pool; every
/// call is an independent GET (or POST for the write-like endpoints), safe
/// to issue concurrently through a shared reference.
pub struct DumpertClient {
    endpoints: Endpoints,
    http: Client,
}

impl DumpertClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            http: Client::new(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetches `url` and decodes the JSON body into `T`.
    ///
    /// This is the result-typed boundary: non-2xx responses and decode
    /// failures come back as errors here, and the named operations below
    /// turn them into their documented defaults.
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DumpertError::StatusError {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        decode(value)
    }

    async fn fetch_or_none<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.fetch_as(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Failed to fetch data from {}: {}", url, e);
                None
            }
        }
    }

    async fn fetch_items(&self, url: &str) -> Vec<Item> {
        self.fetch_or_none::<ListingResponse>(url)
            .await
            .map(|listing| listing.items)
            .unwrap_or_default()
    }

    /// Top items ("dagtoppers") of the day.
    pub async fn top_of_day(&self) -> Vec<Item> {
        let url = format!("{}/top5/dag/", self.endpoints.api_live_base);
        self.fetch_items(&url).await
    }

    /// Top items of the given week (`YYYYWW`, dashes allowed).
    pub async fn top_of_week(&self, year_week: &str) -> Vec<Item> {
        let url = format!(
            "{}/top5/week/{}",
            self.endpoints.api_base,
            normalize_period(year_week)
        );
        self.fetch_items(&url).await
    }

    /// Top items of the given month (`YYYYMM`, dashes allowed).
    pub async fn top_of_month(&self, year_month: &str) -> Vec<Item> {
        let url = format!(
            "{}/top5/maand/{}",
            self.endpoints.api_base,
            normalize_period(year_month)
        );
        self.fetch_items(&url).await
    }

    /// Latest uploads, paginated.
    pub async fn latest(&self, page: u32) -> Vec<Item> {
        let url = format!("{}/latest/{}", self.endpoints.api_base, page);
        self.fetch_items(&url).await
    }

    /// Classic items, paginated.
    pub async fn classics(&self, page: u32) -> Vec<Item> {
        let url = format!("{}/classics/{}", self.endpoints.api_base, page);
        self.fetch_items(&url).await
    }

    /// Items related to the given id.
    pub async fn related(&self, dumpert_id: &str) -> Vec<Item> {
        let url = format!("{}/related/{}", self.endpoints.api_base, dumpert_id);
        self.fetch_items(&url).await
    }

    /// Current Dumpert TV videos.
    pub async fn dumpert_tv(&self) -> Vec<Item> {
        let url = format!("{}/dumperttv", self.endpoints.api_base);
        self.fetch_items(&url).await
    }

    /// Trending ("hotshiz") items.
    pub async fn hotshiz(&self) -> Vec<Item> {
        let url = format!("{}/hotshiz", self.endpoints.api_base);
        self.fetch_items(&url).await
    }

    /// Detail record for a single id; the endpoint answers with a one-item
    /// listing.
    pub async fn info(&self, dumpert_id: &str) -> Option<Item> {
        let url = format!("{}/info/{}", self.endpoints.api_base, dumpert_id);
        self.fetch_or_none::<ListingResponse>(&url)
            .await
            .and_then(|listing| listing.items.into_iter().next())
    }

    /// Full-text search, paginated.
    pub async fn search(&self, query: &str, page: u32) -> Vec<Item> {
        let url = format!("{}/search/{}/{}", self.endpoints.api_base, query, page);
        self.fetch_items(&url).await
    }

    /// All comments for an article, flat, with the referenced author
    /// profiles. The id must be of the `<articleId>_<subId>` form; anything
    /// else is rejected before a request is made.
    pub async fn comments_for_article(
        &self,
        dumpert_id: &str,
    ) -> Result<Option<CommentsResponse>> {
        let (article, sub) = split_article_id(dumpert_id)?;
        let url = format!(
            "{}/articles/{}/{}/comments",
            self.endpoints.comment_base, article, sub
        );
        Ok(self.fetch_or_none(&url).await)
    }

    /// A single comment thread by comment id.
    pub async fn comment_by_id(&self, comment_id: &str) -> Option<SingleCommentRoot> {
        let url = format!("{}/comments/{}/", self.endpoints.comments_base, comment_id);
        self.fetch_or_none(&url).await
    }

    /// The soundboard asset list.
    pub async fn soundboard(&self) -> Vec<SoundboardItem> {
        let url = format!("{}/soundboard.json", self.endpoints.snippets_base);
        self.fetch_or_none(&url).await.unwrap_or_default()
    }

    /// The videomixer asset file. Its shape is not modeled; the payload is
    /// passed through as opaque JSON, or an explicit failure marker when the
    /// fetch does not produce one.
    pub async fn videomixer(&self) -> Value {
        let url = format!("{}/videomixer.json", self.endpoints.snippets_base);
        match self.fetch_as::<Value>(&url).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to fetch data from {}: {}", url, e);
                json!({
                    "success": false,
                    "response": "Failed to fetch videomixer assets.",
                })
            }
        }
    }

    /// Rates an item up or down. Does not go through `fetch_as`: there is no
    /// JSON shape to decode, so the body text is returned as-is next to the
    /// HTTP success flag, whatever the status was.
    pub async fn rate(&self, dumpert_id: &str, direction: RateDirection) -> RateOutcome {
        let url = format!(
            "{}/rating/{}/{}",
            self.endpoints.post_base, dumpert_id, direction
        );
        self.raw_call(self.http.get(&url), &url).await
    }

    /// Gives kudos to a comment. Same raw contract as [`rate`](Self::rate).
    pub async fn comment_kudos(&self, comment_id: i64) -> RateOutcome {
        let url = format!("{}/comments/{}/kudos", self.endpoints.comment_base, comment_id);
        self.raw_call(self.http.post(&url), &url).await
    }

    /// Downvotes a comment. Same raw contract as [`rate`](Self::rate).
    pub async fn comment_downvote(&self, comment_id: i64) -> RateOutcome {
        let url = format!(
            "{}/comments/{}/downvote",
            self.endpoints.comment_base, comment_id
        );
        self.raw_call(self.http.post(&url), &url).await
    }

    async fn raw_call(&self, request: reqwest::RequestBuilder, url: &str) -> RateOutcome {
        tracing::debug!("calling {}", url);
        match request.send().await {
            Ok(response) => {
                let success = response.status().is_success();
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                if !success {
                    tracing::warn!("Request to {} answered {}: {}", url, status, body);
                }
                RateOutcome {
                    success,
                    response: body,
                }
            }
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                RateOutcome::default()
            }
        }
    }
}
