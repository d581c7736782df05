use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

pub const DEFAULT_API_BASE: &str = "https://api.dumpert.nl/mobile_api/json";
pub const DEFAULT_API_LIVE_BASE: &str = "https://api-live.dumpert.nl/mobile_api/json";
pub const DEFAULT_COMMENT_BASE: &str = "https://comment.dumpert.nl/api/v1.0";
pub const DEFAULT_COMMENTS_BASE: &str = "https://comments.dumpert.nl/api/v1.0";
pub const DEFAULT_POST_BASE: &str = "https://post.dumpert.nl/api/v1.0";
pub const DEFAULT_SNIPPETS_BASE: &str = "https://video-snippets.dumpert.nl";

/// Base URLs for the upstream API families. The platform spreads its
/// endpoints over several hosts; each one can be overridden independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub api_base: String,
    pub api_live_base: String,
    pub comment_base: String,
    pub comments_base: String,
    pub post_base: String,
    pub snippets_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_live_base: DEFAULT_API_LIVE_BASE.to_string(),
            comment_base: DEFAULT_COMMENT_BASE.to_string(),
            comments_base: DEFAULT_COMMENTS_BASE.to_string(),
            post_base: DEFAULT_POST_BASE.to_string(),
            snippets_base: DEFAULT_SNIPPETS_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Points every endpoint family at a single host, e.g. a local mock
    /// server or a proxy in front of the real API.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_base: base.to_string(),
            api_live_base: base.to_string(),
            comment_base: base.to_string(),
            comments_base: base.to_string(),
            post_base: base.to_string(),
            snippets_base: base.to_string(),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "dumpert-mcp")]
#[command(about = "MCP server exposing the Dumpert public API as agent tools")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, default_value = DEFAULT_API_LIVE_BASE)]
    pub api_live_base: String,

    #[arg(long, default_value = DEFAULT_COMMENT_BASE)]
    pub comment_base: String,

    #[arg(long, default_value = DEFAULT_COMMENTS_BASE)]
    pub comments_base: String,

    #[arg(long, default_value = DEFAULT_POST_BASE)]
    pub post_base: String,

    #[arg(long, default_value = DEFAULT_SNIPPETS_BASE)]
    pub snippets_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            api_base: self.api_base.trim_end_matches('/').to_string(),
            api_live_base: self.api_live_base.trim_end_matches('/').to_string(),
            comment_base: self.comment_base.trim_end_matches('/').to_string(),
            comments_base: self.comments_base.trim_end_matches('/').to_string(),
            post_base: self.post_base.trim_end_matches('/').to_string(),
            snippets_base: self.snippets_base.trim_end_matches('/').to_string(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_url("api_live_base", &self.api_live_base)?;
        validate_url("comment_base", &self.comment_base)?;
        validate_url("comments_base", &self.comments_base)?;
        validate_url("post_base", &self.post_base)?;
        validate_url("snippets_base", &self.snippets_base)?;
        Ok(())
    }
}
