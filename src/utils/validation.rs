use crate::utils::error::{DumpertError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DumpertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DumpertError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DumpertError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Splits a Dumpert id of the form `<articleId>_<subId>` into its two path
/// segments. Ids with zero or more than one underscore are rejected.
pub fn split_article_id(id: &str) -> Result<(&str, &str)> {
    let mut parts = id.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(article), Some(sub), None) if !article.is_empty() && !sub.is_empty() => {
            Ok((article, sub))
        }
        _ => Err(DumpertError::InvalidArgument {
            field: "dumpert_id".to_string(),
            value: id.to_string(),
            reason: "expected exactly one '_' between article id and sub id".to_string(),
        }),
    }
}

/// Week/month period ids may be passed as `2025-03` or `202503`; the API
/// wants the bare digit string.
pub fn normalize_period(period: &str) -> String {
    period.replace('-', "")
}
