use serde::{Deserialize, Serialize};

/// Envelope returned by every listing-style endpoint. The upstream payload
/// also carries `success`, `gentime`, `stats`, `tags`, `nsfw` and more;
/// only the item list is of interest here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingResponse {
    pub items: Vec<Item>,
}

/// One video/content listing entry. Ids look like `"<articleId>_<subId>"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub thumbnail: String,
    pub media_type: String,
    pub media: Vec<Media>,
}

/// One playable media stream of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub description: String,
    pub duration: u32,
    // The API uses `media_type` on items but `mediatype` on streams.
    #[serde(rename = "mediatype")]
    pub media_type: String,
    pub variants: Vec<Variant>,
}

/// One encoded rendition of a media stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    pub uri: String,
    pub version: String,
}
