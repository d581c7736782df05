use serde::{Deserialize, Serialize};

/// One sound clip from the soundboard asset file. The endpoint returns a
/// bare JSON array of these, not an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundboardItem {
    pub name: String,
    pub url: String,
    pub thumbnail: String,
    pub video: String,
    pub duration: u32,
}
