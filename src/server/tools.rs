use serde::Serialize;
use serde_json::{json, Value};

use crate::core::client::{DumpertClient, RateDirection};
use crate::server::JsonRpcError;
use crate::utils::error::DumpertError;

/// The tool catalog. Every entry maps 1:1 onto a `DumpertClient` operation.
pub fn list_tools() -> Value {
    json!({
        "tools": [
            {
                "name": "get_top_of_the_day",
                "description": "Get a list of 'dagtoppers' or top of the day.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "get_top_of_the_week",
                "description": "Get the top 5 videos of the given week.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "year_week": { "type": "string", "description": "Week in YYYYWW form, dashes allowed" }
                    },
                    "required": ["year_week"]
                }
            },
            {
                "name": "get_top_of_the_month",
                "description": "Get the top 5 videos of the given month.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "year_month": { "type": "string", "description": "Month in YYYYMM form, dashes allowed" }
                    },
                    "required": ["year_month"]
                }
            },
            {
                "name": "get_latest",
                "description": "Get the latest uploaded videos (paginated).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "page": { "type": "integer" }
                    },
                    "required": ["page"]
                }
            },
            {
                "name": "get_classics",
                "description": "Get the latest classic videos (paginated).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "page": { "type": "integer", "description": "Defaults to 0" }
                    }
                }
            },
            {
                "name": "get_related",
                "description": "Get related videos for a given DumpertID.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dumpert_id": { "type": "string" }
                    },
                    "required": ["dumpert_id"]
                }
            },
            {
                "name": "rate",
                "description": "Rate a video up or down.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dumpert_id": { "type": "string" },
                        "up_down": { "type": "string", "enum": ["up", "down"] }
                    },
                    "required": ["dumpert_id", "up_down"]
                }
            },
            {
                "name": "get_info",
                "description": "Get info for a video by DumpertID.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dumpert_id": { "type": "string" }
                    },
                    "required": ["dumpert_id"]
                }
            },
            {
                "name": "search",
                "description": "Search for videos by string (paginated).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "search_string": { "type": "string" },
                        "page": { "type": "integer" }
                    },
                    "required": ["search_string", "page"]
                }
            },
            {
                "name": "get_dumpert_tv",
                "description": "Get the latest Dumpert TV videos.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "get_hotshiz",
                "description": "Get the latest trending (hotshiz) videos.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "get_comments_for_article",
                "description": "Get all comments for an article (DumpertID).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "dumpert_id": { "type": "string", "description": "Id of the form <articleId>_<subId>" }
                    },
                    "required": ["dumpert_id"]
                }
            },
            {
                "name": "get_comment_by_id",
                "description": "Get a comment by CommentID.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "comment_id": { "type": "string" }
                    },
                    "required": ["comment_id"]
                }
            },
            {
                "name": "get_soundboard",
                "description": "Get all soundboard data.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "get_videomixer",
                "description": "Get all videomixer assets.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "give_comment_kudos",
                "description": "Give kudos to a comment by CommentID.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "comment_id": { "type": "integer" }
                    },
                    "required": ["comment_id"]
                }
            },
            {
                "name": "downvote_comment",
                "description": "Downvote a comment by CommentID.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "comment_id": { "type": "integer" }
                    },
                    "required": ["comment_id"]
                }
            }
        ]
    })
}

pub async fn call_tool(
    client: &DumpertClient,
    params: Option<Value>,
) -> Result<Value, JsonRpcError> {
    let params = params.ok_or_else(|| invalid_params("Missing params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid_params("Missing tool name"))?;

    let default_args = json!({});
    let args = params.get("arguments").unwrap_or(&default_args);

    match name {
        "get_top_of_the_day" => text_result(&client.top_of_day().await),
        "get_top_of_the_week" => {
            let year_week = required_str(args, "year_week")?;
            text_result(&client.top_of_week(year_week).await)
        }
        "get_top_of_the_month" => {
            let year_month = required_str(args, "year_month")?;
            text_result(&client.top_of_month(year_month).await)
        }
        "get_latest" => {
            let page = required_u32(args, "page")?;
            text_result(&client.latest(page).await)
        }
        "get_classics" => {
            let page = optional_u32(args, "page", 0);
            text_result(&client.classics(page).await)
        }
        "get_related" => {
            let dumpert_id = required_str(args, "dumpert_id")?;
            text_result(&client.related(dumpert_id).await)
        }
        "rate" => {
            let dumpert_id = required_str(args, "dumpert_id")?;
            let direction: RateDirection = required_str(args, "up_down")?
                .parse()
                .map_err(invalid_argument)?;
            text_result(&client.rate(dumpert_id, direction).await)
        }
        "get_info" => {
            let dumpert_id = required_str(args, "dumpert_id")?;
            text_result(&client.info(dumpert_id).await)
        }
        "search" => {
            let search_string = required_str(args, "search_string")?;
            let page = required_u32(args, "page")?;
            text_result(&client.search(search_string, page).await)
        }
        "get_dumpert_tv" => text_result(&client.dumpert_tv().await),
        "get_hotshiz" => text_result(&client.hotshiz().await),
        "get_comments_for_article" => {
            let dumpert_id = required_str(args, "dumpert_id")?;
            let comments = client
                .comments_for_article(dumpert_id)
                .await
                .map_err(invalid_argument)?;
            text_result(&comments)
        }
        "get_comment_by_id" => {
            let comment_id = required_str(args, "comment_id")?;
            text_result(&client.comment_by_id(comment_id).await)
        }
        "get_soundboard" => text_result(&client.soundboard().await),
        "get_videomixer" => text_result(&client.videomixer().await),
        "give_comment_kudos" => {
            let comment_id = required_i64(args, "comment_id")?;
            text_result(&client.comment_kudos(comment_id).await)
        }
        "downvote_comment" => {
            let comment_id = required_i64(args, "comment_id")?;
            text_result(&client.comment_downvote(comment_id).await)
        }
        _ => Err(JsonRpcError {
            code: -32601,
            message: format!("Tool {} not found", name),
            data: None,
        }),
    }
}

/// Wraps a serialized domain value as MCP text content.
fn text_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    let text = serde_json::to_string(value).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization failed: {}", e),
        data: None,
    })?;
    Ok(json!({ "content": [{ "type": "text", "text": text }] }))
}

fn invalid_params(message: &str) -> JsonRpcError {
    JsonRpcError {
        code: -32602,
        message: message.to_string(),
        data: None,
    }
}

fn invalid_argument(error: DumpertError) -> JsonRpcError {
    JsonRpcError {
        code: -32602,
        message: error.to_string(),
        data: None,
    }
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid_params(&format!("Missing {}", key)))
}

fn required_u32(args: &Value, key: &str) -> Result<u32, JsonRpcError> {
    args.get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as u32)
        .ok_or_else(|| invalid_params(&format!("Missing {}", key)))
}

fn required_i64(args: &Value, key: &str) -> Result<i64, JsonRpcError> {
    args.get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| invalid_params(&format!("Missing {}", key)))
}

fn optional_u32(args: &Value, key: &str, default: u32) -> u32 {
    args.get(key).and_then(|v| v.as_u64()).map(|v| v as u32).unwrap_or(default)
}
