use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal surface shared by the two comment wire shapes.
///
/// The platform serves comments from two hosts with incompatible payloads:
/// a flat shape that references its author by numeric id, and a nested-root
/// shape that embeds the author username and article metadata. They are kept
/// as distinct records ([`FlatComment`], [`NestedComment`]) rather than
/// merged, because the author representation differs semantically.
pub trait CommentNode {
    fn id(&self) -> i64;
    fn content(&self) -> &str;
    fn kudos_count(&self) -> i64;
    fn child_comments(&self) -> &[Self]
    where
        Self: Sized;
}

/// Comment as served by the flat comments endpoint; the author is a numeric
/// id resolved against the sibling `authors` list of [`CommentsResponse`].
///
/// `content` and `display_content` are the same value under two names,
/// populated from whichever the wire provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatCommentWire")]
pub struct FlatComment {
    pub id: i64,
    pub approved: bool,
    pub author: i64,
    pub content: String,
    pub display_content: String,
    pub creation_datetime: Option<DateTime<Utc>>,
    pub kudos_count: i64,
    pub parent_id: i64,
    pub reference_id: i64,
    pub report_count: u32,
    pub child_comments: Vec<FlatComment>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct FlatCommentWire {
    id: i64,
    approved: bool,
    author: i64,
    content: Option<String>,
    display_content: Option<String>,
    creation_datetime: Option<DateTime<Utc>>,
    kudos_count: i64,
    parent_id: i64,
    reference_id: i64,
    report_count: u32,
    child_comments: Vec<FlatComment>,
}

impl From<FlatCommentWire> for FlatComment {
    fn from(wire: FlatCommentWire) -> Self {
        let text = wire.display_content.or(wire.content).unwrap_or_default();
        Self {
            id: wire.id,
            approved: wire.approved,
            author: wire.author,
            content: text.clone(),
            display_content: text,
            creation_datetime: wire.creation_datetime,
            kudos_count: wire.kudos_count,
            parent_id: wire.parent_id,
            reference_id: wire.reference_id,
            report_count: wire.report_count,
            child_comments: wire.child_comments,
        }
    }
}

impl CommentNode for FlatComment {
    fn id(&self) -> i64 {
        self.id
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn kudos_count(&self) -> i64 {
        self.kudos_count
    }

    fn child_comments(&self) -> &[Self] {
        &self.child_comments
    }
}

/// Comment as served by the nested-root endpoint: author username and the
/// article it belongs to are embedded in each comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "NestedCommentWire")]
pub struct NestedComment {
    pub id: i64,
    pub approved: bool,
    pub article_id: i64,
    pub article_link: String,
    pub article_title: String,
    pub author_is_newbie: bool,
    pub author_username: String,
    pub banned: bool,
    pub content: String,
    pub display_content: String,
    pub creation_datetime: Option<DateTime<Utc>>,
    pub html_markup: String,
    pub is_author_premium_visible: bool,
    pub kudos_count: i64,
    pub parent_id: i64,
    pub reference_id: i64,
    pub report_count: u32,
    pub child_comments: Vec<NestedComment>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct NestedCommentWire {
    id: i64,
    approved: bool,
    article_id: i64,
    article_link: String,
    article_title: String,
    author_is_newbie: bool,
    author_username: String,
    banned: bool,
    content: Option<String>,
    display_content: Option<String>,
    creation_datetime: Option<DateTime<Utc>>,
    html_markup: String,
    is_author_premium_visible: bool,
    kudos_count: i64,
    parent_id: i64,
    reference_id: i64,
    report_count: u32,
    child_comments: Vec<NestedComment>,
}

impl From<NestedCommentWire> for NestedComment {
    fn from(wire: NestedCommentWire) -> Self {
        let text = wire.display_content.or(wire.content).unwrap_or_default();
        Self {
            id: wire.id,
            approved: wire.approved,
            article_id: wire.article_id,
            article_link: wire.article_link,
            article_title: wire.article_title,
            author_is_newbie: wire.author_is_newbie,
            author_username: wire.author_username,
            banned: wire.banned,
            content: text.clone(),
            display_content: text,
            creation_datetime: wire.creation_datetime,
            html_markup: wire.html_markup,
            is_author_premium_visible: wire.is_author_premium_visible,
            kudos_count: wire.kudos_count,
            parent_id: wire.parent_id,
            reference_id: wire.reference_id,
            report_count: wire.report_count,
            child_comments: wire.child_comments,
        }
    }
}

impl CommentNode for NestedComment {
    fn id(&self) -> i64 {
        self.id
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn kudos_count(&self) -> i64 {
        self.kudos_count
    }

    fn child_comments(&self) -> &[Self] {
        &self.child_comments
    }
}

/// A commenter profile, referenced from [`FlatComment::author`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub active: bool,
    pub newbie: bool,
    pub banned: bool,
    pub shadow_banned: bool,
    pub premium: bool,
    pub registered_at: Option<DateTime<Utc>>,
    pub age: u32,
    pub gender: String,
    pub commentary_state: String,
    pub commentary_end_ban_at: Option<CommentaryEndBan>,
}

// Served with capitalized keys (`Time`/`Valid`); key folding lowercases them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentaryEndBan {
    pub time: Option<DateTime<Utc>>,
    pub valid: bool,
}

/// Aggregate metadata for an article's comment thread. The field set differs
/// slightly per endpoint (some omit title/link, some add a rate-limit
/// string), so this is a superset record with optional members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub comment_count: u32,
    pub can_comment: bool,
    pub moderated_at: Option<DateTime<Utc>>,
    #[serde(rename = "get_rate_limit")]
    pub rate_limit: Option<String>,
}

/// Flat envelope of the comments-for-article endpoint: all comments plus the
/// author profiles they reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsResponse {
    pub authors: Vec<Author>,
    pub comments: Vec<FlatComment>,
    pub summary: Summary,
}

/// Nested-root envelope of the comment-by-id endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleCommentRoot {
    pub data: Option<CommentData>,
    pub status: String,
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentData {
    pub comment: NestedComment,
}
