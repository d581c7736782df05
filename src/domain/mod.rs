// Domain layer: the entity records mirroring upstream JSON payloads and the
// rule for decoding arbitrary JSON into them.

pub mod comments;
pub mod decode;
pub mod listing;
pub mod soundboard;

pub use comments::{
    Author, CommentData, CommentNode, CommentaryEndBan, CommentsResponse, FlatComment,
    NestedComment, SingleCommentRoot, Summary,
};
pub use decode::{decode, decode_str};
pub use listing::{Item, ListingResponse, Media, Variant};
pub use soundboard::SoundboardItem;
