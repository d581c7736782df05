use dumpert_mcp::domain::{decode, decode_str, Item, ListingResponse, Media, Variant};
use serde_json::json;

#[test]
fn test_decode_listing_with_items() {
    let body = json!({
        "items": [
            {
                "id": "100124857_51862663",
                "title": "Test Video",
                "description": "Test Description",
                "date": "2025-01-01",
                "thumbnail": "https://example.com/thumb.jpg",
                "media_type": "video",
                "media": [
                    {
                        "description": "d",
                        "duration": 30,
                        "mediatype": "VIDEO",
                        "variants": [
                            { "uri": "https://example.com/video.mp4", "version": "720p" }
                        ]
                    }
                ]
            }
        ]
    });

    let listing: ListingResponse = decode(body).unwrap();
    assert_eq!(listing.items.len(), 1);

    let item = &listing.items[0];
    assert_eq!(item.id, "100124857_51862663");
    assert_eq!(item.title, "Test Video");
    assert_eq!(item.description, "Test Description");
    assert_eq!(item.date, "2025-01-01");
    assert_eq!(item.thumbnail, "https://example.com/thumb.jpg");
    assert_eq!(item.media_type, "video");
    assert_eq!(item.media.len(), 1);
    assert_eq!(item.media[0].description, "d");
    assert_eq!(item.media[0].duration, 30);
    assert_eq!(item.media[0].media_type, "VIDEO");
    assert_eq!(item.media[0].variants.len(), 1);
    assert_eq!(item.media[0].variants[0].uri, "https://example.com/video.mp4");
    assert_eq!(item.media[0].variants[0].version, "720p");
}

#[test]
fn test_decode_listing_scenario_minimal_media() {
    // Items routinely arrive with only a subset of the documented fields.
    let raw = r#"{"items":[{"id":"100124857_51862663","title":"Test Video","media":[{"description":"d","duration":30,"variants":[]}]}]}"#;

    let listing: ListingResponse = decode_str(raw).unwrap();
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].id, "100124857_51862663");
    assert_eq!(listing.items[0].media[0].duration, 30);
    assert_eq!(listing.items[0].media[0].variants, vec![]);
    assert_eq!(listing.items[0].description, "");
    assert_eq!(listing.items[0].thumbnail, "");
}

#[test]
fn test_decode_listing_case_insensitive_keys() {
    let body = json!({
        "Items": [
            {
                "ID": "100124857_51862663",
                "TITLE": "Test Video",
                "Media_Type": "video",
                "MEDIA": [
                    { "Description": "d", "DURATION": 30, "MediaType": "VIDEO", "Variants": [] }
                ]
            }
        ]
    });

    let listing: ListingResponse = decode(body).unwrap();
    assert_eq!(listing.items[0].id, "100124857_51862663");
    assert_eq!(listing.items[0].title, "Test Video");
    assert_eq!(listing.items[0].media_type, "video");
    assert_eq!(listing.items[0].media[0].duration, 30);
    assert_eq!(listing.items[0].media[0].media_type, "VIDEO");
}

#[test]
fn test_decode_empty_object_yields_empty_listing() {
    let listing: ListingResponse = decode(json!({})).unwrap();
    assert!(listing.items.is_empty());
}

#[test]
fn test_decode_ignores_envelope_extras() {
    let body = json!({
        "success": true,
        "gentime": 0.0123,
        "stats": { "views": 1000 },
        "tags": "cats dogs",
        "nsfw": false,
        "resolutions": ["720p", "1080p"],
        "items": []
    });

    let listing: ListingResponse = decode(body).unwrap();
    assert!(listing.items.is_empty());
}

#[test]
fn test_decode_rejects_mistyped_items_field() {
    assert!(decode::<ListingResponse>(json!({"items": 42})).is_err());
    assert!(decode::<ListingResponse>(json!({"items": [{"id": 42}]})).is_err());
}

#[test]
fn test_listing_round_trip() {
    let item = Item {
        id: "100124857_51862663".to_string(),
        title: "Round Trip".to_string(),
        description: "desc".to_string(),
        date: "2025-01-01T10:00:00+01:00".to_string(),
        thumbnail: "https://example.com/t.jpg".to_string(),
        media_type: "video".to_string(),
        media: vec![Media {
            description: "stream".to_string(),
            duration: 92,
            media_type: "VIDEO".to_string(),
            variants: vec![Variant {
                uri: "https://media.example.com/v.mp4".to_string(),
                version: "tablet".to_string(),
            }],
        }],
    };

    let value = serde_json::to_value(&item).unwrap();
    // The stream-level media type keeps its upstream spelling.
    assert!(value.get("media").unwrap()[0].get("mediatype").is_some());

    let decoded: Item = decode(value).unwrap();
    assert_eq!(decoded, item);
}
