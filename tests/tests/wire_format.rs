//! Checks that a feed payload shaped exactly like the server's JSON drives
//! the whole client pipeline: deserialization, thread building and mention
//! rendering.

use kudos_api::{CommentId, ReactionKind, Shoutout, UserId};
use kudos_client::{build_forest, split_mentions, Segment};

fn server_payload() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "content": "Huge thanks to @Alice Chen for the launch!",
        "created_at": "2024-03-01T12:00:00Z",
        "created_by": {
            "id": 2,
            "email": "bob@example.com",
            "full_name": "Bob Duarte",
            "is_admin": false,
            "created_at": "2023-01-01T00:00:00Z"
        },
        "recipients": [{
            "id": 1,
            "email": "alice@example.com",
            "full_name": "Alice Chen",
            "is_admin": false,
            "avatar_url": "https://avatars.example.com/alice.png",
            "department": {
                "id": 1,
                "name": "Engineering",
                "created_at": "2022-06-01T00:00:00Z"
            },
            "created_at": "2023-01-01T00:00:00Z"
        }],
        "reactions": [{
            "id": 4,
            "type": "clap",
            "user": {
                "id": 1,
                "email": "alice@example.com",
                "full_name": "Alice Chen",
                "is_admin": false,
                "created_at": "2023-01-01T00:00:00Z"
            },
            "created_at": "2024-03-01T13:00:00Z"
        }],
        "comments": [
            {
                "id": 10,
                "content": "Well deserved @Alice Chen!",
                "created_at": "2024-03-01T14:00:00Z",
                "user": {
                    "id": 3,
                    "email": "carol@example.com",
                    "full_name": "Carol Eriksen",
                    "is_admin": false,
                    "created_at": "2023-01-01T00:00:00Z"
                }
            },
            {
                "id": 11,
                "content": "Agreed!",
                "created_at": "2024-03-01T15:00:00Z",
                "user": {
                    "id": 1,
                    "email": "alice@example.com",
                    "full_name": "Alice Chen",
                    "is_admin": false,
                    "created_at": "2023-01-01T00:00:00Z"
                },
                "parent_id": 10
            }
        ]
    })
}

#[test]
fn server_json_flows_through_the_client() {
    let shoutout: Shoutout =
        serde_json::from_value(server_payload()).expect("deserializing the feed payload");

    assert_eq!(shoutout.created_by.id, UserId(2));
    assert_eq!(shoutout.reactions[0].kind, ReactionKind::Clap);
    // attachments are optional on the wire
    assert!(shoutout.attachments.is_empty());

    let forest = build_forest(&shoutout.comments);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].comment.id, CommentId(10));
    assert_eq!(forest[0].replies[0].comment.id, CommentId(11));

    let names = vec![String::from("Alice Chen"), String::from("Bob Duarte")];
    let segments = split_mentions(&shoutout.content, &names);
    assert!(segments.contains(&Segment::Mention(String::from("Alice Chen"))));
}

#[test]
fn new_reaction_serializes_with_the_type_tag() {
    let body = serde_json::to_value(kudos_api::NewReaction {
        kind: ReactionKind::Star,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "type": "star" }));
}

#[test]
fn new_comment_omits_a_missing_parent() {
    let body = serde_json::to_value(kudos_api::NewComment {
        content: String::from("nice"),
        parent_id: None,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "content": "nice" }));

    let reply = serde_json::to_value(kudos_api::NewComment {
        content: String::from("nice"),
        parent_id: Some(CommentId(10)),
    })
    .unwrap();
    assert_eq!(
        reply,
        serde_json::json!({ "content": "nice", "parent_id": 10 })
    );
}
