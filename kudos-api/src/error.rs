use anyhow::{anyhow, Context};
use serde_json::json;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Parent comment does not belong to this shout-out")]
    ParentMismatch,

    #[error("Invalid reaction type {0:?}")]
    InvalidReaction(String),

    #[error("Cannot report your own shout-out")]
    OwnShoutoutReport,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::EmptyContent => StatusCode::BAD_REQUEST,
            Error::ParentMismatch => StatusCode::BAD_REQUEST,
            Error::InvalidReaction(_) => StatusCode::BAD_REQUEST,
            Error::OwnShoutoutReport => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::NotFound(what) => json!({
                "message": "not found",
                "type": "not-found",
                "what": what,
            }),
            Error::EmptyContent => json!({
                "message": "content cannot be empty",
                "type": "empty-content",
            }),
            Error::ParentMismatch => json!({
                "message": "parent comment does not belong to this shout-out",
                "type": "parent-mismatch",
            }),
            Error::InvalidReaction(kind) => json!({
                "message": "invalid reaction type",
                "type": "invalid-reaction",
                "kind": kind,
            }),
            Error::OwnShoutoutReport => json!({
                "message": "cannot report your own shout-out",
                "type": "own-shoutout-report",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "not-found" => Error::NotFound(String::from(
                    data.get("what")
                        .and_then(|w| w.as_str())
                        .ok_or_else(|| anyhow!("not-found error without a subject"))?,
                )),
                "empty-content" => Error::EmptyContent,
                "parent-mismatch" => Error::ParentMismatch,
                "invalid-reaction" => Error::InvalidReaction(String::from(
                    data.get("kind")
                        .and_then(|k| k.as_str())
                        .ok_or_else(|| anyhow!("invalid-reaction error without a kind"))?,
                )),
                "own-shoutout-report" => Error::OwnShoutoutReport,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
