pub type Time = chrono::DateTime<chrono::Utc>;

/// Identifier used by client-side placeholders before the server assigned one
pub const STUB_ID: i64 = -1;

mod auth;
pub use auth::{Credentials, TokenPair};

mod comment;
pub use comment::{Comment, CommentId, NewComment};

mod error;
pub use error::Error;

mod notification;
pub use notification::{Notification, NotificationCount, NotificationId};

mod shoutout;
pub use shoutout::{
    Attachment, AttachmentId, NewReaction, NewShoutout, Reaction, ReactionId, ReactionKind,
    Shoutout, ShoutoutId,
};

mod user;
pub use user::{Department, DepartmentId, User, UserId};
