mod composer;
pub use composer::{Composer, ComposerKey, Key, KeyOutcome};

mod feed;
pub use feed::FeedDump;

mod mention;
pub use mention::{candidates, detect, insert, MentionSpan};

mod popup;
pub use popup::MentionPopup;

mod render;
pub use render::{split_mentions, Segment};

mod thread;
pub use thread::{build_forest, CommentNode};

pub mod api {
    pub use kudos_api::*;
}
