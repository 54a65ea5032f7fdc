mod app;
pub use app::{App, AppMsg, FieldId};

mod comment_composer;
pub use comment_composer::CommentComposer;

mod comment_thread;
pub use comment_thread::CommentThread;

mod feed_view;
pub use feed_view::FeedView;

mod login;
pub use login::Login;

mod mention_popup;
pub use mention_popup::MentionPopupView;

mod mention_text;
pub use mention_text::MentionText;

mod notification_badge;
pub use notification_badge::NotificationBadge;

mod shoutout_card;
pub use shoutout_card::ShoutoutCard;

mod toast_list;
pub use toast_list::ToastList;
