use std::{collections::HashMap, rc::Rc};

use futures::channel::oneshot;
use gloo_storage::{LocalStorage, Storage};
use kudos_client::{
    api::{
        Comment, Credentials, NewComment, NewReaction, NewShoutout, ReactionKind, Shoutout,
        ShoutoutId, UserId,
    },
    split_mentions, Composer, ComposerKey, FeedDump, Key, Segment,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, toast, ui, LoginInfo};

const KEY_LOGIN: &str = "login";

/// Identifies one text input field of the page. Every field gets its own
/// [`Composer`], so typing a mention in one popup never disturbs another.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldId {
    NewShoutout,
    Comment(ComposerKey),
}

pub enum AppMsg {
    LoginSubmitted(String, Credentials),
    LoggedIn(Option<LoginInfo>),
    UserLogout,

    ReceivedFeed(Option<FeedDump>),
    ReceivedShoutouts(Option<Vec<Shoutout>>),
    ReceivedComments(ShoutoutId, Option<Vec<Comment>>),
    NotificationCount(u64),

    ComposerText(FieldId, String, usize),
    ComposerKeyPress(FieldId, Key),
    ComposerChoose(FieldId, UserId),
    ToggleReply(ComposerKey),

    Submit(FieldId),
    CommentPosted(ComposerKey, bool),
    ShoutoutPosted(Option<Shoutout>),

    ReactionClicked(ShoutoutId, ReactionKind),
    ReactionAcked,
}

pub struct App {
    login: Option<LoginInfo>,
    last_host: Option<String>,
    feed: Rc<FeedDump>,
    initial_load_completed: bool,
    composers: Rc<HashMap<FieldId, Composer>>,
    unread_notifications: u64,
    poll_canceller: Option<oneshot::Receiver<()>>,
}

impl App {
    fn fetch_feed(&self, ctx: &Context<Self>) {
        let login = self
            .login
            .clone()
            .expect("called App::fetch_feed without a login set");
        ctx.link().send_future(async move {
            match api::fetch_feed_dump(&login).await {
                Ok(feed) => AppMsg::ReceivedFeed(Some(feed)),
                Err(e) => {
                    toast::error(format!("Failed loading the feed: {e}"));
                    AppMsg::ReceivedFeed(None)
                }
            }
        });
    }

    fn start_notification_poll(&mut self, ctx: &Context<Self>) {
        let login = self
            .login
            .clone()
            .expect("called App::start_notification_poll without a login set");
        let (cancel_sender, canceller) = oneshot::channel();
        spawn_local(api::start_notification_poll(
            login,
            ctx.link().clone(),
            cancel_sender,
        ));
        self.poll_canceller = Some(canceller);
    }

    /// Users tagged in a shout-out draft, in order of first appearance
    fn mentioned_recipients(&self, text: &str) -> Vec<UserId> {
        let names = self.feed.display_names();
        let mut recipients = Vec::new();
        for segment in split_mentions(text, &names) {
            if let Segment::Mention(name) = segment {
                if let Some(user) = self.feed.roster.iter().find(|u| u.full_name == name) {
                    if !recipients.contains(&user.id) {
                        recipients.push(user.id);
                    }
                }
            }
        }
        recipients
    }

    fn submit_comment(&mut self, ctx: &Context<Self>, key: ComposerKey) {
        let Some(login) = self.login.clone() else {
            return;
        };
        let composers = Rc::make_mut(&mut self.composers);
        let Some(composer) = composers.get_mut(&FieldId::Comment(key)) else {
            return;
        };
        if !composer.begin_submission() {
            return;
        }
        let comment = NewComment {
            content: composer.text().to_string(),
            parent_id: key.parent_id(),
        };
        ctx.link().send_future(async move {
            match api::post_comment(&login, key.shoutout_id(), comment).await {
                Ok(_) => AppMsg::CommentPosted(key, true),
                Err(e) => {
                    toast::error(format!("Failed posting the comment: {e}"));
                    AppMsg::CommentPosted(key, false)
                }
            }
        });
    }

    fn submit_shoutout(&mut self, ctx: &Context<Self>) {
        let Some(login) = self.login.clone() else {
            return;
        };
        let Some(text) = self
            .composers
            .get(&FieldId::NewShoutout)
            .map(|c| c.text().to_string())
        else {
            return;
        };
        let recipient_ids = self.mentioned_recipients(&text);
        if recipient_ids.is_empty() && !text.trim().is_empty() {
            toast::error("Tag at least one teammate with @ to send a shout-out");
            return;
        }
        let composers = Rc::make_mut(&mut self.composers);
        let composer = composers
            .get_mut(&FieldId::NewShoutout)
            .expect("checked just above");
        if !composer.begin_submission() {
            return;
        }
        let shoutout = NewShoutout {
            content: text,
            recipient_ids,
            department_id: None,
        };
        ctx.link().send_future(async move {
            match api::post_shoutout(&login, shoutout).await {
                Ok(shoutout) => AppMsg::ShoutoutPosted(Some(shoutout)),
                Err(e) => {
                    toast::error(format!("Failed sending the shout-out: {e}"));
                    AppMsg::ShoutoutPosted(None)
                }
            }
        });
    }

    /// Re-fetches the comment thread of one shout-out, typically after a
    /// comment of ours was accepted
    fn refresh_comments(&self, ctx: &Context<Self>, id: ShoutoutId) {
        let Some(login) = self.login.clone() else {
            return;
        };
        ctx.link().send_future(async move {
            match api::fetch_comments(&login, id).await {
                Ok(comments) => AppMsg::ReceivedComments(id, Some(comments)),
                Err(e) => {
                    toast::error(format!("Failed refreshing the comments: {e}"));
                    AppMsg::ReceivedComments(id, None)
                }
            }
        });
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let login: Option<LoginInfo> = LocalStorage::get(KEY_LOGIN).ok();
        let mut this = App {
            last_host: login.as_ref().map(|l| l.host.clone()),
            login,
            feed: Rc::new(FeedDump::stub()),
            initial_load_completed: false,
            composers: Rc::new(HashMap::new()),
            unread_notifications: 0,
            poll_canceller: None,
        };
        if this.login.is_some() {
            this.fetch_feed(ctx);
            this.start_notification_poll(ctx);
        }
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::LoginSubmitted(host, credentials) => {
                self.last_host = Some(host.clone());
                ctx.link().send_future(async move {
                    match api::auth(host.clone(), credentials).await {
                        Ok(tokens) => AppMsg::LoggedIn(Some(LoginInfo {
                            host,
                            token: tokens.access_token,
                        })),
                        Err(e) => {
                            toast::error(format!("Login failed: {e}"));
                            AppMsg::LoggedIn(None)
                        }
                    }
                });
            }
            AppMsg::LoggedIn(Some(login)) => {
                LocalStorage::set(KEY_LOGIN, &login)
                    .expect("failed saving login info to LocalStorage");
                self.login = Some(login);
                self.fetch_feed(ctx);
                self.start_notification_poll(ctx);
            }
            AppMsg::LoggedIn(None) => return false,
            AppMsg::UserLogout => {
                if let Some(canceller) = &mut self.poll_canceller {
                    canceller.close();
                }
                self.poll_canceller = None;
                LocalStorage::delete(KEY_LOGIN);
                self.login = None;
                self.feed = Rc::new(FeedDump::stub());
                self.initial_load_completed = false;
                self.composers = Rc::new(HashMap::new());
                self.unread_notifications = 0;
            }
            AppMsg::ReceivedFeed(Some(feed)) => {
                self.feed = Rc::new(feed);
                self.initial_load_completed = true;
            }
            AppMsg::ReceivedFeed(None) => return false,
            AppMsg::ReceivedShoutouts(Some(shoutouts)) => {
                Rc::make_mut(&mut self.feed).set_shoutouts(shoutouts);
            }
            AppMsg::ReceivedShoutouts(None) => return false,
            AppMsg::ReceivedComments(id, Some(comments)) => {
                return Rc::make_mut(&mut self.feed).set_comments(id, comments);
            }
            AppMsg::ReceivedComments(_, None) => return false,
            AppMsg::NotificationCount(count) => {
                if self.unread_notifications == count {
                    return false;
                }
                self.unread_notifications = count;
            }
            AppMsg::ComposerText(field, text, caret) => {
                Rc::make_mut(&mut self.composers)
                    .entry(field)
                    .or_default()
                    .set_text(text, caret);
            }
            AppMsg::ComposerKeyPress(field, key) => {
                let roster = self.feed.roster.clone();
                match Rc::make_mut(&mut self.composers).get_mut(&field) {
                    Some(composer) => {
                        composer.key(key, &roster);
                    }
                    None => tracing::warn!(?field, "key press for a field with no composer"),
                }
            }
            AppMsg::ComposerChoose(field, user) => {
                let Some(user) = self.feed.user(user).cloned() else {
                    return false;
                };
                match Rc::make_mut(&mut self.composers).get_mut(&field) {
                    Some(composer) => composer.choose(&user),
                    None => tracing::warn!(?field, "mention choice for a field with no composer"),
                }
            }
            AppMsg::ToggleReply(key) => {
                let composers = Rc::make_mut(&mut self.composers);
                let field = FieldId::Comment(key);
                if composers.remove(&field).is_none() {
                    composers.insert(field, Composer::new());
                }
            }
            AppMsg::Submit(FieldId::Comment(key)) => self.submit_comment(ctx, key),
            AppMsg::Submit(FieldId::NewShoutout) => self.submit_shoutout(ctx),
            AppMsg::CommentPosted(key, success) => {
                let composers = Rc::make_mut(&mut self.composers);
                let Some(composer) = composers.get_mut(&FieldId::Comment(key)) else {
                    tracing::debug!(?key, "submission finished for a removed field");
                    return false;
                };
                composer.submission_done(success);
                if success {
                    if matches!(key, ComposerKey::Reply(..)) {
                        composers.remove(&FieldId::Comment(key));
                    }
                    self.refresh_comments(ctx, key.shoutout_id());
                }
            }
            AppMsg::ShoutoutPosted(shoutout) => {
                let success = shoutout.is_some();
                if let Some(composer) =
                    Rc::make_mut(&mut self.composers).get_mut(&FieldId::NewShoutout)
                {
                    composer.submission_done(success);
                }
                if let Some(shoutout) = shoutout {
                    Rc::make_mut(&mut self.feed).upsert_shoutout(shoutout);
                    toast::info("Shout-out sent!");
                }
            }
            AppMsg::ReactionClicked(id, kind) => {
                let Some(login) = self.login.clone() else {
                    return false;
                };
                // Optimistic local toggle; a failure reloads the true state
                if !Rc::make_mut(&mut self.feed).toggle_reaction(id, kind, chrono::Utc::now()) {
                    return false;
                }
                ctx.link().send_future(async move {
                    match api::post_reaction(&login, id, NewReaction { kind }).await {
                        Ok(()) => AppMsg::ReactionAcked,
                        Err(e) => {
                            toast::error(format!("Reaction failed: {e}"));
                            match api::fetch_shoutouts(&login).await {
                                Ok(shoutouts) => AppMsg::ReceivedShoutouts(Some(shoutouts)),
                                Err(e) => {
                                    tracing::warn!("failed reloading the feed: {e:?}");
                                    AppMsg::ReceivedShoutouts(None)
                                }
                            }
                        }
                    }
                });
            }
            AppMsg::ReactionAcked => return false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.login.is_none() {
            return html! {
                <div class="container">
                    <ui::Login
                        last_host={ self.last_host.clone() }
                        on_submit={ ctx.link().callback(|(host, creds)| AppMsg::LoginSubmitted(host, creds)) }
                    />
                    <ui::ToastList />
                </div>
            };
        }
        if !self.initial_load_completed {
            return html! {<>
                <h1>{ "Loading..." }</h1>
                <ui::ToastList />
            </>};
        }
        html! {<>
            <ui::FeedView
                feed={ self.feed.clone() }
                composers={ self.composers.clone() }
                unread_notifications={ self.unread_notifications }
                on_logout={ ctx.link().callback(|()| AppMsg::UserLogout) }
                on_text={ ctx.link().callback(|(field, text, caret)| AppMsg::ComposerText(field, text, caret)) }
                on_key={ ctx.link().callback(|(field, key)| AppMsg::ComposerKeyPress(field, key)) }
                on_choose={ ctx.link().callback(|(field, user)| AppMsg::ComposerChoose(field, user)) }
                on_submit={ ctx.link().callback(AppMsg::Submit) }
                on_toggle_reply={ ctx.link().callback(AppMsg::ToggleReply) }
                on_react={ ctx.link().callback(|(id, kind)| AppMsg::ReactionClicked(id, kind)) }
            />
            <ui::ToastList />
        </>}
    }
}
