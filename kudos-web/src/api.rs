use futures::{channel::oneshot, pin_mut, select, FutureExt};
use kudos_client::{
    api::{
        self, Comment, Credentials, NewComment, NewReaction, NewShoutout, NotificationCount,
        Shoutout, ShoutoutId, TokenPair, User,
    },
    FeedDump,
};

use crate::{ui, LoginInfo};

// Unread notification counter refresh period
const POLL_INTERVAL_SECS: i64 = 30;

pub async fn auth(host: String, credentials: Credentials) -> anyhow::Result<TokenPair> {
    let resp = crate::CLIENT
        .post(format!("{}/auth/login", host))
        .json(&credentials)
        .send()
        .await?;
    decode(resp).await
}

/// Turns a response into the expected payload, decoding the server's error
/// envelope on non-success statuses
async fn decode<R>(resp: reqwest::Response) -> anyhow::Result<R>
where
    R: for<'de> serde::Deserialize<'de>,
{
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }
    let body = resp.bytes().await?;
    match api::Error::parse(&body) {
        Ok(e) => Err(e.into()),
        Err(_) => Err(anyhow::anyhow!("request failed with status {}", status)),
    }
}

fn get(login: &LoginInfo, path: &str) -> reqwest::RequestBuilder {
    crate::CLIENT
        .get(format!("{}{}", login.host, path))
        .bearer_auth(&login.token)
}

fn post(login: &LoginInfo, path: &str) -> reqwest::RequestBuilder {
    crate::CLIENT
        .post(format!("{}{}", login.host, path))
        .bearer_auth(&login.token)
}

pub async fn fetch_me(login: &LoginInfo) -> anyhow::Result<User> {
    decode(get(login, "/users/me").send().await?).await
}

pub async fn fetch_roster(login: &LoginInfo) -> anyhow::Result<Vec<User>> {
    decode(get(login, "/users/lookup").send().await?).await
}

pub async fn fetch_shoutouts(login: &LoginInfo) -> anyhow::Result<Vec<Shoutout>> {
    decode(get(login, "/shoutouts/").send().await?).await
}

pub async fn fetch_comments(login: &LoginInfo, id: ShoutoutId) -> anyhow::Result<Vec<Comment>> {
    decode(get(login, &format!("/shoutouts/{}/comments", id.0)).send().await?).await
}

pub async fn post_comment(
    login: &LoginInfo,
    id: ShoutoutId,
    comment: NewComment,
) -> anyhow::Result<Comment> {
    let resp = post(login, &format!("/shoutouts/{}/comment", id.0))
        .json(&comment)
        .send()
        .await?;
    decode(resp).await
}

pub async fn post_shoutout(login: &LoginInfo, shoutout: NewShoutout) -> anyhow::Result<Shoutout> {
    let resp = post(login, "/shoutouts/").json(&shoutout).send().await?;
    decode(resp).await
}

/// The reaction endpoint answers with either the new reaction or a removal
/// notice depending on the previous state; the client only cares that the
/// toggle was accepted and reconciles from the next feed reload.
pub async fn post_reaction(
    login: &LoginInfo,
    id: ShoutoutId,
    reaction: NewReaction,
) -> anyhow::Result<()> {
    let resp = post(login, &format!("/shoutouts/{}/react", id.0))
        .json(&reaction)
        .send()
        .await?;
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let body = resp.bytes().await?;
    match api::Error::parse(&body) {
        Ok(e) => Err(e.into()),
        Err(_) => Err(anyhow::anyhow!("request failed with status {}", status)),
    }
}

pub async fn fetch_notification_count(login: &LoginInfo) -> anyhow::Result<NotificationCount> {
    decode(get(login, "/notifications/count").send().await?).await
}

/// Everything the feed view needs for a session, fetched in one go
pub async fn fetch_feed_dump(login: &LoginInfo) -> anyhow::Result<FeedDump> {
    let mut dump = FeedDump {
        me: fetch_me(login).await?,
        ..FeedDump::stub()
    };
    dump.set_roster(fetch_roster(login).await?);
    dump.set_shoutouts(fetch_shoutouts(login).await?);
    Ok(dump)
}

pub async fn sleep_for(d: chrono::Duration) {
    wasm_timer::Delay::new(d.to_std().unwrap_or(std::time::Duration::from_secs(0)))
        .await
        .expect("failed sleeping")
}

/// Periodically refreshes the unread notification badge until the returned
/// cancellation channel is dropped
pub async fn start_notification_poll(
    login: LoginInfo,
    scope: yew::html::Scope<ui::App>,
    mut cancel: oneshot::Sender<()>,
) {
    let mut cancellation = cancel.cancellation().fuse();
    loop {
        {
            let delay = sleep_for(chrono::Duration::seconds(POLL_INTERVAL_SECS)).fuse();
            pin_mut!(delay);
            select! {
                _ = cancellation => {
                    tracing::info!("stopped notification polling");
                    return;
                }
                _ = delay => (),
            }
        }
        match fetch_notification_count(&login).await {
            Ok(count) => scope.send_message(ui::AppMsg::NotificationCount(count.unread_count)),
            Err(e) => tracing::warn!("failed fetching notification count: {e:?}"),
        }
    }
}
