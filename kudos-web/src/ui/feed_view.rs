use std::{collections::HashMap, rc::Rc};

use kudos_client::{
    api::{ReactionKind, ShoutoutId, UserId},
    Composer, ComposerKey, FeedDump, Key,
};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct FeedViewProps {
    pub feed: Rc<FeedDump>,
    pub composers: Rc<HashMap<ui::FieldId, Composer>>,
    pub unread_notifications: u64,
    pub on_logout: Callback<()>,
    pub on_text: Callback<(ui::FieldId, String, usize)>,
    pub on_key: Callback<(ui::FieldId, Key)>,
    pub on_choose: Callback<(ui::FieldId, UserId)>,
    pub on_submit: Callback<ui::FieldId>,
    pub on_toggle_reply: Callback<ComposerKey>,
    pub on_react: Callback<(ShoutoutId, ReactionKind)>,
}

#[function_component(FeedView)]
pub fn feed_view(p: &FeedViewProps) -> Html {
    let names = Rc::new(p.feed.display_names());
    let new_shoutout = p
        .composers
        .get(&ui::FieldId::NewShoutout)
        .cloned()
        .unwrap_or_default();
    html! {
        <div class="container feed">
            <header class="d-flex align-items-center justify-content-between my-3">
                <h1>{ "Kudos" }</h1>
                <div class="d-flex align-items-center gap-2">
                    <ui::NotificationBadge unread={ p.unread_notifications } />
                    <span class="me-name">{ &p.feed.me.full_name }</span>
                    <button
                        class="btn btn-outline-secondary btn-sm"
                        onclick={ p.on_logout.reform(|_| ()) }
                    >
                        { "Logout" }
                    </button>
                </div>
            </header>
            <section class="new-shoutout card p-3 mb-4">
                <ui::CommentComposer
                    field={ ui::FieldId::NewShoutout }
                    composer={ new_shoutout }
                    roster={ p.feed.roster.clone() }
                    placeholder="Give a shout-out! Tag teammates with @"
                    submit_label="Send shout-out"
                    on_text={ p.on_text.clone() }
                    on_key={ p.on_key.clone() }
                    on_choose={ p.on_choose.clone() }
                    on_submit={ p.on_submit.clone() }
                />
            </section>
            { for p.feed.shoutouts.iter().map(|shoutout| html! {
                <ui::ShoutoutCard
                    key={ shoutout.id.0 }
                    shoutout={ shoutout.clone() }
                    me={ p.feed.me.id }
                    names={ names.clone() }
                    roster={ p.feed.roster.clone() }
                    composers={ p.composers.clone() }
                    on_text={ p.on_text.clone() }
                    on_key={ p.on_key.clone() }
                    on_choose={ p.on_choose.clone() }
                    on_submit={ p.on_submit.clone() }
                    on_toggle_reply={ p.on_toggle_reply.clone() }
                    on_react={ p.on_react.clone() }
                />
            }) }
        </div>
    }
}
