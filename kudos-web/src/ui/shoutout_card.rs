use std::{collections::HashMap, rc::Rc, sync::Arc};

use kudos_client::{
    api::{ReactionKind, Shoutout, ShoutoutId, User, UserId},
    build_forest, Composer, ComposerKey, Key,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct ShoutoutCardProps {
    pub shoutout: Arc<Shoutout>,
    pub me: UserId,
    pub names: Rc<Vec<String>>,
    pub roster: Arc<Vec<User>>,
    pub composers: Rc<HashMap<ui::FieldId, Composer>>,
    pub on_text: Callback<(ui::FieldId, String, usize)>,
    pub on_key: Callback<(ui::FieldId, Key)>,
    pub on_choose: Callback<(ui::FieldId, UserId)>,
    pub on_submit: Callback<ui::FieldId>,
    pub on_toggle_reply: Callback<ComposerKey>,
    pub on_react: Callback<(ShoutoutId, ReactionKind)>,
}

fn reaction_emoji(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "\u{1F44D}",
        ReactionKind::Clap => "\u{1F44F}",
        ReactionKind::Star => "\u{2B50}",
    }
}

#[function_component(ShoutoutCard)]
pub fn shoutout_card(p: &ShoutoutCardProps) -> Html {
    let s = &p.shoutout;
    let my_reaction = s.reactions.iter().find(|r| r.user.id == p.me).map(|r| r.kind);
    let reaction_bar = [ReactionKind::Like, ReactionKind::Clap, ReactionKind::Star]
        .into_iter()
        .map(|kind| {
            let count = s.reactions.iter().filter(|r| r.kind == kind).count();
            let onclick = {
                let id = s.id;
                p.on_react.reform(move |_| (id, kind))
            };
            let class = if my_reaction == Some(kind) {
                "btn btn-sm btn-primary reaction active"
            } else {
                "btn btn-sm btn-outline-secondary reaction"
            };
            html! {
                <button { class } { onclick }>
                    { reaction_emoji(kind) }
                    { for (count > 0).then(|| html! { <span class="count">{ count }</span> }) }
                </button>
            }
        });
    let recipients = s
        .recipients
        .iter()
        .map(|u| u.full_name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let comment_field = ui::FieldId::Comment(ComposerKey::Shoutout(s.id));
    let comment_composer = p
        .composers
        .get(&comment_field)
        .cloned()
        .unwrap_or_default();
    html! {
        <article class="shoutout card mb-3">
            <div class="card-body">
                <div class="d-flex justify-content-between">
                    <span class="author">
                        { &s.created_by.full_name }
                        { " \u{2192} " }
                        { recipients }
                    </span>
                    <span class="text-muted">{ util::format_time(s.created_at) }</span>
                </div>
                <p class="content">
                    <ui::MentionText text={ s.content.clone() } names={ p.names.clone() } />
                </p>
                { for (!s.attachments.is_empty()).then(|| html! {
                    <ul class="attachments">
                        { for s.attachments.iter().map(|a| html! {
                            <li><a href={ a.file_url.clone() }>{ &a.file_name }</a></li>
                        }) }
                    </ul>
                }) }
                <div class="reactions mb-2">
                    { for reaction_bar }
                </div>
                <ui::CommentThread
                    shoutout_id={ s.id }
                    nodes={ Rc::new(build_forest(&s.comments)) }
                    names={ p.names.clone() }
                    roster={ p.roster.clone() }
                    composers={ p.composers.clone() }
                    on_text={ p.on_text.clone() }
                    on_key={ p.on_key.clone() }
                    on_choose={ p.on_choose.clone() }
                    on_submit={ p.on_submit.clone() }
                    on_toggle_reply={ p.on_toggle_reply.clone() }
                />
                <ui::CommentComposer
                    field={ comment_field }
                    composer={ comment_composer }
                    roster={ p.roster.clone() }
                    placeholder="Add a comment..."
                    submit_label="Comment"
                    on_text={ p.on_text.clone() }
                    on_key={ p.on_key.clone() }
                    on_choose={ p.on_choose.clone() }
                    on_submit={ p.on_submit.clone() }
                />
            </div>
        </article>
    }
}
