use std::{collections::HashMap, rc::Rc, sync::Arc};

use kudos_client::{
    api::{ShoutoutId, User, UserId},
    CommentNode, Composer, ComposerKey, Key,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    pub shoutout_id: ShoutoutId,
    pub nodes: Rc<Vec<CommentNode>>,
    pub names: Rc<Vec<String>>,
    pub roster: Arc<Vec<User>>,
    pub composers: Rc<HashMap<ui::FieldId, Composer>>,
    pub on_text: Callback<(ui::FieldId, String, usize)>,
    pub on_key: Callback<(ui::FieldId, Key)>,
    pub on_choose: Callback<(ui::FieldId, UserId)>,
    pub on_submit: Callback<ui::FieldId>,
    pub on_toggle_reply: Callback<ComposerKey>,
}

/// Renders a reply forest, recursing into `<div class="comment-replies">` for
/// each level of nesting. Depth is whatever the data says it is.
#[function_component(CommentThread)]
pub fn comment_thread(p: &CommentThreadProps) -> Html {
    p.nodes
        .iter()
        .map(|node| {
            let c = &node.comment;
            let reply_key = ComposerKey::Reply(p.shoutout_id, c.id);
            let reply_field = ui::FieldId::Comment(reply_key);
            let reply_composer = p.composers.get(&reply_field).cloned();
            let toggle_reply = p.on_toggle_reply.reform(move |_| reply_key);
            html! {
                <div class="comment" key={ c.id.0 }>
                    <div class="d-flex justify-content-between">
                        <span class="author">{ &c.user.full_name }</span>
                        <span class="text-muted">{ util::format_time(c.created_at) }</span>
                    </div>
                    <p class="content">
                        <ui::MentionText text={ c.content.clone() } names={ p.names.clone() } />
                    </p>
                    <button class="btn btn-link btn-sm" onclick={ toggle_reply }>
                        { if reply_composer.is_some() { "Cancel" } else { "Reply" } }
                    </button>
                    { for reply_composer.map(|composer| html! {
                        <ui::CommentComposer
                            field={ reply_field }
                            { composer }
                            roster={ p.roster.clone() }
                            placeholder="Write a reply..."
                            submit_label="Reply"
                            on_text={ p.on_text.clone() }
                            on_key={ p.on_key.clone() }
                            on_choose={ p.on_choose.clone() }
                            on_submit={ p.on_submit.clone() }
                        />
                    }) }
                    { for (!node.replies.is_empty()).then(|| html! {
                        <div class="comment-replies">
                            <CommentThread
                                shoutout_id={ p.shoutout_id }
                                nodes={ Rc::new(node.replies.clone()) }
                                names={ p.names.clone() }
                                roster={ p.roster.clone() }
                                composers={ p.composers.clone() }
                                on_text={ p.on_text.clone() }
                                on_key={ p.on_key.clone() }
                                on_choose={ p.on_choose.clone() }
                                on_submit={ p.on_submit.clone() }
                                on_toggle_reply={ p.on_toggle_reply.clone() }
                            />
                        </div>
                    }) }
                </div>
            }
        })
        .collect()
}
