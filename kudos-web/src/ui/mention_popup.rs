use kudos_client::api::{User, UserId};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct MentionPopupViewProps {
    pub candidates: Vec<User>,
    pub highlighted: usize,
    pub on_choose: Callback<UserId>,
}

#[function_component(MentionPopupView)]
pub fn mention_popup_view(p: &MentionPopupViewProps) -> Html {
    html! {
        <ul class="mention-popup list-group position-absolute">
            { for p.candidates.iter().enumerate().map(|(i, user)| {
                let class = if i == p.highlighted {
                    "list-group-item active"
                } else {
                    "list-group-item"
                };
                // mousedown, so the choice lands before the textarea blurs
                let onmousedown = {
                    let id = user.id;
                    p.on_choose.reform(move |e: web_sys::MouseEvent| {
                        e.prevent_default();
                        id
                    })
                };
                html! {
                    <li { class } { onmousedown } key={ user.id.0 }>
                        { for user.avatar_url.as_ref().map(|url| html! {
                            <img class="avatar" src={ url.clone() } />
                        }) }
                        <span class="name">{ &user.full_name }</span>
                        <span class="email text-muted">{ &user.email }</span>
                    </li>
                }
            }) }
        </ul>
    }
}
