use std::sync::Arc;

use kudos_client::{
    api::{User, UserId},
    Composer, Key,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentComposerProps {
    pub field: ui::FieldId,
    /// Snapshot of this field's state; the source of truth lives in [`ui::App`]
    pub composer: Composer,
    pub roster: Arc<Vec<User>>,
    pub placeholder: AttrValue,
    pub submit_label: AttrValue,
    pub on_text: Callback<(ui::FieldId, String, usize)>,
    pub on_key: Callback<(ui::FieldId, Key)>,
    pub on_choose: Callback<(ui::FieldId, UserId)>,
    pub on_submit: Callback<ui::FieldId>,
}

/// One mention-aware text field. Key events are routed to the popup state
/// machine while it is open; a plain Enter (no Shift) submits instead of
/// inserting a newline.
#[function_component(CommentComposer)]
pub fn comment_composer(p: &CommentComposerProps) -> Html {
    let candidates = p.composer.candidates(&p.roster);

    let oninput = {
        let field = p.field;
        let on_text = p.on_text.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let value = input.value();
            // selection_start is in utf-16 units, the detector wants bytes
            let caret = input
                .selection_start()
                .ok()
                .flatten()
                .map(|n| util::utf16_to_byte_offset(&value, n as usize))
                .unwrap_or(value.len());
            on_text.emit((field, value, caret));
        })
    };

    let onkeydown = {
        let field = p.field;
        let popup_open = p.composer.popup().is_open();
        let has_candidates = !candidates.is_empty();
        let on_key = p.on_key.clone();
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: web_sys::KeyboardEvent| {
            match &*e.key() {
                "ArrowDown" if popup_open => {
                    e.prevent_default();
                    on_key.emit((field, Key::ArrowDown));
                }
                "ArrowUp" if popup_open => {
                    e.prevent_default();
                    on_key.emit((field, Key::ArrowUp));
                }
                "Escape" if popup_open => {
                    e.prevent_default();
                    on_key.emit((field, Key::Escape));
                }
                // Enter only belongs to the popup while something is
                // selectable; otherwise it submits the draft
                "Enter" if popup_open && has_candidates => {
                    e.prevent_default();
                    on_key.emit((field, Key::Enter));
                }
                "Enter" if !e.shift_key() => {
                    e.prevent_default();
                    on_submit.emit(field);
                }
                _ => (),
            }
        })
    };

    let popup = (p.composer.popup().is_open() && !candidates.is_empty()).then(|| {
        let highlighted = p.composer.popup().highlighted().unwrap_or(0);
        let on_choose = {
            let field = p.field;
            p.on_choose.reform(move |user| (field, user))
        };
        html! {
            <ui::MentionPopupView
                candidates={ candidates.clone() }
                { highlighted }
                { on_choose }
            />
        }
    });

    html! {
        <div class="composer position-relative">
            <textarea
                class="form-control"
                placeholder={ p.placeholder.clone() }
                value={ p.composer.text().to_string() }
                { oninput }
                { onkeydown }
            />
            { for popup }
            <button
                class="btn btn-primary btn-sm mt-1"
                disabled={ p.composer.is_in_flight() }
                onclick={ {
                    let field = p.field;
                    p.on_submit.reform(move |_| field)
                } }
            >
                { p.submit_label.clone() }
            </button>
        </div>
    }
}
