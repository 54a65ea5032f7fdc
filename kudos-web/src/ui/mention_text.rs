use std::rc::Rc;

use kudos_client::{split_mentions, Segment};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct MentionTextProps {
    pub text: AttrValue,
    /// Display names known to this session; unknown names render as plain text
    pub names: Rc<Vec<String>>,
}

/// Renders stored text with `@Full Name` occurrences highlighted
#[function_component(MentionText)]
pub fn mention_text(p: &MentionTextProps) -> Html {
    split_mentions(&p.text, &p.names)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => html! { <span>{ text }</span> },
            Segment::Mention(name) => html! {
                <span class="mention">{ format!("@{}", name) }</span>
            },
        })
        .collect()
}
