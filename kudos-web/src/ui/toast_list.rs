use yew::prelude::*;

use crate::{api, toast};

const TOAST_LIFETIME_SECS: i64 = 5;

pub enum ToastListMsg {
    Published(toast::Toast),
    Expired(u64),
    Dismissed(u64),
}

/// Displays every toast published anywhere in the app, then drops each one
/// after a few seconds (or on click).
pub struct ToastList {
    next_id: u64,
    toasts: Vec<(u64, toast::Toast)>,
    // Kept alive for the component's lifetime, unsubscribes on drop
    _subscription: toast::ToastHandle,
}

impl Component for ToastList {
    type Message = ToastListMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ToastList {
            next_id: 0,
            toasts: Vec::new(),
            _subscription: toast::subscribe(ctx.link().callback(ToastListMsg::Published)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ToastListMsg::Published(toast) => {
                let id = self.next_id;
                self.next_id += 1;
                self.toasts.push((id, toast));
                ctx.link().send_future(async move {
                    api::sleep_for(chrono::Duration::seconds(TOAST_LIFETIME_SECS)).await;
                    ToastListMsg::Expired(id)
                });
            }
            ToastListMsg::Expired(id) | ToastListMsg::Dismissed(id) => {
                self.toasts.retain(|(i, _)| *i != id);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="toast-list position-fixed bottom-0 end-0 p-3">
                { for self.toasts.iter().map(|(id, toast)| {
                    let class = match toast.level {
                        toast::ToastLevel::Info => "toast-item alert alert-info",
                        toast::ToastLevel::Error => "toast-item alert alert-danger",
                    };
                    let onclick = {
                        let id = *id;
                        ctx.link().callback(move |_| ToastListMsg::Dismissed(id))
                    };
                    html! {
                        <div { class } { onclick } key={ *id }>
                            { &toast.message }
                        </div>
                    }
                }) }
            </div>
        }
    }
}
