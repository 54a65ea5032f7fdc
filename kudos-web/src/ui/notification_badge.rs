use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NotificationBadgeProps {
    pub unread: u64,
}

#[function_component(NotificationBadge)]
pub fn notification_badge(p: &NotificationBadgeProps) -> Html {
    html! {
        <span class="notification-badge" title="Unread notifications">
            { "\u{1F514}" }
            { for (p.unread > 0).then(|| html! {
                <span class="badge bg-danger">{ p.unread }</span>
            }) }
        </span>
    }
}
