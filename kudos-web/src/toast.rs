//! Transient user-visible notices, as an explicit pub/sub service: views
//! subscribe for the duration of their lifetime, anything may publish.
//! Process-wide because toasts outlive the view that triggered them.

use std::cell::RefCell;

use yew::Callback;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Callback<Toast>)>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry {
        next_id: 0,
        listeners: Vec::new(),
    });
}

/// Unsubscribes on drop
pub struct ToastHandle(u64);

impl Drop for ToastHandle {
    fn drop(&mut self) {
        let id = self.0;
        REGISTRY.with(|r| r.borrow_mut().listeners.retain(|(i, _)| *i != id));
    }
}

pub fn subscribe(listener: Callback<Toast>) -> ToastHandle {
    REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        let id = r.next_id;
        r.next_id += 1;
        r.listeners.push((id, listener));
        ToastHandle(id)
    })
}

pub fn publish(toast: Toast) {
    // Listeners may subscribe/unsubscribe from within emit, so iterate a copy
    let listeners = REGISTRY.with(|r| r.borrow().listeners.clone());
    if listeners.is_empty() {
        tracing::warn!(?toast, "toast published with nobody listening");
    }
    for (_, listener) in listeners {
        listener.emit(toast.clone());
    }
}

pub fn info(message: impl Into<String>) {
    publish(Toast {
        level: ToastLevel::Info,
        message: message.into(),
    });
}

pub fn error(message: impl Into<String>) {
    publish(Toast {
        level: ToastLevel::Error,
        message: message.into(),
    });
}
