use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);
/// Older toasts are dropped beyond this count
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
}

/// Ordered toast list, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: String, body: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            title,
            body,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Transient notifications; backend failures are reported here.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.show(ToastKind::Success, title.into(), non_empty(body.into()));
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.show(ToastKind::Error, title.into(), non_empty(body.into()));
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, title: String, body: Option<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, title, body));

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION.as_millis() as u32).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)")
}

/// Renders active toasts. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-viewport" aria-live="polite">
            <For
                each=move || svc.queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__icon">{icon(toast.kind.icon_name())}</span>
                            <div class="toast__content">
                                <div class="toast__title">{toast.title}</div>
                                {toast.body.map(|body| view! { <div class="toast__body">{body}</div> })}
                            </div>
                            <button class="button button--icon toast__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Berhasil".into(), None);
        let second = queue.push(ToastKind::Error, "Gagal".into(), Some("Network error".into()));

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_queue_drops_oldest_beyond_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            queue.push(ToastKind::Success, format!("Toast {}", i), None);
        }
        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].title, "Toast 2");
    }

    #[test]
    fn test_blank_body_is_omitted() {
        assert_eq!(non_empty("   ".into()), None);
        assert_eq!(non_empty("ok".into()), Some("ok".into()));
    }
}
