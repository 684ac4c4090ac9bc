//! Process-wide dialog coordinator.
//!
//! One dialog is active at a time. Triggers write the payload first and then
//! open (`set_data` + `open`, or [`DialogService::open_with`]); consumers render
//! only while their own [`DialogId`] is active.

pub mod cleanup;
pub mod coordinator;
pub mod machine;
pub mod payload;
pub mod scheduler;

pub use coordinator::{Coordinator, DialogTiming};
pub use machine::{DialogSnapshot, Phase};
pub use payload::{DeletePayload, DialogId, DialogPayload, FormPayload};
pub use scheduler::{BrowserScheduler, Scheduler, VirtualScheduler};

use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MutationObserver;

/// Lock held after every open/close, matches the exit animation
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);
/// How long a closed dialog frame stays mounted with `data-state="closed"`
pub const EXIT_DELAY: Duration = Duration::from_millis(200);
/// Idle time before leftover overlays are scrubbed
pub const CLEANUP_DELAY: Duration = Duration::from_millis(300);

/// Reactive handle to the coordinator, provided once at the app root.
#[derive(Clone, Copy)]
pub struct DialogService {
    coordinator: StoredValue<Coordinator<BrowserScheduler>, LocalStorage>,
    active: RwSignal<Option<DialogId>>,
    data: RwSignal<DialogPayload>,
    data_revision: RwSignal<u64>,
    is_transitioning: RwSignal<bool>,
}

impl DialogService {
    pub fn new() -> Self {
        let coordinator = Coordinator::new(BrowserScheduler);
        let svc = Self {
            coordinator: StoredValue::new_local(coordinator.clone()),
            active: RwSignal::new(None),
            data: RwSignal::new(DialogPayload::Empty),
            data_revision: RwSignal::new(0),
            is_transitioning: RwSignal::new(false),
        };

        // Data first, so a consumer that wakes up on `active` already sees its payload.
        coordinator.subscribe(move |snapshot| {
            if svc.data_revision.get_untracked() != snapshot.data_revision {
                svc.data.set(snapshot.data.clone());
                svc.data_revision.set(snapshot.data_revision);
            }
            if svc.is_transitioning.get_untracked() != snapshot.is_transitioning {
                svc.is_transitioning.set(snapshot.is_transitioning);
            }
            if svc.active.get_untracked() != snapshot.active {
                svc.active.set(snapshot.active);
            }
        });
        coordinator.on_idle(|| {
            cleanup::scrub_document();
        });

        svc
    }

    pub fn active(&self) -> Option<DialogId> {
        self.active.get()
    }

    pub fn is_active(&self, id: DialogId) -> bool {
        self.active.get() == Some(id)
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning.get()
    }

    pub fn data(&self) -> DialogPayload {
        self.data.get()
    }

    pub fn data_untracked(&self) -> DialogPayload {
        self.data.get_untracked()
    }

    pub fn open(&self, id: DialogId) {
        self.coordinator.with_value(|c| c.open(id));
    }

    pub fn close(&self) {
        self.coordinator.with_value(|c| c.close());
    }

    pub fn set_data(&self, data: DialogPayload) {
        self.coordinator.with_value(|c| c.set_data(data));
    }

    /// `set_data` followed by `open`
    pub fn open_with(&self, id: DialogId, data: DialogPayload) {
        self.set_data(data);
        self.open(id);
    }

    pub fn teardown(&self) {
        self.coordinator.try_with_value(|c| c.teardown());
    }
}

impl Default for DialogService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dialog() -> DialogService {
    use_context::<DialogService>()
        .expect("DialogService not provided in context (provide it in app root)")
}

/// Installs document-level cleanup: a scrub on mount, an orphan observer and a
/// scrub on `beforeunload`. Tears the coordinator down when unmounted.
///
/// Must be mounted exactly once.
#[component]
pub fn DialogHost() -> impl IntoView {
    let dialog = use_dialog();
    let observer: StoredValue<Option<MutationObserver>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        cleanup::scrub_document();
        observer.set_value(cleanup::observe_orphans());

        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            cleanup::scrub_document();
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
            // DialogHost is mounted once for the whole app lifetime; keep closure alive.
            closure.forget();
        }
    });

    on_cleanup(move || {
        observer.try_with_value(|o| {
            if let Some(o) = o {
                o.disconnect();
            }
        });
        dialog.teardown();
    });
}
