use crate::shared::dialog::{cleanup, use_dialog, DialogId, EXIT_DELAY};
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay, surface and header shared by every dialog.
///
/// Renders while `id` is the active dialog and for [`EXIT_DELAY`] after it stops
/// being active (with `data-state="closed"`), so the payload-backed content stays
/// on screen during the exit transition.
#[component]
pub fn DialogFrame(
    /// Dialog this frame belongs to
    id: DialogId,
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    description: Option<String>,
    /// Called on Escape, overlay click or the close button (default: close the active dialog)
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Extra class for the surface (`div.dialog`)
    #[prop(optional)]
    class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog = use_dialog();
    let on_close = on_close.unwrap_or_else(|| Callback::new(move |_| dialog.close()));
    let is_open = Memo::new(move |_| dialog.is_active(id));
    let mounted = RwSignal::new(false);
    let overlay_mouse_down = RwSignal::new(false);

    Effect::new(move |was_open: Option<bool>| {
        let open = is_open.get();
        if open {
            mounted.set(true);
            cleanup::lock_body_scroll();
        } else if was_open == Some(true) {
            cleanup::unlock_body_scroll();
            spawn_local(async move {
                TimeoutFuture::new(EXIT_DELAY.as_millis() as u32).await;
                if is_open.try_get_untracked() == Some(false) {
                    let _ = mounted.try_set(false);
                }
            });
        }
        open
    });

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: the overlay may be removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let state = move || if is_open.get() { "open" } else { "closed" };
    let surface_class = match class {
        Some(cls) => format!("dialog {cls}"),
        None => "dialog".to_string(),
    };

    view! {
        <Show when=move || mounted.get()>
            <div class="dialog-portal" data-dialog-portal="" data-dialog=id.as_str()>
                <div
                    class="dialog-backdrop"
                    data-state=state
                    on:mousedown=handle_overlay_mouse_down
                    on:click=handle_overlay_click
                >
                    <div
                        class=surface_class.clone()
                        role="dialog"
                        aria-modal="true"
                        data-state=state
                        on:click=stop_propagation
                    >
                        <div class="dialog-header">
                            <div class="dialog-heading">
                                <h2 class="dialog-title">{move || title.get()}</h2>
                                {description
                                    .clone()
                                    .map(|text| view! { <p class="dialog-description">{text}</p> })}
                            </div>
                            <button
                                class="button button--icon dialog__close"
                                aria-label="Tutup"
                                on:click=move |_| on_close.run(())
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <div class="dialog-body">{children()}</div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
