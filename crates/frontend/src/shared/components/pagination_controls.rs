use crate::shared::icons::icon;
use crate::shared::list_utils::{page_numbers, PageItem, PageWindow, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// Pager shown under every list table
///
/// Renders "Menampilkan x-y dari n item", the page size select and the
/// numbered page buttons. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current window over the filtered rows
    #[prop(into)]
    window: Signal<PageWindow>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let buttons = move || {
        let w = window.get();
        page_numbers(w.page, w.total_pages())
            .into_iter()
            .map(|item| match item {
                PageItem::Page(n) => view! {
                    <button
                        class="pagination-btn"
                        class:pagination-btn--active=move || window.get().page == n
                        on:click=move |_| on_page_change.run(n)
                    >
                        {n.to_string()}
                    </button>
                }
                .into_any(),
                PageItem::Ellipsis => view! { <span class="pagination-ellipsis">"..."</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let w = window.get();
                    format!("Menampilkan {}-{} dari {} item", w.start_item(), w.end_item(), w.total)
                }}
            </span>
            <label class="pagination-size">
                "Tampilkan "
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || window.get().page_size.to_string()
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || window.get().page_size == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                " per halaman"
            </label>
            <div class="pagination-pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(window.get().page.saturating_sub(1))
                    disabled=move || !window.get().has_previous()
                    title="Halaman sebelumnya"
                >
                    {icon("chevron-left")}
                </button>
                {buttons}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(window.get().page + 1)
                    disabled=move || !window.get().has_next()
                    title="Halaman berikutnya"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
