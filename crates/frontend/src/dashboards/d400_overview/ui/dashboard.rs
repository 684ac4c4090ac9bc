use crate::dashboards::d400_overview::api;
use crate::dashboards::d400_overview::summary::{summarize, OverviewSummary};
use crate::shared::components::status_badge::{rental_status_color, StatusBadge};
use crate::shared::components::table::format_rupiah;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::date_utils::{format_date_long, format_period, today};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (summary, set_summary) = signal(None::<OverviewSummary>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match api::load_overview().await {
            Ok(data) => {
                let today = today();
                set_summary.set(Some(summarize(
                    &data.items,
                    &data.rentals,
                    data.customers.len(),
                    &data.fines,
                    today,
                )));
            }
            Err(e) => {
                log::error!("overview failed to load: {}", e);
                set_error.set(Some(e.message));
            }
        }
        set_loading.set(false);
    });

    let stat = move |f: fn(&OverviewSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    let overdue_tone = Signal::derive(move || {
        match summary.with(|s| s.as_ref().map(|s| s.overdue_rentals)) {
            Some(n) if n > 0 => StatTone::Bad,
            _ => StatTone::Good,
        }
    });
    let fine_tone = Signal::derive(move || {
        match summary.with(|s| s.as_ref().map(|s| s.outstanding_fines)) {
            Some(amount) if amount > 0.0 => StatTone::Warning,
            _ => StatTone::Neutral,
        }
    });
    let overdue_subtitle = Signal::derive(move || {
        summary.with(|s| {
            s.as_ref()
                .filter(|s| s.overdue_rentals > 0)
                .map(|s| format!("{} terlambat", s.overdue_rentals))
        })
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard"
                subtitle=Signal::derive(move || Some(format!("Selamat datang, {}", auth_state.get().display_name())))
            />

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Total Barang"
                        icon_name="items"
                        value=stat(|s| s.total_items.to_string())
                    />
                    <StatCard
                        label="Penyewaan Aktif"
                        icon_name="rentals"
                        value=stat(|s| s.active_rentals.to_string())
                        tone=overdue_tone
                        subtitle=overdue_subtitle
                    />
                    <StatCard
                        label="Pelanggan"
                        icon_name="customers"
                        value=stat(|s| s.total_customers.to_string())
                    />
                    <StatCard
                        label="Denda Belum Dibayar"
                        icon_name="fines"
                        value=stat(|s| format_rupiah(s.outstanding_fines))
                        tone=fine_tone
                    />
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <Flex gap=FlexGap::Small style="align-items:center;justify-content:center;padding:48px;">
                            <Spinner />
                            <span>"Memuat data..."</span>
                        </Flex>
                    }
                >
                    <div class="dashboard-grid">
                        <section class="dashboard-panel">
                            <div class="dashboard-panel__header">
                                <h2>"Penyewaan Terbaru"</h2>
                                <A href="/dashboard/rentals">"Lihat semua"</A>
                            </div>
                            {move || {
                                let rows = summary.with(|s| s.as_ref().map(|s| s.recent_rentals.clone()).unwrap_or_default());
                                if rows.is_empty() {
                                    return view! { <p class="dashboard-panel__empty">"Belum ada penyewaan"</p> }.into_any();
                                }
                                view! {
                                    <Table attr:style="width: 100%;">
                                        <TableBody>
                                            {rows.into_iter().map(|r| view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{r.title.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{r.customer_name.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{format_period(&r.start_date, &r.end_date)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <StatusBadge label=r.status.label() color=rental_status_color(r.status) />
                                                    </TableCell>
                                                </TableRow>
                                            }).collect_view()}
                                        </TableBody>
                                    </Table>
                                }.into_any()
                            }}
                        </section>

                        <section class="dashboard-panel">
                            <div class="dashboard-panel__header">
                                <h2>"Segera Berakhir"</h2>
                            </div>
                            {move || {
                                let rows = summary.with(|s| s.as_ref().map(|s| s.due_soon.clone()).unwrap_or_default());
                                if rows.is_empty() {
                                    return view! { <p class="dashboard-panel__empty">"Tidak ada penyewaan yang segera berakhir"</p> }.into_any();
                                }
                                rows.into_iter().map(|r| view! {
                                    <div class="dashboard-panel__row">
                                        <span>{r.title.clone()}</span>
                                        <span class="dashboard-panel__meta">{format_date_long(&r.end_date)}</span>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </section>

                        <section class="dashboard-panel">
                            <div class="dashboard-panel__header">
                                <h2>"Stok Menipis"</h2>
                                <A href="/dashboard/items">"Kelola barang"</A>
                            </div>
                            {move || {
                                let rows = summary.with(|s| s.as_ref().map(|s| s.low_stock.clone()).unwrap_or_default());
                                if rows.is_empty() {
                                    return view! { <p class="dashboard-panel__empty">"Semua stok aman"</p> }.into_any();
                                }
                                rows.into_iter().map(|i| view! {
                                    <div class="dashboard-panel__row">
                                        <span>{i.item_name.clone()}</span>
                                        <span class="dashboard-panel__meta">
                                            {format!("{}/{} tersedia", i.available_stock, i.total_stock)}
                                        </span>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </section>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
