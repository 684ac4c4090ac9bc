use contracts::domain::a004_rental::{Rental, RentalStatus, UpdateRentalStatusRequest};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::ApiResult;
use leptos::prelude::*;
use thaw::*;

use crate::shared::api::{api_request, resource, Method};
use crate::shared::components::status_badge::{rental_status_color, StatusBadge};
use crate::shared::components::table::format_rupiah;
use crate::shared::components::{PageHeader, PaginationControls, SearchInput};
use crate::shared::date_utils::{format_period, today};
use crate::shared::dialog::{use_dialog, DeletePayload, DialogId, DialogPayload, FormPayload};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

impl Searchable for Rental {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.title, query)
            || contains_ci(&self.customer_name, query)
            || contains_ci(&self.rental_number, query)
            || self.item_names().iter().any(|n| contains_ci(n, query))
    }
}

/// Status select value: empty means every status
pub fn status_matches(filter: &str, status: RentalStatus) -> bool {
    filter.is_empty() || filter == status.code().to_string()
}

async fn update_status(id: i64, status: RentalStatus) -> ApiResult<Rental> {
    let endpoint = format!("{}/status", Rental::member_path(id));
    api_request(
        Method::Patch,
        &endpoint,
        Some(&UpdateRentalStatusRequest { status }),
    )
    .await
}

#[component]
pub fn RentalList() -> impl IntoView {
    let state = ListState::<Rental>::new();
    let dialog = use_dialog();
    let toast = use_toast();
    let status_filter = RwSignal::new(String::new());

    let fetch = move || {
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match resource::get_all::<Rental>().await {
                Ok(rows) => state.replace(rows),
                Err(e) => state.fail(e.message),
            }
            state.loading.set(false);
        });
    };

    let on_saved = Callback::new(move |_: Rental| fetch());

    let open_create = move |_| {
        dialog.open_with(
            DialogId::RentalForm,
            DialogPayload::Rental(FormPayload::create().with_on_saved(on_saved)),
        );
    };

    let open_edit = move |rental: Rental| {
        dialog.open_with(
            DialogId::RentalForm,
            DialogPayload::Rental(FormPayload::edit(rental).with_on_saved(on_saved)),
        );
    };

    let open_delete = move |rental: Rental| {
        let id = rental.id;
        let on_confirm = Callback::new(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match resource::delete::<Rental>(id).await {
                    Ok(()) => {
                        toast.success("Berhasil", "Penyewaan berhasil dihapus");
                        fetch();
                    }
                    Err(e) => toast.error("Gagal menghapus penyewaan", e.message),
                }
            });
        });
        dialog.open_with(
            DialogId::DeleteConfirmation,
            DialogPayload::DeleteConfirmation(DeletePayload::new(rental.title, on_confirm)),
        );
    };

    let change_status = move |id: i64, raw: String| {
        let Some(status) = raw.parse::<u8>().ok().and_then(RentalStatus::from_code) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match update_status(id, status).await {
                Ok(_) => {
                    toast.success(
                        "Berhasil",
                        format!("Status diubah menjadi {}", status.label()),
                    );
                    fetch();
                }
                Err(e) => toast.error("Gagal mengubah status", e.message),
            }
        });
    };

    let page = Memo::new(move |_| {
        let filter = status_filter.get();
        state.visible(|rental| status_matches(&filter, rental.status))
    });

    fetch();

    view! {
        <PageFrame page_id="a004_rental--list" category=PAGE_CAT_LIST>
            <PageHeader title="Penyewaan" subtitle="Kelola transaksi penyewaan barang".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Tambah Penyewaan"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Medium class="list-toolbar">
                    <SearchInput value=state.search placeholder="Cari penyewaan, pelanggan, atau barang..." />
                    <Select value=status_filter>
                        <option value="">"Semua Status"</option>
                        {RentalStatus::ALL.into_iter().map(|s| view! {
                            <option value=s.code().to_string()>{s.label()}</option>
                        }).collect_view()}
                    </Select>
                </Flex>

                {move || state.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Show
                    when=move || !state.loading.get()
                    fallback=|| view! {
                        <Flex gap=FlexGap::Small style="align-items:center;justify-content:center;padding:48px;">
                            <Spinner />
                            <span>"Memuat data..."</span>
                        </Flex>
                    }
                >
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"No."</TableHeaderCell>
                                <TableHeaderCell>"Judul"</TableHeaderCell>
                                <TableHeaderCell>"Pelanggan"</TableHeaderCell>
                                <TableHeaderCell>"Barang"</TableHeaderCell>
                                <TableHeaderCell>"Periode"</TableHeaderCell>
                                <TableHeaderCell>"Total Biaya"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Aksi"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let (rows, _) = page.get();
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="8">
                                                <TableCellLayout>"Tidak ada penyewaan ditemukan"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                let today = today();
                                rows.into_iter()
                                    .map(|rental| {
                                        let id = rental.id;
                                        let past_due = rental.is_past_due(today);
                                        let items = rental.item_names().join(", ");
                                        let status = rental.status;
                                        let for_edit = rental.clone();
                                        let for_delete = rental.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{rental.rental_number.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{rental.title.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{rental.customer_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{items}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_period(&rental.start_date, &rental.end_date)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_rupiah(rental.total_cost)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Space gap=SpaceGap::Small>
                                                        <StatusBadge label=status.label() color=rental_status_color(status) />
                                                        {past_due.then(|| view! {
                                                            <span class="table__hint" title="Melewati tanggal selesai">
                                                                {icon("alert-circle")}
                                                            </span>
                                                        })}
                                                        <select
                                                            class="table__select"
                                                            title="Ubah status"
                                                            on:change=move |ev| change_status(id, event_target_value(&ev))
                                                        >
                                                            {RentalStatus::ALL.into_iter().map(|s| view! {
                                                                <option value=s.code().to_string() selected={s == status}>
                                                                    {s.label()}
                                                                </option>
                                                            }).collect_view()}
                                                        </select>
                                                    </Space>
                                                </TableCell>
                                                <TableCell>
                                                    <Space gap=SpaceGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| open_edit(for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| open_delete(for_delete.clone())
                                                        >
                                                            {icon("trash")}
                                                        </Button>
                                                    </Space>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>

                    <PaginationControls
                        window=Signal::derive(move || page.get().1)
                        on_page_change=Callback::new(move |p| state.page.set(p))
                        on_page_size_change=Callback::new(move |size| state.set_page_size(size))
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        assert!(status_matches("", RentalStatus::Completed));
        assert!(status_matches("3", RentalStatus::Overdue));
        assert!(!status_matches("1", RentalStatus::Overdue));
    }
}
