use contracts::domain::a005_fine::{outstanding_amount, Fine, FineStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::api::resource;
use crate::shared::components::status_badge::{fine_status_color, StatusBadge};
use crate::shared::components::table::format_rupiah;
use crate::shared::components::{PageHeader, PaginationControls, SearchInput, StatCard, StatTone};
use crate::shared::date_utils::format_date_long;
use crate::shared::dialog::{use_dialog, DeletePayload, DialogId, DialogPayload, FormPayload};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

impl Searchable for Fine {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.reason, query)
            || contains_ci(&self.customer_name, query)
            || contains_ci(&self.item_name, query)
            || self.rental_id.to_string().contains(query.trim())
    }
}

#[component]
pub fn FineList() -> impl IntoView {
    let state = ListState::<Fine>::new();
    let dialog = use_dialog();
    let toast = use_toast();
    let status_filter = RwSignal::new(String::new());

    let fetch = move || {
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match resource::get_all::<Fine>().await {
                Ok(rows) => state.replace(rows),
                Err(e) => state.fail(e.message),
            }
            state.loading.set(false);
        });
    };

    let on_saved = Callback::new(move |_: Fine| fetch());

    let open_create = move |_| {
        dialog.open_with(
            DialogId::FineForm,
            DialogPayload::Fine(FormPayload::create().with_on_saved(on_saved)),
        );
    };

    let open_edit = move |fine: Fine| {
        dialog.open_with(
            DialogId::FineForm,
            DialogPayload::Fine(FormPayload::edit(fine).with_on_saved(on_saved)),
        );
    };

    let open_delete = move |fine: Fine| {
        let id = fine.id;
        let on_confirm = Callback::new(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match resource::delete::<Fine>(id).await {
                    Ok(()) => {
                        toast.success("Berhasil", "Denda berhasil dihapus");
                        fetch();
                    }
                    Err(e) => toast.error("Gagal menghapus denda", e.message),
                }
            });
        });
        dialog.open_with(
            DialogId::DeleteConfirmation,
            DialogPayload::DeleteConfirmation(DeletePayload::new(
                format!("denda \"{}\"", fine.reason),
                on_confirm,
            )),
        );
    };

    let outstanding = Signal::derive(move || {
        if state.loading.get() {
            return None;
        }
        Some(state.items.with(|fines| format_rupiah(outstanding_amount(fines))))
    });

    let page = Memo::new(move |_| {
        let filter = FineStatus::parse(&status_filter.get());
        state.visible(|fine| filter.map_or(true, |s| fine.status == s))
    });

    fetch();

    view! {
        <PageFrame page_id="a005_fine--list" category=PAGE_CAT_LIST>
            <PageHeader title="Denda" subtitle="Catat denda keterlambatan dan kerusakan".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Tambah Denda"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Denda Belum Dibayar"
                        icon_name="fines"
                        value=outstanding
                        tone=StatTone::Warning
                    />
                </div>

                <Flex gap=FlexGap::Medium class="list-toolbar">
                    <SearchInput value=state.search placeholder="Cari alasan, pelanggan, atau barang..." />
                    <Select value=status_filter>
                        <option value="">"Semua Status"</option>
                        <option value=FineStatus::Unpaid.as_str()>{FineStatus::Unpaid.label()}</option>
                        <option value=FineStatus::Paid.as_str()>{FineStatus::Paid.label()}</option>
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
                                <TableHeaderCell>"ID Sewa"</TableHeaderCell>
                                <TableHeaderCell>"Pelanggan"</TableHeaderCell>
                                <TableHeaderCell>"Barang"</TableHeaderCell>
                                <TableHeaderCell>"Jumlah"</TableHeaderCell>
                                <TableHeaderCell>"Alasan"</TableHeaderCell>
                                <TableHeaderCell>"Tanggal"</TableHeaderCell>
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
                                                <TableCellLayout>"Tidak ada denda ditemukan"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|fine| {
                                        let for_edit = fine.clone();
                                        let for_delete = fine.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{format!("#{}", fine.rental_id)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{fine.customer_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{fine.item_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_rupiah(fine.amount)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{fine.reason.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date_long(&fine.fine_date)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge label=fine.status.label() color=fine_status_color(fine.status) />
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
