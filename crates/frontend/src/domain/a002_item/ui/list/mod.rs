use contracts::domain::a002_item::Item;
use leptos::prelude::*;
use thaw::*;

use super::detail_view::availability_label;
use crate::shared::api::resource;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::format_rupiah;
use crate::shared::components::{PageHeader, PaginationControls, SearchInput};
use crate::shared::dialog::{use_dialog, DeletePayload, DialogId, DialogPayload, FormPayload};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

impl Searchable for Item {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.item_name, query)
            || contains_ci(&self.description, query)
            || self.category_names().iter().any(|c| contains_ci(c, query))
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let state = ListState::<Item>::new();
    let dialog = use_dialog();
    let toast = use_toast();
    let only_low_stock = RwSignal::new(false);

    let fetch = move || {
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match resource::get_all::<Item>().await {
                Ok(rows) => state.replace(rows),
                Err(e) => state.fail(e.message),
            }
            state.loading.set(false);
        });
    };

    let on_saved = Callback::new(move |_: Item| fetch());

    let open_create = move |_| {
        dialog.open_with(
            DialogId::ItemForm,
            DialogPayload::Item(FormPayload::create().with_on_saved(on_saved)),
        );
    };

    let open_detail = move |item: Item| {
        dialog.open_with(
            DialogId::ItemDetail,
            DialogPayload::ItemDetail(FormPayload::edit(item).with_on_saved(on_saved)),
        );
    };

    let open_edit = move |item: Item| {
        dialog.open_with(
            DialogId::ItemForm,
            DialogPayload::Item(FormPayload::edit(item).with_on_saved(on_saved)),
        );
    };

    let open_delete = move |item: Item| {
        let id = item.id;
        let on_confirm = Callback::new(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match resource::delete::<Item>(id).await {
                    Ok(()) => {
                        toast.success("Berhasil", "Barang berhasil dihapus");
                        fetch();
                    }
                    Err(e) => toast.error("Gagal menghapus barang", e.message),
                }
            });
        });
        dialog.open_with(
            DialogId::DeleteConfirmation,
            DialogPayload::DeleteConfirmation(DeletePayload::new(item.item_name, on_confirm)),
        );
    };

    let page = Memo::new(move |_| {
        let low_only = only_low_stock.get();
        state.visible(|item| !low_only || item.is_low_stock())
    });

    fetch();

    view! {
        <PageFrame page_id="a002_item--list" category=PAGE_CAT_LIST>
            <PageHeader title="Barang" subtitle="Kelola barang yang tersedia untuk disewa".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Tambah Barang"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Flex gap=FlexGap::Medium class="list-toolbar">
                    <SearchInput value=state.search placeholder="Cari barang atau kategori..." />
                    <Checkbox checked=only_low_stock label="Hanya stok menipis" />
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
                                <TableHeaderCell>"Nama Barang"</TableHeaderCell>
                                <TableHeaderCell>"Kategori"</TableHeaderCell>
                                <TableHeaderCell>"Harga Sewa/Hari"</TableHeaderCell>
                                <TableHeaderCell>"Stok"</TableHeaderCell>
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
                                            <TableCell attr:colspan="6">
                                                <TableCellLayout>"Tidak ada barang ditemukan"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|item| {
                                        let (label, color) = availability_label(&item);
                                        let categories = item.category_names().join(", ");
                                        let for_detail = item.clone();
                                        let for_edit = item.clone();
                                        let for_delete = item.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                open_detail(for_detail.clone());
                                                            }
                                                        >
                                                            {item.item_name.clone()}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{categories}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_rupiah(item.rental_price)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{}/{}", item.available_stock, item.total_stock)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge label=label color=color />
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
