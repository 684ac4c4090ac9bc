use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use thaw::*;

use crate::shared::api::resource;
use crate::shared::components::{PageHeader, PaginationControls, SearchInput};
use crate::shared::date_utils::format_date;
use crate::shared::dialog::{use_dialog, DeletePayload, DialogId, DialogPayload, FormPayload};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

impl Searchable for Category {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.category_name, query) || contains_ci(&self.description, query)
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let state = ListState::<Category>::new();
    let dialog = use_dialog();
    let toast = use_toast();

    let fetch = move || {
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match resource::get_all::<Category>().await {
                Ok(rows) => state.replace(rows),
                Err(e) => state.fail(e.message),
            }
            state.loading.set(false);
        });
    };

    let on_saved = Callback::new(move |_: Category| fetch());

    let open_create = move |_| {
        dialog.open_with(
            DialogId::CategoryForm,
            DialogPayload::Category(FormPayload::create().with_on_saved(on_saved)),
        );
    };

    let open_edit = move |category: Category| {
        dialog.open_with(
            DialogId::CategoryForm,
            DialogPayload::Category(FormPayload::edit(category).with_on_saved(on_saved)),
        );
    };

    let open_delete = move |category: Category| {
        let id = category.id;
        let on_confirm = Callback::new(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match resource::delete::<Category>(id).await {
                    Ok(()) => {
                        toast.success("Berhasil", "Kategori berhasil dihapus");
                        fetch();
                    }
                    Err(e) => toast.error("Gagal menghapus kategori", e.message),
                }
            });
        });
        dialog.open_with(
            DialogId::DeleteConfirmation,
            DialogPayload::DeleteConfirmation(DeletePayload::new(category.category_name, on_confirm)),
        );
    };

    let page = Memo::new(move |_| state.visible(|_| true));

    fetch();

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Kategori" subtitle="Kelola kategori barang yang disewakan".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Tambah Kategori"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=state.search placeholder="Cari kategori..." />
                </div>

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
                                <TableHeaderCell>"Nama Kategori"</TableHeaderCell>
                                <TableHeaderCell>"Deskripsi"</TableHeaderCell>
                                <TableHeaderCell>"Dibuat"</TableHeaderCell>
                                <TableHeaderCell>"Aksi"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let (rows, _) = page.get();
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="4">
                                                <TableCellLayout>"Tidak ada kategori ditemukan"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|category| {
                                        let for_edit = category.clone();
                                        let for_delete = category.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{category.category_name.clone()}</strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {category.description.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date(&category.created_at)}</TableCellLayout>
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
