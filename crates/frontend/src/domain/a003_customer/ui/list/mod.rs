use contracts::domain::a003_customer::Customer;
use leptos::prelude::*;
use thaw::*;

use crate::shared::api::resource;
use crate::shared::components::{PageHeader, PaginationControls, SearchInput};
use crate::shared::dialog::{use_dialog, DeletePayload, DialogId, DialogPayload, FormPayload};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;

impl Searchable for Customer {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.customer_name, query)
            || contains_ci(&self.email, query)
            || self.phone_number.contains(query)
            || self.identity_number.contains(query)
    }
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let state = ListState::<Customer>::new();
    let dialog = use_dialog();
    let toast = use_toast();

    let fetch = move || {
        state.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match resource::get_all::<Customer>().await {
                Ok(rows) => state.replace(rows),
                Err(e) => state.fail(e.message),
            }
            state.loading.set(false);
        });
    };

    let on_saved = Callback::new(move |_: Customer| fetch());

    let open_create = move |_| {
        dialog.open_with(
            DialogId::CustomerForm,
            DialogPayload::Customer(FormPayload::create().with_on_saved(on_saved)),
        );
    };

    let open_edit = move |customer: Customer| {
        dialog.open_with(
            DialogId::CustomerForm,
            DialogPayload::Customer(FormPayload::edit(customer).with_on_saved(on_saved)),
        );
    };

    let open_delete = move |customer: Customer| {
        let id = customer.id;
        let on_confirm = Callback::new(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match resource::delete::<Customer>(id).await {
                    Ok(()) => {
                        toast.success("Berhasil", "Pelanggan berhasil dihapus");
                        fetch();
                    }
                    Err(e) => toast.error("Gagal menghapus pelanggan", e.message),
                }
            });
        });
        dialog.open_with(
            DialogId::DeleteConfirmation,
            DialogPayload::DeleteConfirmation(DeletePayload::new(customer.customer_name, on_confirm)),
        );
    };

    let page = Memo::new(move |_| state.visible(|_| true));

    fetch();

    view! {
        <PageFrame page_id="a003_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Pelanggan" subtitle="Kelola data pelanggan penyewaan".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    " Tambah Pelanggan"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchInput value=state.search placeholder="Cari nama, email, atau telepon..." />
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
                                <TableHeaderCell>"Nama"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Telepon"</TableHeaderCell>
                                <TableHeaderCell>"No. Identitas"</TableHeaderCell>
                                <TableHeaderCell>"Aksi"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let (rows, _) = page.get();
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="5">
                                                <TableCellLayout>"Tidak ada pelanggan ditemukan"</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|customer| {
                                        let for_edit = customer.clone();
                                        let for_delete = customer.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{customer.customer_name.clone()}</strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{or_dash(&customer.email)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{or_dash(&customer.phone_number)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{or_dash(&customer.identity_number)}</TableCellLayout>
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
