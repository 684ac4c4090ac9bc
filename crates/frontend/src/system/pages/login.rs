use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(msg) = request.validate() {
            error_message.set(Some(msg));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        // On success the auth gate moves us to /dashboard.
        spawn_local(async move {
            if let Err(e) = do_login(request, set_auth_state).await {
                error_message.set(Some(e.message));
            }
            is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_login--public" category=PAGE_CAT_PUBLIC class="auth-page">
            <A href="/" attr:class="auth-brand">
                {icon("items")}
                <span>"KamuSewa"</span>
            </A>
            <div class="auth-card">
                <h1 class="auth-card__title">"Masuk"</h1>
                <p class="auth-card__subtitle">"Masukkan email dan kata sandi untuk mengakses dashboard"</p>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="nama@perusahaan.com"
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Kata Sandi"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || is_loading.get())
                        />
                    </div>

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        block=true
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {move || if is_loading.get() { "Memproses..." } else { "Masuk" }}
                    </Button>
                </form>

                <p class="auth-card__footer">
                    "Belum memiliki akun? "
                    <A href="/register">"Daftar"</A>
                </p>
            </div>
        </PageFrame>
    }
}
