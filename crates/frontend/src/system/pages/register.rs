use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::context::{do_register, use_auth};

/// Client-side checks before the request is sent
pub fn check_registration(request: &RegisterRequest, confirm_password: &str) -> Result<(), String> {
    request.validate()?;
    if request.password != confirm_password {
        return Err("Password tidak cocok. Silakan periksa kembali.".to_string());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(msg) = check_registration(&request, &confirm_password.get_untracked()) {
            error_message.set(Some(msg));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            if let Err(e) = do_register(request, set_auth_state).await {
                error_message.set(Some(e.message));
            }
            is_loading.set(false);
        });
    };

    let disabled = Signal::derive(move || is_loading.get());

    view! {
        <PageFrame page_id="sys_register--public" category=PAGE_CAT_PUBLIC class="auth-page">
            <A href="/" attr:class="auth-brand">
                {icon("items")}
                <span>"KamuSewa"</span>
            </A>
            <div class="auth-card">
                <h1 class="auth-card__title">"Daftar Akun"</h1>
                <p class="auth-card__subtitle">"Buat akun baru untuk mengakses dashboard KamuSewa"</p>

                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Nama Lengkap"</Label>
                        <Input value=name placeholder="Nama Lengkap" disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="nama@perusahaan.com"
                            disabled=disabled
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Kata Sandi"</Label>
                        <Input value=password input_type=InputType::Password disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Konfirmasi Kata Sandi"</Label>
                        <Input value=confirm_password input_type=InputType::Password disabled=disabled />
                    </div>

                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        block=true
                        disabled=disabled
                    >
                        {move || if is_loading.get() { "Memproses..." } else { "Daftar" }}
                    </Button>
                </form>

                <p class="auth-card__footer">
                    "Sudah memiliki akun? "
                    <A href="/login">"Masuk"</A>
                </p>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str) -> RegisterRequest {
        RegisterRequest {
            email: "dewi@kamusewa.id".into(),
            password: password.into(),
            name: "Dewi".into(),
        }
    }

    #[test]
    fn test_password_confirmation() {
        assert!(check_registration(&request("rahasia1"), "rahasia1").is_ok());
        assert_eq!(
            check_registration(&request("rahasia1"), "rahasia2"),
            Err("Password tidak cocok. Silakan periksa kembali.".to_string())
        );
    }

    #[test]
    fn test_contract_rules_run_first() {
        assert_eq!(
            check_registration(&request("abc"), "abc"),
            Err("Kata sandi minimal 6 karakter".to_string())
        );
    }
}
