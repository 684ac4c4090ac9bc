use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

const FEATURES: [(&str, &str, &str); 4] = [
    ("items", "Inventaris", "Lacak stok total dan stok tersedia setiap barang sewaan."),
    ("rentals", "Penyewaan", "Catat periode sewa, pelanggan, dan estimasi biaya secara otomatis."),
    ("customers", "Pelanggan", "Simpan kontak pelanggan dan riwayat penyewaan mereka."),
    ("fines", "Denda", "Kelola denda keterlambatan atau kerusakan hingga lunas."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_landing--public" category=PAGE_CAT_PUBLIC class="landing">
            <header class="landing__header">
                <A href="/" attr:class="auth-brand">
                    {icon("items")}
                    <span>"KamuSewa"</span>
                </A>
                <nav class="landing__nav">
                    <A href="/login">"Masuk"</A>
                    <A href="/register">"Daftar"</A>
                </nav>
            </header>

            <section class="landing__hero">
                <h1>"Manajemen Inventaris Penyewaan Anda, Kini Lebih Mudah dan Teratur."</h1>
                <p>
                    "Aplikasi intuitif untuk pemilik bisnis penyewaan melacak, mengelola, dan "
                    "mengoptimalkan aset sewaan mereka secara efisien."
                </p>
                <div class="landing__cta">
                    <A href="/login" attr:class="button button--primary">"Mulai Sekarang"</A>
                    <A href="/register" attr:class="button button--secondary">"Buat Akun"</A>
                </div>
            </section>

            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|(icon_name, title, body)| view! {
                        <div class="landing__feature">
                            <div class="landing__feature-icon">{icon(icon_name)}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    })
                    .collect_view()}
            </section>
        </PageFrame>
    }
}
