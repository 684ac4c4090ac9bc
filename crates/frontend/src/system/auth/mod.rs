pub mod api;
pub mod context;
pub mod guard;
pub mod logout_dialog;
pub mod storage;

pub use context::{use_auth, AuthProvider, AuthState};
pub use guard::AuthGate;
pub use logout_dialog::LogoutDialog;
