pub mod landing;
pub mod login;
pub mod profile;
pub mod register;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
