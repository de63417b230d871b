//! Routed pages

mod admin_dashboard;
mod blog_detail;
mod blog_editor;
mod home;
mod login;
mod not_found;
mod signup;

pub use admin_dashboard::AdminDashboardPage;
pub use blog_detail::BlogDetailPage;
pub use blog_editor::BlogEditorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use signup::SignupPage;
