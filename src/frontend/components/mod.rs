//! Reusable UI components for the MindKanvas frontend

mod alert;
mod badge;
mod button;
mod card;
mod footer;
mod guard;
mod input;
mod loading;
mod nav;
mod pagination;
mod toast;

pub use alert::{Alert, ErrorAlert};
pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardPadding, CardShadow};
pub use footer::Footer;
pub use guard::AdminGuard;
pub use input::{PasswordInput, TextInput};
pub use loading::{Loading, LoadingSize};
pub use nav::{Layout, Nav};
pub use pagination::PaginationBar;
pub use toast::ToastHost;
