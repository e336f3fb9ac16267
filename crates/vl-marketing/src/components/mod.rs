//! Marketing site components

mod cards;
mod cookie_banner;
mod filter_bar;
mod footer;
mod form;
mod nav;
mod toast;

pub use cards::*;
pub use cookie_banner::{CookieBanner, ConsentPanel};
pub use filter_bar::{CategoryChips, EmptyState, LoadMore, SearchInput};
pub use footer::Footer;
pub use form::{use_form_controller, FormController, FormError, SubmitButton};
pub use nav::MarketingNav;
pub use toast::{provide_toasts, use_toasts, ToastHost, Toasts};
