//! Screens mounted by the router.
//!
//! Every screen reaches the session state through
//! [`crate::app::state::use_shared_state`]; none of them own data that
//! another screen needs.

mod dashboard;
mod home;
mod input_form;
mod not_found;

pub use dashboard::{Dashboard, DashboardDetail};
pub use home::Home;
pub use input_form::InputForm;
pub use not_found::NotFound;
