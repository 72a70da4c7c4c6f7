//! Shared UI components for the web client.

pub mod layout;
pub mod nav;

pub use layout::Layout;
pub use nav::Nav;
