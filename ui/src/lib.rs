//! Shared UI crate for Latelens. Core transformations and cross-platform
//! views live here; `web/` and `desktop/` only add routing and launch glue.

pub mod core;
pub mod dashboard;
pub mod views;

mod navbar;
pub mod components {
    pub use super::navbar::Navbar;
}
