//! Members table domain module.
//!
//! This module is the single home for:
//! - the endpoint client (`api`) and the off-thread loader (`loader`)
//! - pure view helpers: filtering and paging
//! - the table state machine (`table`) and the controller that wires it to the
//!   loader and the view-state binding (`controller`)

pub mod api;
mod controller;
mod edit;
pub mod filter;
mod loader;
pub mod pagination;
mod selection;
mod table;

pub use api::MembersApiError;
pub use controller::MembersController;
pub use edit::EditDraft;
pub use loader::{LoadOutcome, MembersLoader};
pub use pagination::{PAGE_SIZE, PageNav};
pub use selection::Selection;
pub use table::MembersTable;
