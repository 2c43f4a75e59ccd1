//! Business layer for the members admin table.
//!
//! Everything the UI needs lives here:
//! - `Member` records and the members endpoint client
//! - the in-memory table state machine (search, paging, selection, inline edit)
//! - the loader that fetches records off the UI thread
//! - the view-state binding that mirrors the search term into the URL
//!
//! UI code under `ui/src/widgets/**` only renders and forwards operator actions.

mod binding;
mod config;
pub mod http;
mod member;
pub mod members;

pub use binding::{QueryStringBinding, SEARCH_PARAM, ViewStateBinding};
pub use config::{BusinessConfig, DEFAULT_MEMBERS_URL};
pub use member::{Member, MemberField};
pub use members::{
    EditDraft, LoadOutcome, MembersApiError, MembersController, MembersLoader, MembersTable,
    PAGE_SIZE, PageNav, Selection,
};
