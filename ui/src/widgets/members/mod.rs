//! Members admin panel.
//!
//! Rendering never mutates the table directly. Each widget pushes `MemberAction`s and
//! the panel applies them once the frame's layout is done:
//! - `toolbar`: search box, refresh, loading indicator
//! - `table`: header, rows and cells
//! - `pagination`: page navigation and bulk delete

mod pagination;
mod panel;
mod table;
mod toolbar;

use adminui_business::{MemberField, PageNav};
use ustr::Ustr;

pub use panel::members_panel;

/// An operator intent collected during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberAction {
    Search(String),
    Refresh,
    Navigate(PageNav),
    ToggleRow(Ustr),
    TogglePage,
    DeleteSelected,
    Delete(Ustr),
    BeginEdit(Ustr),
    ChangeField(MemberField, String),
    SaveEdit,
    CancelEdit,
}
