//! In-memory state for the members table.
//!
//! Every operator action is a method here. The filtered list and the visible page
//! are recomputed from (members, search term, current page) on each call; nothing
//! derived is cached.
//!
//! Invariants:
//! - the selection only holds ids present in `members`
//! - at most one edit draft exists
//! - `current_page` stays within `[1, last_page]`

use log::{debug, info};
use ustr::Ustr;

use super::edit::EditDraft;
use super::filter::filter_members;
use super::pagination::{PAGE_SIZE, PageNav, clamp_page, last_page, page_range};
use super::selection::Selection;
use crate::member::{Member, MemberField};

#[derive(Debug, Clone)]
pub struct MembersTable {
    members: Vec<Member>,
    search_term: String,
    current_page: usize,
    page_size: usize,
    selection: Selection,
    draft: Option<EditDraft>,
}

impl Default for MembersTable {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl MembersTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            members: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
            selection: Selection::new(),
            draft: None,
        }
    }

    // =====================
    // Getters
    // =====================

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &Ustr) -> bool {
        self.selection.contains(id)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    pub fn editing_id(&self) -> Option<Ustr> {
        self.draft.as_ref().map(EditDraft::id)
    }

    // =====================
    // Derived view
    // =====================

    /// Members matching the search term, in list order.
    pub fn filtered(&self) -> Vec<&Member> {
        filter_members(&self.members, &self.search_term)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn last_page(&self) -> usize {
        last_page(self.filtered_len(), self.page_size)
    }

    /// Rows visible on the current page.
    pub fn page_rows(&self) -> Vec<&Member> {
        let filtered = self.filtered();
        let range = page_range(self.current_page, filtered.len(), self.page_size);
        filtered[range].to_vec()
    }

    fn page_ids(&self) -> Vec<Ustr> {
        self.page_rows().iter().map(|member| member.id).collect()
    }

    // =====================
    // Data and view parameters
    // =====================

    /// Replace the whole list with a fresh fetch result.
    ///
    /// Selected ids that are gone from the new list are dropped. An open draft is kept;
    /// saving it is a no-op if its row no longer exists.
    pub fn replace_members(&mut self, members: Vec<Member>) {
        self.members = members;
        let members = &self.members;
        self.selection
            .retain(|id| members.iter().any(|member| member.id == *id));
        self.clamp_page();
    }

    /// Returns true when the term actually changed.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.search_term == term {
            return false;
        }
        self.search_term = term.to_string();
        self.clamp_page();
        true
    }

    pub fn navigate(&mut self, nav: PageNav) {
        self.current_page = nav.apply(self.current_page, self.last_page());
    }

    fn clamp_page(&mut self) {
        self.current_page = clamp_page(self.current_page, self.filtered_len(), self.page_size);
    }

    // =====================
    // Selection
    // =====================

    /// Toggle one row. Unknown ids are ignored.
    pub fn toggle_row(&mut self, id: Ustr) {
        if self.members.iter().any(|member| member.id == id) {
            self.selection.toggle(id);
        }
    }

    /// True when the current page has rows and all of them are selected.
    pub fn is_page_selected(&self) -> bool {
        let ids = self.page_ids();
        !ids.is_empty() && ids.iter().all(|id| self.selection.contains(id))
    }

    /// Header checkbox: select the whole current page, or clear it if already selected.
    /// Selection on other pages is left alone.
    pub fn toggle_page_selection(&mut self) {
        let ids = self.page_ids();
        if self.is_page_selected() {
            self.selection.remove_all(&ids);
        } else {
            self.selection.insert_all(ids);
        }
    }

    // =====================
    // Deletion
    // =====================

    /// Remove every selected row, then clear the selection. Returns how many rows went.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.members.len();
        let selection = &self.selection;
        self.members.retain(|member| !selection.contains(&member.id));
        let removed = before - self.members.len();

        info!(
            "Deleting {} selected members ({} rows removed)",
            self.selection.len(),
            removed
        );

        if self
            .draft
            .as_ref()
            .is_some_and(|draft| self.selection.contains(&draft.id()))
        {
            self.draft = None;
        }
        self.selection.clear();
        self.clamp_page();
        removed
    }

    /// Remove one row by id. No-op if absent.
    pub fn delete(&mut self, id: Ustr) -> Option<Member> {
        let index = self.members.iter().position(|member| member.id == id)?;
        let removed = self.members.remove(index);
        self.selection.remove(&id);
        if self.editing_id() == Some(id) {
            self.draft = None;
        }
        self.clamp_page();

        info!("Deleting member: {removed:?}");
        Some(removed)
    }

    // =====================
    // Inline edit
    // =====================

    /// Start editing `id`. Any open draft is dropped unsaved. Returns false if `id`
    /// is unknown, in which case nothing changes.
    pub fn begin_edit(&mut self, id: Ustr) -> bool {
        let Some(member) = self.members.iter().find(|member| member.id == id) else {
            debug!("begin_edit: no member with id {id}");
            return false;
        };

        if let Some(previous) = self.draft.replace(EditDraft::new(member.clone())) {
            debug!("begin_edit: discarding unsaved draft for {}", previous.id());
        }
        true
    }

    /// Update one attribute of the open draft. Ignored when not editing.
    pub fn change_field(&mut self, field: MemberField, value: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => {
                debug!("change_field({field}) without an open draft");
                false
            }
        }
    }

    /// Write the draft back over the row with the same id and close edit mode.
    /// Returns false when there was no draft.
    pub fn save_edit(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };

        let edited = draft.into_member();
        info!("Saving edited member: {edited:?}");

        if let Some(slot) = self.members.iter_mut().find(|member| member.id == edited.id) {
            *slot = edited;
        }
        self.clamp_page();
        true
    }

    /// Close edit mode without touching the list.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Member> {
        (1..=count)
            .map(|i| {
                Member::new(
                    i.to_string(),
                    format!("Member {i}"),
                    format!("member{i}@mail.com"),
                    if i % 2 == 0 { "admin" } else { "member" },
                )
            })
            .collect()
    }

    fn table_with(count: usize) -> MembersTable {
        let mut table = MembersTable::new();
        table.replace_members(numbered(count));
        table
    }

    fn id(raw: &str) -> Ustr {
        Ustr::from(raw)
    }

    #[test]
    fn test_search_scenario() {
        let mut table = MembersTable::new();
        table.replace_members(vec![
            Member::new("1", "Ann", "a@x.com", "admin"),
            Member::new("2", "Bo", "b@x.com", "user"),
        ]);
        table.set_search_term("bo");

        let filtered = table.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, id("2"));
    }

    #[test]
    fn test_last_then_next_stays_on_last() {
        let mut table = table_with(25);
        assert_eq!(table.current_page(), 1);

        table.navigate(PageNav::Last);
        assert_eq!(table.current_page(), 3);

        table.navigate(PageNav::Next);
        assert_eq!(table.current_page(), 3);
        assert_eq!(table.page_rows().len(), 5);
    }

    #[test]
    fn test_previous_and_first() {
        let mut table = table_with(25);
        table.navigate(PageNav::Previous);
        assert_eq!(table.current_page(), 1);

        table.navigate(PageNav::Last);
        table.navigate(PageNav::Previous);
        assert_eq!(table.current_page(), 2);

        table.navigate(PageNav::First);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_page_clamped_when_search_narrows() {
        let mut table = table_with(25);
        table.navigate(PageNav::Last);

        table.set_search_term("Member 1");
        // "Member 1", "Member 10".."Member 19" = 11 rows, 2 pages
        assert_eq!(table.last_page(), 2);
        assert_eq!(table.current_page(), 2);

        table.set_search_term("nobody");
        assert_eq!(table.current_page(), 1);
        assert!(table.page_rows().is_empty());
    }

    #[test]
    fn test_set_search_term_reports_change() {
        let mut table = MembersTable::new();
        assert!(table.set_search_term("ann"));
        assert!(!table.set_search_term("ann"));
        assert!(table.set_search_term(""));
    }

    #[test]
    fn test_select_page_then_delete_selected() {
        let mut table = table_with(25);
        let first_page: Vec<Ustr> = table.page_rows().iter().map(|m| m.id).collect();

        table.toggle_page_selection();
        assert!(table.is_page_selected());
        assert_eq!(table.selection().len(), 10);

        let removed = table.delete_selected();
        assert_eq!(removed, 10);
        assert_eq!(table.members().len(), 15);
        assert!(table.selection().is_empty());
        assert!(
            table
                .members()
                .iter()
                .all(|member| !first_page.contains(&member.id))
        );
    }

    #[test]
    fn test_toggle_page_selection_twice_clears_page_only() {
        let mut table = table_with(25);
        table.navigate(PageNav::Last);
        table.toggle_row(id("21"));
        table.navigate(PageNav::First);

        table.toggle_page_selection();
        assert_eq!(table.selection().len(), 11);

        table.toggle_page_selection();
        assert_eq!(table.selection().len(), 1);
        assert!(table.is_selected(&id("21")));
    }

    #[test]
    fn test_toggle_page_selection_completes_partial_page() {
        let mut table = table_with(25);
        table.toggle_row(id("3"));
        assert!(!table.is_page_selected());

        table.toggle_page_selection();
        assert!(table.is_page_selected());
        assert_eq!(table.selection().len(), 10);
    }

    #[test]
    fn test_empty_page_is_never_selected() {
        let mut table = MembersTable::new();
        table.toggle_page_selection();
        assert!(!table.is_page_selected());
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_toggle_row_ignores_unknown_id() {
        let mut table = table_with(3);
        table.toggle_row(id("99"));
        assert!(table.selection().is_empty());

        table.toggle_row(id("2"));
        assert!(table.is_selected(&id("2")));
        table.toggle_row(id("2"));
        assert!(!table.is_selected(&id("2")));
    }

    #[test]
    fn test_delete_removes_from_selection() {
        let mut table = table_with(3);
        table.toggle_row(id("2"));
        table.toggle_row(id("3"));

        let removed = table.delete(id("2"));
        assert_eq!(removed.map(|m| m.name), Some("Member 2".to_string()));
        assert!(!table.is_selected(&id("2")));
        assert!(table.is_selected(&id("3")));
        assert_eq!(table.members().len(), 2);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut table = table_with(3);
        assert!(table.delete(id("99")).is_none());
        assert_eq!(table.members().len(), 3);
    }

    #[test]
    fn test_delete_last_row_of_last_page_clamps() {
        let mut table = table_with(11);
        table.navigate(PageNav::Last);
        assert_eq!(table.current_page(), 2);

        table.delete(id("11"));
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_replace_members_prunes_selection() {
        let mut table = table_with(5);
        table.toggle_row(id("1"));
        table.toggle_row(id("5"));

        table.replace_members(numbered(3));
        assert!(table.is_selected(&id("1")));
        assert!(!table.is_selected(&id("5")));
        assert_eq!(table.selection().len(), 1);
    }

    #[test]
    fn test_edit_round_trip() {
        let mut table = table_with(3);
        let before = table.members().to_vec();

        assert!(table.begin_edit(id("2")));
        assert!(table.change_field(MemberField::Name, "Renamed"));
        assert!(table.change_field(MemberField::Role, "owner"));
        assert!(table.save_edit());

        assert!(table.draft().is_none());
        let after = table.members();
        assert_eq!(after[1].name, "Renamed");
        assert_eq!(after[1].role, "owner");
        assert_eq!(after[1].email, before[1].email);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_cancel_leaves_list_unchanged() {
        let mut table = table_with(3);
        let before = table.members().to_vec();

        table.begin_edit(id("1"));
        table.change_field(MemberField::Email, "changed@x.com");
        table.cancel_edit();

        assert!(table.draft().is_none());
        assert_eq!(table.members(), before.as_slice());
    }

    #[test]
    fn test_begin_edit_unknown_is_noop() {
        let mut table = table_with(3);
        table.begin_edit(id("1"));

        assert!(!table.begin_edit(id("99")));
        assert_eq!(table.editing_id(), Some(id("1")));
    }

    #[test]
    fn test_begin_edit_discards_previous_draft() {
        let mut table = table_with(3);
        table.begin_edit(id("1"));
        table.change_field(MemberField::Name, "Lost");

        table.begin_edit(id("2"));
        assert_eq!(table.editing_id(), Some(id("2")));
        assert_eq!(
            table.draft().map(|d| d.field(MemberField::Name)),
            Some("Member 2")
        );

        table.save_edit();
        assert_eq!(table.members()[0].name, "Member 1");
    }

    #[test]
    fn test_change_field_without_draft_is_ignored() {
        let mut table = table_with(1);
        assert!(!table.change_field(MemberField::Name, "x"));
        assert!(!table.save_edit());
        assert_eq!(table.members()[0].name, "Member 1");
    }

    #[test]
    fn test_edit_accepts_empty_values() {
        let mut table = table_with(1);
        table.begin_edit(id("1"));
        table.change_field(MemberField::Email, "");
        table.save_edit();
        assert_eq!(table.members()[0].email, "");
    }

    #[test]
    fn test_deleting_edited_row_discards_draft() {
        let mut table = table_with(3);
        table.begin_edit(id("2"));
        table.delete(id("2"));
        assert!(table.draft().is_none());
    }

    #[test]
    fn test_bulk_deleting_edited_row_discards_draft() {
        let mut table = table_with(3);
        table.begin_edit(id("2"));
        table.toggle_row(id("2"));
        table.delete_selected();
        assert!(table.draft().is_none());
    }

    #[test]
    fn test_save_after_row_vanished_is_harmless() {
        let mut table = table_with(3);
        table.begin_edit(id("3"));
        table.replace_members(numbered(2));

        assert!(table.save_edit());
        assert_eq!(table.members().len(), 2);
        assert!(table.draft().is_none());
    }

    #[test]
    fn test_with_page_size() {
        let mut table = MembersTable::with_page_size(4);
        table.replace_members(numbered(9));
        assert_eq!(table.last_page(), 3);

        table.navigate(PageNav::Last);
        assert_eq!(table.page_rows().len(), 1);
    }
}
