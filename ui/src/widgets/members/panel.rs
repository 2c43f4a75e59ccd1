//! Main panel for the members admin table.

use std::time::Duration;

use egui::{Response, Ui};
use log::debug;

use super::MemberAction;
use super::pagination::render_pagination;
use super::table::render_members_table;
use super::toolbar::render_toolbar;
use crate::state::State;

/// Repaint interval while a load is outstanding, so its result is picked up.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

/// Displays the members panel: search toolbar, table and pagination.
pub fn members_panel(state: &mut State, ui: &mut Ui) -> Response {
    sync_state(state);

    let mut actions = Vec::new();
    let response = ui
        .vertical(|ui| {
            render_toolbar(
                ui,
                &mut state.search_input,
                state.members.table(),
                state.members.loader(),
                &mut actions,
            );
            ui.add_space(8.0);
            render_members_table(ui, state.members.table(), &mut actions);
            ui.add_space(8.0);
            render_pagination(ui, state.members.table(), &mut actions);
        })
        .response;

    if !actions.is_empty() {
        apply_actions(state, actions);
        ui.ctx().request_repaint();
    }

    if state.members.loader().is_loading() {
        ui.ctx().request_repaint_after(LOADING_REPAINT);
    }

    response
}

/// Mount on the first frame, follow outside navigation, and apply finished loads.
fn sync_state(state: &mut State) {
    if !state.members.is_mounted() {
        state.members.mount();
        state.search_input = state.members.table().search_term().to_string();
    } else if state.members.sync_from_binding() {
        state.search_input = state.members.table().search_term().to_string();
    }

    state.members.poll();
}

pub(super) fn apply_actions(state: &mut State, actions: Vec<MemberAction>) {
    let members = &mut state.members;
    for action in actions {
        debug!("Applying {action:?}");
        match action {
            MemberAction::Search(term) => members.set_search(&term),
            MemberAction::Refresh => members.refresh(),
            MemberAction::Navigate(nav) => members.table_mut().navigate(nav),
            MemberAction::ToggleRow(id) => members.table_mut().toggle_row(id),
            MemberAction::TogglePage => members.table_mut().toggle_page_selection(),
            MemberAction::DeleteSelected => {
                members.table_mut().delete_selected();
            }
            MemberAction::Delete(id) => {
                members.table_mut().delete(id);
            }
            MemberAction::BeginEdit(id) => {
                members.table_mut().begin_edit(id);
            }
            MemberAction::ChangeField(field, value) => {
                members.table_mut().change_field(field, value);
            }
            MemberAction::SaveEdit => {
                members.table_mut().save_edit();
            }
            MemberAction::CancelEdit => members.table_mut().cancel_edit(),
        }
    }
}
