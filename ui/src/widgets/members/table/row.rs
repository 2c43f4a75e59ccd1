//! Row rendering for the members table.

use adminui_business::{EditDraft, Member, MemberField};
use egui::Ui;

use super::cells::{
    data_cell, render_action_buttons, render_id_cell, render_input_cell, render_select_cell,
    render_text_cell,
};
use crate::widgets::members::MemberAction;

/// Renders one member. When `draft` is set the row shows inputs bound to it instead
/// of the stored values.
pub fn render_member_row(
    ui: &mut Ui,
    member: &Member,
    selected: bool,
    draft: Option<&EditDraft>,
    actions: &mut Vec<MemberAction>,
) {
    data_cell(ui, selected, |ui| {
        if render_select_cell(ui, selected) {
            actions.push(MemberAction::ToggleRow(member.id));
        }
    });

    data_cell(ui, selected, |ui| {
        render_id_cell(ui, member.id);
    });

    for field in MemberField::ALL {
        data_cell(ui, selected, |ui| match draft {
            Some(draft) => {
                if let Some(value) = render_input_cell(ui, field, draft.field(field)) {
                    actions.push(MemberAction::ChangeField(field, value));
                }
            }
            None => render_text_cell(ui, member.field(field)),
        });
    }

    data_cell(ui, selected, |ui| {
        if let Some(action) = render_action_buttons(ui, member.id, draft.is_some()) {
            actions.push(action);
        }
    });
}
