//! Cell rendering functions for the members table.

use adminui_business::MemberField;
use egui::{Color32, Frame, InnerResponse, Margin, RichText, TextEdit, Ui, Visuals};
use ustr::Ustr;

use crate::widgets::members::MemberAction;

const INPUT_WIDTH: f32 = 160.0;

/// Background of a data cell. Selected rows use the selection color.
#[inline]
pub fn cell_fill(visuals: &Visuals, selected: bool) -> Color32 {
    if selected {
        visuals.selection.bg_fill
    } else {
        Color32::TRANSPARENT
    }
}

/// Wraps cell content with padding, filled when the row is selected.
#[inline]
pub fn data_cell<R>(
    ui: &mut Ui,
    selected: bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    Frame::NONE
        .fill(cell_fill(ui.visuals(), selected))
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Row checkbox. Returns `true` if it was toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: Ustr) {
    ui.label(RichText::new(id.as_str()).monospace());
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Inline input for one field of the draft. Returns the new value when edited.
#[inline]
pub fn render_input_cell(ui: &mut Ui, field: MemberField, value: &str) -> Option<String> {
    let mut text = value.to_string();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_salt(("member_field", field.as_str()))
            .desired_width(INPUT_WIDTH)
            .hint_text(field.as_str()),
    );
    response.changed().then_some(text)
}

/// Edit/Delete, or Save/Cancel while the row is being edited.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, id: Ustr, editing: bool) -> Option<MemberAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if editing {
            if ui.button("Save").clicked() {
                action = Some(MemberAction::SaveEdit);
            }
            if ui.button("Cancel").clicked() {
                action = Some(MemberAction::CancelEdit);
            }
        } else {
            if ui.button("Edit").on_hover_text("Edit member").clicked() {
                action = Some(MemberAction::BeginEdit(id));
            }
            if ui.button("Delete").on_hover_text("Delete member").clicked() {
                action = Some(MemberAction::Delete(id));
            }
        }
    });

    action
}
