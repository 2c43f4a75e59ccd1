//! Table header rendering for the members table.

use egui::{Color32, Frame, InnerResponse, Margin, Ui};

use crate::widgets::members::MemberAction;

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Column titles after the select-page checkbox.
const HEADERS: [&str; 5] = ["User ID", "Name", "Email", "Role", "Actions"];

/// Renders the header row. The first cell toggles selection of the whole page.
pub fn render_table_header(ui: &mut Ui, page_selected: bool, actions: &mut Vec<MemberAction>) {
    header_cell(ui, |ui| {
        let mut checked = page_selected;
        if ui
            .checkbox(&mut checked, "")
            .on_hover_text("Select all on this page")
            .changed()
        {
            actions.push(MemberAction::TogglePage);
        }
    });

    for label in HEADERS {
        header_cell(ui, |ui| {
            ui.strong(label);
        });
    }
}

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}
