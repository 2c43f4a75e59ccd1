//! Search box and load status above the table.

use adminui_business::{MembersLoader, MembersTable};
use chrono::Local;
use egui::{RichText, TextEdit, Ui};

use super::MemberAction;

const SEARCH_WIDTH: f32 = 280.0;

pub fn render_toolbar(
    ui: &mut Ui,
    search_input: &mut String,
    table: &MembersTable,
    loader: &MembersLoader,
    actions: &mut Vec<MemberAction>,
) {
    ui.horizontal(|ui| {
        let search = ui.add(
            TextEdit::singleline(search_input)
                .desired_width(SEARCH_WIDTH)
                .hint_text("Search by name, email or role"),
        );
        if search.changed() {
            actions.push(MemberAction::Search(search_input.clone()));
        }

        if ui.button("Refresh").clicked() {
            actions.push(MemberAction::Refresh);
        }

        if loader.is_loading() {
            ui.spinner();
            ui.label("Loading...");
        } else if let Some(at) = loader.last_loaded() {
            let at = at.with_timezone(&Local).format("%H:%M:%S");
            ui.label(RichText::new(format!("Updated {at}")).weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "{} of {} members",
                table.filtered_len(),
                table.members().len()
            ));
        });
    });
}
