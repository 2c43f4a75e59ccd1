//! Members table, split into:
//! - `header`: select-page checkbox and column titles
//! - `row`: one member per grid row
//! - `cells`: per-column cell rendering

mod cells;
mod header;
mod row;

use adminui_business::MembersTable;
use egui::{Color32, Frame, Margin, ScrollArea, Stroke, Ui};

use super::MemberAction;

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub const NUM_COLUMNS: usize = 6;

/// Renders the current page of members.
pub fn render_members_table(ui: &mut Ui, table: &MembersTable, actions: &mut Vec<MemberAction>) {
    let rows = table.page_rows();

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("members_table")
                    .num_columns(NUM_COLUMNS)
                    .striped(true)
                    .spacing([16.0, 0.0])
                    .min_col_width(40.0)
                    .show(ui, |ui| {
                        header::render_table_header(ui, table.is_page_selected(), actions);
                        ui.end_row();

                        for member in &rows {
                            row::render_member_row(
                                ui,
                                member,
                                table.is_selected(&member.id),
                                table.draft().filter(|draft| draft.id() == member.id),
                                actions,
                            );
                            ui.end_row();
                        }
                    });

                if rows.is_empty() {
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        ui.weak("No members found");
                    });
                    ui.add_space(8.0);
                }
            });
        });
}
