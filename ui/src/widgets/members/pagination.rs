//! Bulk delete and page navigation under the table.

use adminui_business::{MembersTable, PageNav};
use egui::Ui;

use super::MemberAction;

pub fn render_pagination(ui: &mut Ui, table: &MembersTable, actions: &mut Vec<MemberAction>) {
    ui.horizontal(|ui| {
        let selected = table.selection().len();
        if ui.button(format!("Delete Selected ({selected})")).clicked() {
            actions.push(MemberAction::DeleteSelected);
        }

        ui.separator();

        let (before, after) = PageNav::ALL.split_at(2);
        for nav in before {
            nav_button(ui, *nav, actions);
        }
        ui.label(format!(
            "Page {} of {}",
            table.current_page(),
            table.last_page()
        ));
        for nav in after {
            nav_button(ui, *nav, actions);
        }
    });
}

fn nav_button(ui: &mut Ui, nav: PageNav, actions: &mut Vec<MemberAction>) {
    if ui.button(nav.label()).clicked() {
        actions.push(MemberAction::Navigate(nav));
    }
}
