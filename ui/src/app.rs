use crate::{state::State, widgets};

pub struct AdminApp {
    state: State,
}

impl AdminApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Admin Dashboard");
                ui.separator();
                ui.label(self.state.config.members_url());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Members");
            ui.separator();
            widgets::members_panel(&mut self.state, ui);
        });
    }
}
