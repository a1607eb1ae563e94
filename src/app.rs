use eframe::egui;

use crate::auth::Role;
use crate::state::AppState;
use crate::ui::{login, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PartnershipApp {
    pub state: AppState,
}

impl Default for PartnershipApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for PartnershipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The dashboard is leadership-only; anything less goes back to login.
        if self.state.session.role() != Some(Role::Lider) {
            egui::CentralPanel::default().show(ctx, |ui| {
                login::login_page(ui, &mut self.state);
            });
            return;
        }

        // ---- Top panel: menu bar, status, current user ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::filter_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart, KPIs, detail table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::matrix_plot(ui, &self.state.chart);
                    ui.separator();
                    panels::metrics_row(ui, &self.state);
                    ui.add_space(8.0);
                    panels::detail_table(ui, &self.state);
                    panels::footer(ui);
                });
        });
    }
}
