use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::row_tint;
use crate::data::model::Quadrant;
use crate::state::{AppState, SCORE_STEP};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar: file actions, load status, current user.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Arquivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Recarregar").clicked() {
                state.reload_data();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("🔒 MATRIZ DE PARTNERSHIP");
        ui.separator();

        ui.label(format!(
            "{} assessores carregados, {} visíveis",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        if state.used_fallback {
            ui.label(RichText::new("dados de exemplo").color(Color32::ORANGE));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("Sair").clicked() {
                state.logout();
            }
            if let Some(user) = state.session.username() {
                ui.strong(format!("👤 {user}"));
            }
        });
    });
}

fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Abrir dados de partnership")
        .add_filter("Dados suportados", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.open_data_file(path);
    }
}

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: quadrant picker, team picker, score range.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros");
    ui.separator();

    // Clone the team index so the combo closures can mutate state.
    let teams = state.dataset.teams.clone();

    ui.strong("Quadrante");
    let selected = state
        .filter
        .quadrant
        .map(|q| q.label().to_string())
        .unwrap_or_else(|| "Todos".to_string());
    egui::ComboBox::from_id_salt("quadrant_filter")
        .selected_text(selected)
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.filter.quadrant.is_none(), "Todos")
                .clicked()
            {
                state.set_quadrant_filter(None);
            }
            for q in Quadrant::ALL {
                if ui
                    .selectable_label(state.filter.quadrant == Some(q), q.label())
                    .clicked()
                {
                    state.set_quadrant_filter(Some(q));
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Equipe");
    let selected = state
        .filter
        .team
        .clone()
        .unwrap_or_else(|| "Todos".to_string());
    egui::ComboBox::from_id_salt("team_filter")
        .selected_text(selected)
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.filter.team.is_none(), "Todos")
                .clicked()
            {
                state.set_team_filter(None);
            }
            for team in &teams {
                if ui
                    .selectable_label(state.filter.team.as_deref() == Some(team), team)
                    .clicked()
                {
                    state.set_team_filter(Some(team.clone()));
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Faixa de Pontuação");
    let mut min = state.filter.score_min;
    let mut max = state.filter.score_max;
    let changed = ui
        .add(
            egui::Slider::new(&mut min, 0.0..=100.0)
                .step_by(SCORE_STEP)
                .text("Mín"),
        )
        .changed()
        | ui.add(
            egui::Slider::new(&mut max, 0.0..=100.0)
                .step_by(SCORE_STEP)
                .text("Máx"),
        )
        .changed();
    if changed {
        state.set_score_range(min, max);
    }
}

// ---------------------------------------------------------------------------
// KPI metric cards
// ---------------------------------------------------------------------------

/// Render the four summary cards over the filtered view.
pub fn metrics_row(ui: &mut Ui, state: &AppState) {
    ui.heading("📊 Indicadores");
    ui.columns(4, |cols: &mut [Ui]| {
        metric_card(&mut cols[0], "Total Assessores", state.summary.count.to_string());
        metric_card(
            &mut cols[1],
            "Pontuação Média",
            format!("{:.2}", state.summary.mean_score),
        );
        metric_card(
            &mut cols[2],
            "Alto Desempenho",
            state.summary.high_performers().to_string(),
        );
        metric_card(
            &mut cols[3],
            "Necessita Atenção",
            state.summary.needs_attention().to_string(),
        );
    });
}

fn metric_card(ui: &mut Ui, label: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(value).size(24.0).strong());
            ui.label(RichText::new(label).color(Color32::GRAY));
        });
    });
}

// ---------------------------------------------------------------------------
// Detail table
// ---------------------------------------------------------------------------

/// Render the per-advisor table with quadrant-tinted cells.
pub fn detail_table(ui: &mut Ui, state: &AppState) {
    ui.heading("📋 Detalhamento por Assessor");

    let indices = &state.visible_indices;
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(100.0))
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Funcionário");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Pontuação");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Quadrante");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Equipe");
            });
        })
        .body(|body| {
            body.rows(22.0, indices.len(), |mut row| {
                let record = &state.dataset.records[indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(&record.name);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.2}", record.score));
                });
                row.col(|ui: &mut Ui| {
                    egui::Frame::new()
                        .fill(row_tint(record.quadrant))
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui: &mut Ui| {
                            ui.label(RichText::new(record.quadrant.label()).color(Color32::BLACK));
                        });
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&record.team);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.separator();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("⚠️ CONFIDENCIAL - Dashboard executivo com acesso restrito")
                .color(Color32::from_rgb(0xE7, 0x4C, 0x3C))
                .strong(),
        );
    });
}
