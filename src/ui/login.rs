use eframe::egui::{self, Color32, Key, RichText, TextEdit, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Login page (central panel while logged out)
// ---------------------------------------------------------------------------

/// Render the login page: title, form, generic error, account hint list.
pub fn login_page(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(60.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("🔒 MATRIZ DE PARTNERSHIP").size(28.0));
        ui.label(RichText::new("Acesso Restrito - Lideranças").color(Color32::GRAY));
        ui.add_space(30.0);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui: &mut Ui| {
                ui.set_max_width(320.0);
                ui.strong("Login");
                ui.add_space(8.0);

                ui.label("Usuário:");
                ui.add(TextEdit::singleline(&mut state.login_form.username).desired_width(280.0));

                ui.label("Senha:");
                let password = ui.add(
                    TextEdit::singleline(&mut state.login_form.password)
                        .password(true)
                        .desired_width(280.0),
                );

                ui.add_space(8.0);
                let submit = ui.button("Entrar").clicked()
                    || (password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)));
                if submit {
                    state.submit_login();
                }

                if let Some(error) = &state.login_form.error {
                    ui.add_space(6.0);
                    ui.colored_label(Color32::RED, format!("❌ {error}"));
                }

                ui.separator();
                ui.strong("Usuários Disponíveis:");
                for user in &state.known_usernames {
                    ui.label(format!("• {user}"));
                }
            });
    });
}
