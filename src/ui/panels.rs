use eframe::egui::{self, Color32, Key, Modifiers, RichText, ScrollArea, TextEdit, Ui};

use crate::data::model::FilterOption;
use crate::net::client::BfhlClient;
use crate::state::AppState;
use crate::ui::json_view::json_block;

const PLACEHOLDER: &str =
    r#"Enter JSON data here: { "data": ["M", "1", "33", "4", "B", "z", "A"] }"#;

// ---------------------------------------------------------------------------
// Central panel – the form
// ---------------------------------------------------------------------------

/// Render the input form, the response, and the filter controls.
pub fn form_panel(ui: &mut Ui, state: &mut AppState, client: &BfhlClient) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.set_max_width(600.0);
                ui.heading("Submit JSON Data");
                ui.add_space(8.0);

                ui.add(
                    TextEdit::multiline(&mut state.input)
                        .hint_text(PLACEHOLDER)
                        .code_editor()
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                // Ctrl/Cmd+Enter submits, same as the button.
                let shortcut =
                    ui.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Enter));

                ui.horizontal(|ui: &mut Ui| {
                    let pending = state.is_pending();
                    let clicked = ui
                        .add_enabled(!pending, egui::Button::new("Submit"))
                        .clicked();
                    if pending {
                        ui.spinner();
                    }
                    if clicked || shortcut {
                        state.submit(client);
                    }
                });

                if let Some(err) = &state.error {
                    ui.label(RichText::new(err).color(Color32::RED));
                }
            });

            if state.response.is_some() {
                ui.add_space(12.0);
                response_section(ui, state);
            }
        });
}

fn response_section(ui: &mut Ui, state: &mut AppState) {
    if let Some(response) = &state.response {
        json_block(ui, "Response:", response);
    }
    ui.add_space(8.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Select Filters:");
        if ui
            .add_enabled(!state.filters.is_empty(), egui::Button::new("Clear").small())
            .clicked()
        {
            state.clear_filters();
        }
    });
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for option in FilterOption::ALL {
            let mut checked = state.filters.contains(option);
            if ui.checkbox(&mut checked, option.label()).changed() {
                state.toggle_filter(option);
            }
        }
    });
    ui.add_space(8.0);

    if let Some(filtered) = state.filtered() {
        json_block(ui, "Filtered Response:", &filtered);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, client: &BfhlClient) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.response.is_some(), egui::Button::new("Save response…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("POST {}", client.endpoint()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open JSON payload")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_file(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save response")
        .add_filter("JSON", &["json"])
        .set_file_name("response.json")
        .save_file();

    if let Some(path) = file {
        state.save_response(&path);
    }
}
