use crate::app::ShiftApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut ShiftApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  New Roster").clicked() {
                app.new_roster();
                ui.close_menu();
            }
            if ui.button("  Open...").clicked() {
                app.open_roster();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_roster();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_roster_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Import CSV...").clicked() {
                app.import_csv();
                ui.close_menu();
            }
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Open Settings Folder").clicked() {
                app.open_settings_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.zoom(|scale| scale.zoom_in());
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.zoom(|scale| scale.zoom_out());
                ui.close_menu();
            }
            if ui.button("  Reset Zoom").clicked() {
                app.zoom(|scale| scale.reset_zoom());
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned roster name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let modified = if app.file_path.is_some() { "" } else { " (unsaved)" };
            ui.label(
                RichText::new(format!(
                    "{} · {}{}",
                    app.roster.name,
                    app.roster.date.format("%Y-%m-%d"),
                    modified
                ))
                .size(11.0)
                .weak(),
            );
        });
    });
}
