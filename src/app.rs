use std::path::PathBuf;

use shift_timeline::config::AppSettings;
use shift_timeline::engine::{ShiftConstraints, TimelineEditor};
use shift_timeline::io;
use shift_timeline::model::{Role, Roster, ShiftEntry, TimeScale};
use tracing::{info, warn};

use crate::ui;

/// Main application state.
pub struct ShiftApp {
    pub roster: Roster,
    /// Gesture state; only the timeline chart writes to it.
    pub editor: TimelineEditor,
    /// Last accepted placement of the live gesture.
    gesture_edit: Option<ShiftEntry>,
    pub file_path: Option<PathBuf>,
    pub settings: AppSettings,
    pub settings_path: PathBuf,

    // Member input
    pub new_member_name: String,
    pub new_member_role: Role,

    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl ShiftApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = AppSettings::default_path();
        let settings = AppSettings::load_or_default(&settings_path);
        let editor = TimelineEditor::new(
            TimeScale::new(settings.pixels_per_minute),
            ShiftConstraints::default(),
        );

        let mut app = Self {
            roster: Roster::default(),
            editor,
            gesture_edit: None,
            file_path: None,
            settings,
            settings_path,
            new_member_name: String::new(),
            new_member_role: Role::default(),
            show_about: false,
            status_message: "Ready".to_string(),
        };

        if let Some(path) = app.settings.last_roster.clone() {
            match io::load_roster(&path) {
                Ok(roster) => {
                    app.roster = roster;
                    app.file_path = Some(path);
                    app.status_message = "Roster loaded".to_string();
                }
                Err(e) => warn!(path = %path.display(), error = %e, "could not reopen last roster"),
            }
        }
        app
    }

    // --- File operations ---

    pub fn new_roster(&mut self) {
        self.roster = Roster::default();
        self.file_path = None;
        self.editor.pointer_leave();
        self.gesture_edit = None;
        self.status_message = "New roster created".to_string();
    }

    pub fn open_roster(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Shift Roster", &["roster.json", "json"])
            .pick_file()
        {
            match io::load_roster(&path) {
                Ok(roster) => {
                    self.roster = roster;
                    self.editor.pointer_leave();
                    self.gesture_edit = None;
                    self.remember_roster(path);
                    self.status_message = "Roster loaded".to_string();
                }
                Err(e) => {
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_roster(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.write_roster(path);
        } else {
            self.save_roster_as();
        }
    }

    pub fn save_roster_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Shift Roster", &["roster.json", "json"])
            .set_file_name(format!("{}.roster.json", self.roster.name))
            .save_file()
        {
            self.write_roster(path);
        }
    }

    fn write_roster(&mut self, path: PathBuf) {
        self.roster.touch();
        match io::save_roster(&self.roster, &path) {
            Ok(()) => {
                self.remember_roster(path);
                self.status_message = "Roster saved".to_string();
            }
            Err(e) => self.status_message = format!("Error saving: {}", e),
        }
    }

    pub fn import_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            match io::csv_import::import_csv(&path) {
                Ok((entries, skipped)) => {
                    let count = entries.len();
                    self.roster.entries.extend(entries);
                    self.roster.touch();
                    self.status_message = if skipped > 0 {
                        format!("Imported {} shifts ({} rows skipped)", count, skipped)
                    } else {
                        format!("Imported {} shifts", count)
                    };
                }
                Err(e) => {
                    self.status_message = format!("CSV import failed: {}", e);
                }
            }
        }
    }

    pub fn export_csv(&mut self) {
        if self.roster.entries.is_empty() {
            self.status_message = "Nothing to export, the roster has no shifts".to_string();
            return;
        }

        let default_name = format!("{}.csv", self.roster.name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            match io::csv_export::export_csv(&self.roster.entries, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} shifts to CSV", count);
                }
                Err(e) => {
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    pub fn open_settings_folder(&mut self) {
        if let Some(dir) = self.settings_path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir).and_then(|()| open::that(dir)) {
                self.status_message = format!("Could not open settings folder: {}", e);
            }
        }
    }

    fn remember_roster(&mut self, path: PathBuf) {
        self.settings.last_roster = Some(path.clone());
        self.file_path = Some(path);
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!(error = %e, "could not save settings");
        }
    }

    // --- Roster operations ---

    pub fn add_member(&mut self) {
        let name = self.new_member_name.trim();
        if name.is_empty() {
            return;
        }
        let name = name.to_string();
        self.roster.add_member(
            name.clone(),
            self.new_member_role,
            self.settings.default_shift_start,
            self.settings.default_shift_end,
        );
        info!(name = %name, "member added");
        self.new_member_name.clear();
        self.status_message = format!("Added '{}'", name);
    }

    fn finish_gesture(&mut self) {
        let edit = self.gesture_edit.take();
        if let Some(entry) = &edit {
            info!(shift_id = %entry.id, start = %entry.start, end = %entry.end, "shift edited");
        }
        self.status_message = gesture_summary(edit.as_ref());
    }

    pub fn zoom(&mut self, f: impl FnOnce(&mut TimeScale)) {
        f(self.editor.scale_mut());
        self.settings.pixels_per_minute = self.editor.scale().pixels_per_minute();
        self.persist_settings();
    }
}

impl eframe::App for ShiftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save {
            self.save_roster();
        }
        let scroll = ctx.input(|i| if i.modifiers.ctrl { i.smooth_scroll_delta.y } else { 0.0 });
        if scroll > 0.0 {
            self.zoom(|scale| scale.zoom_in());
        } else if scroll < 0.0 {
            self.zoom(|scale| scale.zoom_out());
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let total = self.roster.total_minutes();
                        ui.label(
                            egui::RichText::new(format!(
                                "Shifts: {} · Total: {}h {:02}m · Zoom: {:.0}%",
                                self.roster.entries.len(),
                                total / 60,
                                total % 60,
                                self.editor.scale().pixels_per_minute() * 100.0
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        egui::TopBottomPanel::top("member_bar").show(ctx, |ui| {
            ui::member_bar::show_member_bar(self, ui);
        });

        // Central panel: timeline
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            let interaction =
                ui::timeline_chart::show_timeline_chart(&mut self.roster, &mut self.editor, ui);
            if let Some(entry) = interaction.updated {
                self.status_message = format!("Editing '{}' ({} → {})", entry.name, entry.start, entry.end);
                self.gesture_edit = Some(entry);
            }
            if interaction.gesture_ended {
                self.finish_gesture();
            }
            if let Some(entry) = interaction.removed {
                self.status_message = format!("Removed '{}'", entry.name);
            }
            if !self.editor.is_idle() {
                ctx.request_repaint();
            }
        });

        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

/// Status line shown once a drag or resize is released.
fn gesture_summary(edit: Option<&ShiftEntry>) -> String {
    match edit {
        Some(entry) => format!("Updated '{}' ({} → {})", entry.name, entry.start, entry.end),
        None => "Ready".to_string(),
    }
}
