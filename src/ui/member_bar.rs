use egui::{Color32, RichText, Ui};
use shift_timeline::model::Role;

use crate::app::ShiftApp;
use crate::ui::theme;

/// Render the row above the timeline: roster date, member name input and
/// the "Add Member" button.
pub fn show_member_bar(app: &mut ShiftApp, ui: &mut Ui) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{}  Timeline", egui_phosphor::regular::CLOCK))
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(12.0);

        let mut date = app.roster.date;
        if ui
            .add(egui_extras::DatePickerButton::new(&mut date).id_salt("roster_date"))
            .changed()
        {
            app.roster.date = date;
            app.roster.touch();
        }

        ui.separator();

        let name_edit = ui.add_sized(
            [200.0, 24.0],
            egui::TextEdit::singleline(&mut app.new_member_name).hint_text("Enter member name"),
        );
        egui::ComboBox::from_id_salt("new_member_role")
            .selected_text(app.new_member_role.label())
            .show_ui(ui, |ui| {
                for role in Role::ALL {
                    ui.selectable_value(&mut app.new_member_role, role, role.label());
                }
            });

        let btn = egui::Button::new(
            RichText::new(format!("{}  Add Member", egui_phosphor::regular::PLUS))
                .color(Color32::WHITE)
                .size(12.0),
        )
        .fill(theme::ACCENT)
        .rounding(egui::Rounding::same(5.0));
        let submitted = name_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add(btn).clicked() || submitted {
            app.add_member();
            name_edit.request_focus();
        }
    });
    ui.add_space(4.0);
}
