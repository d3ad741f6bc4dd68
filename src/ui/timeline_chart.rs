use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use shift_timeline::engine::{apply_action, ActionOutcome, Edge, MoveOutcome, TimelineAction, TimelineEditor};
use shift_timeline::model::{Role, Roster, ShiftEntry, TimeScale};

use crate::ui::theme;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const MEMBER_WIDTH: f32 = theme::MEMBER_COLUMN_WIDTH;
const HANDLE_WIDTH: f32 = theme::HANDLE_WIDTH;
const REMOVE_SIZE: f32 = 16.0;

/// Result details from interactions in the timeline.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// Latest accepted edit this frame.
    pub updated: Option<ShiftEntry>,
    pub removed: Option<ShiftEntry>,
    pub gesture_ended: bool,
}

/// Render the shift timeline and feed pointer events into `editor`.
pub fn show_timeline_chart(
    roster: &mut Roster,
    editor: &mut TimelineEditor,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let scale = *editor.scale();
    let available = ui.available_size();
    let chart_width = (MEMBER_WIDTH + scale.total_width()).max(available.x);
    let chart_height = HEADER_HEIGHT + roster.entries.len() as f32 * (ROW_HEIGHT + ROW_PADDING) + 40.0;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::hover(),
            );
            let origin = response.rect.min;
            let timeline_x = origin.x + MEMBER_WIDTH;
            let mut actions = Vec::new();

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);
            draw_time_scale(&painter, origin, &scale, chart_height.max(available.y));

            for (i, entry) in roster.entries.iter().enumerate() {
                let y = origin.y + HEADER_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_PADDING);
                draw_member_cell(&painter, origin, y, entry, i);

                let bar_rect = draw_shift_bar(&painter, timeline_x, &scale, entry, y + ROW_PADDING, i);
                let bar_response = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("shift-bar", &entry.id)),
                    Sense::click_and_drag(),
                );
                let left_response = ui.interact(
                    handle_rect(bar_rect, bar_rect.left()),
                    ui.make_persistent_id(("shift-resize-start", &entry.id)),
                    Sense::drag(),
                );
                let right_response = ui.interact(
                    handle_rect(bar_rect, bar_rect.right()),
                    ui.make_persistent_id(("shift-resize-end", &entry.id)),
                    Sense::drag(),
                );

                if let Some(remove_rect) = remove_rect(bar_rect) {
                    let remove_response = ui.interact(
                        remove_rect,
                        ui.make_persistent_id(("shift-remove", &entry.id)),
                        Sense::click(),
                    );
                    let color = if remove_response.hovered() {
                        theme::REMOVE_HOVER
                    } else {
                        theme::TEXT_ON_BAR
                    };
                    painter.text(
                        remove_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        egui_phosphor::regular::X,
                        theme::font_bar(),
                        color,
                    );
                    if remove_response.clicked() {
                        actions.push(TimelineAction::Remove { shift_id: entry.id.clone() });
                    }
                }

                let press_x = ui
                    .input(|i| i.pointer.press_origin())
                    .or_else(|| bar_response.interact_pointer_pos())
                    .map(|p| p.x)
                    .unwrap_or(0.0);
                if left_response.drag_started() {
                    actions.push(TimelineAction::ResizeStart {
                        shift_id: entry.id.clone(),
                        edge: Edge::Start,
                        x: press_x,
                    });
                } else if right_response.drag_started() {
                    actions.push(TimelineAction::ResizeStart {
                        shift_id: entry.id.clone(),
                        edge: Edge::End,
                        x: press_x,
                    });
                } else if bar_response.drag_started() {
                    actions.push(TimelineAction::DragStart {
                        shift_id: entry.id.clone(),
                        x: press_x,
                    });
                }

                // Handle affordances
                if left_response.hovered() || right_response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
                } else if bar_response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }
                draw_handles(&painter, bar_rect);

                if editor.is_idle() && bar_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("shift-tip", &entry.id)),
                        |ui| {
                            ui.strong(&entry.name);
                            ui.label(format!("{} → {}", entry.start, entry.end));
                            let minutes = entry.duration_minutes();
                            ui.label(format!("{}h {:02}m · {}", minutes / 60, minutes % 60, entry.role.label()));
                        },
                    );
                }
            }

            for action in actions {
                if let ActionOutcome::Removed(entry) = apply_action(editor, roster, action) {
                    interaction.removed = Some(entry);
                }
            }

            // Pointer tracking for the live gesture, if any.
            if !editor.is_idle() {
                let container = response.rect.intersect(ui.clip_rect());
                let (hover, released, down) = ui.input(|i| {
                    (i.pointer.hover_pos(), i.pointer.any_released(), i.pointer.primary_down())
                });
                if released || !down {
                    interaction.gesture_ended = editor.pointer_up();
                } else {
                    match hover {
                        Some(pos) if container.contains(pos) => {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                            match editor.pointer_move(roster, pos.x) {
                                MoveOutcome::Updated(entry) => interaction.updated = Some(entry),
                                MoveOutcome::ShiftMissing => interaction.gesture_ended = true,
                                MoveOutcome::Rejected(_) | MoveOutcome::Idle => {}
                            }
                        }
                        _ => interaction.gesture_ended = editor.pointer_leave(),
                    }
                }
            }
        });

    interaction
}

fn handle_rect(bar_rect: Rect, x: f32) -> Rect {
    Rect::from_min_max(
        Pos2::new(x - HANDLE_WIDTH * 0.5, bar_rect.top()),
        Pos2::new(x + HANDLE_WIDTH * 0.5, bar_rect.bottom()),
    )
}

/// Remove button sits just inside the end handle, when the bar has room.
fn remove_rect(bar_rect: Rect) -> Option<Rect> {
    if bar_rect.width() < REMOVE_SIZE * 4.0 {
        return None;
    }
    Some(Rect::from_center_size(
        Pos2::new(bar_rect.right() - HANDLE_WIDTH - REMOVE_SIZE * 0.5 - 2.0, bar_rect.center().y),
        Vec2::splat(REMOVE_SIZE),
    ))
}

fn draw_time_scale(painter: &egui::Painter, origin: Pos2, scale: &TimeScale, height: f32) {
    let width = MEMBER_WIDTH + scale.total_width();
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.text(
        Pos2::new(origin.x + 10.0, origin.y + HEADER_HEIGHT / 2.0),
        egui::Align2::LEFT_CENTER,
        "Members",
        theme::font_header(),
        theme::TEXT_PRIMARY,
    );

    let timeline_x = origin.x + MEMBER_WIDTH;
    for (x, label) in scale.hour_ticks() {
        let x = timeline_x + x;
        painter.line_segment(
            [Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        let half = x + scale.minutes_to_x(30);
        painter.line_segment(
            [Pos2::new(half, origin.y + HEADER_HEIGHT), Pos2::new(half, origin.y + height)],
            Stroke::new(0.5, theme::GRID_LINE_HALF),
        );
        painter.text(
            Pos2::new(x + 4.0, origin.y + HEADER_HEIGHT / 2.0),
            egui::Align2::LEFT_CENTER,
            label,
            theme::font_header(),
            theme::TEXT_SECONDARY,
        );
    }

    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );
    painter.line_segment(
        [Pos2::new(timeline_x, origin.y), Pos2::new(timeline_x, origin.y + height)],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );
}

fn draw_member_cell(painter: &egui::Painter, origin: Pos2, y: f32, entry: &ShiftEntry, index: usize) {
    let row_bg = if index % 2 == 0 { theme::BG_PANEL } else { theme::BG_DARK };
    painter.rect_filled(
        Rect::from_min_size(Pos2::new(origin.x, y), Vec2::new(MEMBER_WIDTH, ROW_HEIGHT + ROW_PADDING)),
        0.0,
        row_bg,
    );
    let clipped = painter.with_clip_rect(Rect::from_min_size(
        Pos2::new(origin.x, y),
        Vec2::new(MEMBER_WIDTH - 4.0, ROW_HEIGHT),
    ));
    clipped.text(
        Pos2::new(origin.x + 10.0, y + ROW_HEIGHT / 2.0),
        egui::Align2::LEFT_CENTER,
        &entry.name,
        theme::font_member(),
        theme::TEXT_PRIMARY,
    );
    if entry.role == Role::Manager {
        painter.circle_filled(
            Pos2::new(origin.x + 4.0, y + ROW_HEIGHT / 2.0),
            2.5,
            theme::MANAGER_COLOR,
        );
    }
}

fn draw_shift_bar(
    painter: &egui::Painter,
    timeline_x: f32,
    scale: &TimeScale,
    entry: &ShiftEntry,
    y: f32,
    index: usize,
) -> Rect {
    let geometry = scale.shift_geometry(entry);
    let inset = theme::BAR_INSET;
    let bar_rect = Rect::from_min_size(
        Pos2::new(timeline_x + geometry.left, y + inset),
        Vec2::new(geometry.width.max(6.0), ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);
    let color = match entry.role {
        Role::Manager => theme::MANAGER_COLOR,
        Role::PartTime => theme::shift_color(index),
    };

    painter.rect_filled(bar_rect.translate(Vec2::new(1.0, 2.0)), rounding, Color32::from_black_alpha(35));
    painter.rect_filled(bar_rect, rounding, color);

    if bar_rect.width() > 90.0 {
        let clipped = painter.with_clip_rect(bar_rect.shrink2(Vec2::new(HANDLE_WIDTH, 0.0)));
        clipped.text(
            Pos2::new(bar_rect.left() + HANDLE_WIDTH + 4.0, bar_rect.center().y),
            egui::Align2::LEFT_CENTER,
            format!("{} - {}", entry.start, entry.end),
            theme::font_bar(),
            theme::TEXT_ON_BAR,
        );
    }

    bar_rect
}

fn draw_handles(painter: &egui::Painter, bar_rect: Rect) {
    let handle_h = bar_rect.height() * 0.55;
    let handle_y = bar_rect.center().y - handle_h / 2.0;
    for x in [bar_rect.left() + 2.0, bar_rect.right() - 6.0] {
        painter.rect_filled(
            Rect::from_min_size(Pos2::new(x, handle_y), Vec2::new(4.0, handle_h)),
            Rounding::same(2.0),
            theme::HANDLE_COLOR,
        );
    }
}
