use tracing::info;

use super::interaction::{Edge, Grab, TimelineEditor};
use crate::model::{Roster, ShiftEntry};

/// Requests a rendered timeline row can make on behalf of the user.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineAction {
    DragStart { shift_id: String, x: f32 },
    ResizeStart { shift_id: String, edge: Edge, x: f32 },
    Remove { shift_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// A gesture is now live on the shift.
    Armed,
    /// The editor was busy or the shift was unknown.
    Ignored,
    Removed(ShiftEntry),
}

/// Route a row action into the editor or the roster.
pub fn apply_action(
    editor: &mut TimelineEditor,
    roster: &mut Roster,
    action: TimelineAction,
) -> ActionOutcome {
    let armed = match action {
        TimelineAction::DragStart { shift_id, x } => {
            editor.pointer_down(&*roster, &shift_id, Grab::Body, x)
        }
        TimelineAction::ResizeStart { shift_id, edge, x } => {
            editor.pointer_down(&*roster, &shift_id, Grab::Edge(edge), x)
        }
        TimelineAction::Remove { shift_id } => {
            return match roster.remove(&shift_id) {
                Some(entry) => {
                    info!(shift_id = %shift_id, name = %entry.name, "shift removed");
                    ActionOutcome::Removed(entry)
                }
                None => ActionOutcome::Ignored,
            };
        }
    };
    if armed {
        ActionOutcome::Armed
    } else {
        ActionOutcome::Ignored
    }
}
