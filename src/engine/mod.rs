pub mod actions;
pub mod constraints;
pub mod interaction;

pub use actions::{apply_action, ActionOutcome, TimelineAction};
pub use constraints::{Rejection, ShiftConstraints, Verdict, MIN_SHIFT_MINUTES};
pub use interaction::{
    DragSnapshot, Edge, Grab, InteractionState, MoveOutcome, ResizeSnapshot, TimelineEditor,
};
