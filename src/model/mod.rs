pub mod roster;
pub mod shift;
pub mod time;
pub mod timeline;

pub use roster::{Roster, ShiftStore};
pub use shift::{Role, ShiftEntry};
pub use time::{to_minutes, to_time_string, TimeOfDay, MINUTES_PER_DAY};
pub use timeline::{ShiftGeometry, TimeScale};
