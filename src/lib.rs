//! Interactive 24-hour shift timeline: time/pixel mapping, drag and resize
//! gestures, and the constraints that keep every edited shift well-formed.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod model;

pub use error::{MalformedTimeError, Result, RosterError};
