//! Sessions: pacing engine transitions for a presentation layer.
//!
//! - [`Scheduler`]: generation-tagged delayed tasks, caller-supplied clock
//! - [`GameSession`]: engine + scheduler; arms mismatch reverts and win
//!   announcements, drops tasks that belong to an earlier game

pub mod controller;
pub mod scheduler;

pub use controller::{win_message, GameSession, Notice, WIN_TITLE};
pub use scheduler::{ScheduledTask, Scheduler, Task, TaskId};
