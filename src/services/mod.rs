//! Application services: the task session and the reminder machinery.

mod reminder;
mod session;

pub use reminder::{
    FRESHLY_OVERDUE_WINDOW_MS, ReminderPrompt, ReminderScan, ReminderScheduler, ReminderTick,
};
pub use session::{Notice, TaskSession};
