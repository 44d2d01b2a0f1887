pub mod efficiency;
pub mod enums;
pub mod task;
pub mod views;

pub use efficiency::calculate_efficiency;
pub use enums::{cycle_option, Category, Priority, Theme, UiMode};
pub use task::{Task, TaskDraft, TaskId};
pub use views::{build_dashboard, Dashboard, TaskFilter};
