pub mod cli;
pub mod config;
pub mod models;
pub mod store;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use models::Task;
pub use store::{DayView, TaskStore};
pub use utils::Profile;
