pub mod app;
pub mod config;
pub mod ui;

pub use app::{App, FormFocus, PickerView, StatusMessage};
pub use ui::widgets;
