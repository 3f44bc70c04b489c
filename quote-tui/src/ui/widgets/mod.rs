pub mod chips;
pub mod hit_map;
pub mod picker;
pub mod status_bar;

pub use chips::{chips_height, ChipsWidget};
pub use hit_map::{HitMap, HitTarget};
pub use picker::{list_height, PickerWidget, INPUT_HEIGHT};
pub use status_bar::{controls_for, Control, StatusBar};
