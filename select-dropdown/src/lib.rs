//! Headless searchable multi-select dropdown.
//!
//! The widget state lives in [`SelectDropdown`]. Hosts translate their input
//! into [`Event`]s, and draw whatever [`RenderDescriptor`] they are handed
//! through their [`ViewSink`]. Announcements for assistive technology are
//! delivered with a short delay by an [`Announcer`].

pub mod announce;
pub mod candidates;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod focus;
pub mod intent;
pub mod render;
pub mod selection;

pub use announce::{Announcement, Announcer};
pub use candidates::{CandidateStore, FilteredSequence};
pub use config::{Catalog, DropdownOptions, DEFAULT_ANNOUNCE_DELAY_MS};
pub use dropdown::{DropdownState, SelectDropdown};
pub use error::{ConfigError, ConfigResult, SelectionError};
pub use focus::FocusCursor;
pub use intent::{normalize, Event, Intent, Key};
pub use render::{project, RecordingSink, RenderDescriptor, Row, ViewSink};
pub use selection::SelectionSet;
