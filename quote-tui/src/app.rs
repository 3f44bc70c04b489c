//! Application state for the quote form.
//!
//! The dropdown model lives in [`SelectDropdown`]. [`PickerView`] is the sink
//! it renders into: it keeps the latest descriptor for the next frame and
//! hands announcements to the deferred [`Announcer`].

use std::time::Instant;

use ratatui::widgets::ListState;
use select_dropdown::{
    Announcement, Announcer, Catalog, DropdownOptions, Event, RenderDescriptor, SelectDropdown,
    ViewSink,
};

use crate::ui::theme::Theme;
use crate::ui::widgets::HitMap;

/// Which form control has keyboard focus.
///
/// Tab cycles chips, search, submit. `Chips` holds the index of the chip
/// whose remove control is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    Chips(usize),
    #[default]
    Search,
    Submit,
}

/// Feedback shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Terminal side of the dropdown: the last descriptor and the live region.
#[derive(Debug)]
pub struct PickerView {
    descriptor: RenderDescriptor,
    announcer: Announcer,
    renders: usize,
}

impl PickerView {
    fn new(descriptor: RenderDescriptor, announcer: Announcer) -> Self {
        Self {
            descriptor,
            announcer,
            renders: 0,
        }
    }

    pub fn descriptor(&self) -> &RenderDescriptor {
        &self.descriptor
    }

    pub fn live_text(&self) -> &str {
        self.announcer.live_text()
    }

    /// Number of descriptors received so far.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl ViewSink for PickerView {
    fn render(&mut self, view: &RenderDescriptor) {
        self.descriptor = view.clone();
        self.renders += 1;
    }

    fn announce(&mut self, announcement: Announcement) {
        self.announcer.schedule(announcement);
    }
}

pub struct App {
    pub(crate) dropdown: SelectDropdown,
    pub(crate) view: PickerView,
    pub(crate) focus: FormFocus,
    pub(crate) status: Option<StatusMessage>,
    pub(crate) list_state: ListState,
    pub(crate) hit_map: HitMap,
    pub(crate) theme: Theme,
}

impl App {
    pub fn new(catalog: &Catalog, options: DropdownOptions, theme: Theme) -> Self {
        let announcer = Announcer::new(options.announce_delay());
        let dropdown = SelectDropdown::new(catalog, options);
        let view = PickerView::new(dropdown.view(), announcer);

        Self {
            dropdown,
            view,
            focus: FormFocus::Search,
            status: None,
            list_state: ListState::default(),
            hit_map: HitMap::new(),
            theme,
        }
    }

    /// Feed one event to the dropdown. Returns `true` if it re-rendered.
    pub fn handle(&mut self, event: Event) -> bool {
        self.dropdown.handle_event(event, &mut self.view)
    }

    /// Validate the selection for submission.
    ///
    /// On success the selected labels are returned in selection order. On
    /// failure the validation message is shown and `None` is returned.
    pub fn submit(&mut self) -> Option<Vec<String>> {
        match self.dropdown.validate() {
            Ok(labels) => {
                let labels = labels.to_vec();
                tracing::info!(count = labels.len(), "Quote request submitted");
                self.status = Some(StatusMessage::Info(format!(
                    "Quote requested for {}",
                    labels.join(", ")
                )));
                Some(labels)
            }
            Err(e) => {
                tracing::info!("Submission rejected: {}", e);
                self.status = Some(StatusMessage::Error(e.to_string()));
                None
            }
        }
    }

    /// Publish a due announcement. Call once per frame.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Tick with an explicit clock (useful for testing).
    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.view.announcer.poll_at(now).is_some()
    }

    pub fn descriptor(&self) -> &RenderDescriptor {
        self.view.descriptor()
    }

    pub fn view(&self) -> &PickerView {
        &self.view
    }

    pub fn live_text(&self) -> &str {
        self.view.live_text()
    }

    pub fn has_pending_announcement(&self) -> bool {
        self.view.announcer.has_pending()
    }

    pub fn dropdown(&self) -> &SelectDropdown {
        &self.dropdown
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    /// Index of the focused chip, clamped to the current chips.
    pub fn focused_chip(&self) -> Option<usize> {
        match self.focus {
            FormFocus::Chips(index) => {
                let count = self.descriptor().chips.len();
                (count > 0).then(|| index.min(count - 1))
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use select_dropdown::Key;
    use std::time::Duration;

    fn app() -> App {
        App::new(
            &Catalog::default(),
            DropdownOptions::default(),
            Theme::dark(),
        )
    }

    #[test]
    fn test_initial_descriptor_is_closed() {
        let app = app();
        assert!(!app.descriptor().open);
        assert_eq!(app.descriptor().rows.len(), 9);
        assert_eq!(app.view().renders(), 0);
        assert_eq!(app.live_text(), "");
    }

    #[test]
    fn test_handle_updates_descriptor() {
        let mut app = app();
        assert!(app.handle(Event::Key(Key::Down)));
        assert!(app.descriptor().open);
        assert_eq!(app.descriptor().focused, Some(0));
        assert_eq!(app.view().renders(), 1);

        // Escape while closed is not an intent.
        app.handle(Event::Key(Key::Escape));
        assert!(!app.handle(Event::Key(Key::Escape)));
        assert_eq!(app.view().renders(), 2);
    }

    #[test]
    fn test_announcement_is_deferred() {
        let mut app = app();
        app.handle(Event::Input("can".into()));
        assert!(app.has_pending_announcement());
        assert_eq!(app.live_text(), "");

        assert!(app.tick_at(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.live_text(), "1 destination found.");
        assert!(!app.tick_at(Instant::now() + Duration::from_secs(2)));
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut app = app();
        assert_eq!(app.submit(), None);
        assert_eq!(
            app.status(),
            Some(&StatusMessage::Error(
                "Please select at least one destination".into()
            ))
        );

        app.handle(Event::ItemClick("Canada".into()));
        app.handle(Event::ItemClick("Austria".into()));
        assert_eq!(
            app.submit(),
            Some(vec!["Canada".to_string(), "Austria".to_string()])
        );
        assert!(matches!(app.status(), Some(StatusMessage::Info(_))));
    }

    #[test]
    fn test_preselected_catalog() {
        let catalog = Catalog {
            preselected: vec!["Bali [Indonesia]".into()],
            ..Catalog::default()
        };
        let mut app = App::new(&catalog, DropdownOptions::default(), Theme::dark());
        assert_eq!(app.descriptor().chips, vec!["Bali [Indonesia]"]);
        assert_eq!(app.submit(), Some(vec!["Bali [Indonesia]".to_string()]));
    }
}
