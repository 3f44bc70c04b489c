//! The dropdown state machine.
//!
//! [`SelectDropdown`] owns the candidate store, the selection, the focus cursor
//! and the open flag. Hosts feed it [`Event`]s (or [`Intent`]s directly); each
//! intent is applied in full, then the [`ViewSink`] receives one render and at
//! most one announcement.

use crate::announce::Announcement;
use crate::candidates::{CandidateStore, FilteredSequence};
use crate::config::{Catalog, DropdownOptions};
use crate::error::SelectionError;
use crate::focus::FocusCursor;
use crate::intent::{normalize, Event, Intent};
use crate::render::{project, RenderDescriptor, ViewSink};
use crate::selection::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub struct SelectDropdown {
    candidates: CandidateStore,
    selection: SelectionSet,
    cursor: FocusCursor,
    state: DropdownState,
    options: DropdownOptions,
}

impl SelectDropdown {
    /// Create a closed dropdown over `catalog`, with its preselected labels
    /// already chosen.
    pub fn new(catalog: &Catalog, options: DropdownOptions) -> Self {
        let candidates = CandidateStore::new(
            catalog.destinations.iter().cloned(),
            catalog.broad_regions.iter().cloned(),
        );
        let mut selection = SelectionSet::new();
        for label in &catalog.preselected {
            if candidates.contains(label) {
                selection.add(label);
            } else {
                tracing::warn!(label = %label, "Ignoring preselected label outside the catalog");
            }
        }

        tracing::debug!(
            candidates = candidates.all().len(),
            preselected = selection.len(),
            close_on_select = options.close_on_select,
            "Dropdown created"
        );

        Self {
            candidates,
            selection,
            cursor: FocusCursor::new(),
            state: DropdownState::Closed,
            options,
        }
    }

    /// Create a dropdown over bare labels with default options.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(&Catalog::from_labels(labels), DropdownOptions::default())
    }

    /// Normalize a raw event and dispatch the resulting intent, if any.
    /// Returns `false` when the event maps to nothing and no render happened.
    pub fn handle_event(&mut self, event: Event, sink: &mut impl ViewSink) -> bool {
        match normalize(event, self.is_open(), self.cursor.index()) {
            Some(intent) => {
                self.dispatch(intent, sink);
                true
            }
            None => false,
        }
    }

    /// Apply `intent`, then render once and announce at most once.
    pub fn dispatch(&mut self, intent: Intent, sink: &mut impl ViewSink) {
        let announcement = self.apply(intent);
        sink.render(&self.view());
        if let Some(announcement) = announcement {
            sink.announce(announcement);
        }
    }

    /// Apply `intent` to the model and return the announcement it produces.
    pub fn apply(&mut self, intent: Intent) -> Option<Announcement> {
        let name = intent.name();
        let announcement = match intent {
            Intent::Open => self.open(),
            Intent::Close => {
                self.close();
                None
            }
            Intent::Toggle => {
                if self.is_open() {
                    self.close();
                    None
                } else {
                    self.open()
                }
            }
            Intent::SetFilter(term) => self.set_filter(&term),
            Intent::MoveFocus(delta) => {
                if self.is_open() {
                    self.cursor.move_by(delta, self.candidates.filtered().len());
                }
                None
            }
            Intent::SelectAt(index) => match self.candidates.filtered().get(index).map(str::to_string) {
                Some(label) => self.commit(&label),
                None => {
                    tracing::warn!(index, "Ignoring select of out-of-range row");
                    None
                }
            },
            Intent::Select(label) => {
                if self.candidates.contains(&label) {
                    self.commit(&label)
                } else {
                    tracing::warn!(label = %label, "Ignoring select of unknown label");
                    None
                }
            }
            Intent::Remove(label) => {
                if self.selection.remove(&label) {
                    Some(Announcement::removed(
                        &label,
                        self.selection.len(),
                        &self.options.noun,
                    ))
                } else {
                    tracing::debug!(label = %label, "Remove of unselected label ignored");
                    None
                }
            }
        };

        debug_assert!(self.invariant_holds(), "focus cursor out of range");
        tracing::debug!(
            intent = name,
            state = ?self.state,
            cursor = self.cursor.as_signed(),
            matches = self.candidates.filtered().len(),
            selected = self.selection.len(),
            "Intent applied"
        );

        announcement
    }

    fn open(&mut self) -> Option<Announcement> {
        if self.is_open() {
            return None;
        }
        let available = self.candidates.filtered().len();
        self.state = DropdownState::Open;
        self.cursor.reset_to(available);
        Some(Announcement::opened(available, &self.options.noun))
    }

    fn close(&mut self) {
        self.state = DropdownState::Closed;
        self.cursor.clear();
    }

    fn set_filter(&mut self, term: &str) -> Option<Announcement> {
        let matches = self.candidates.set_filter(term).len();
        self.state = DropdownState::Open;
        self.cursor.reset_to(matches);
        Some(Announcement::found(matches, &self.options.noun))
    }

    fn commit(&mut self, label: &str) -> Option<Announcement> {
        if !self.selection.add(label) {
            return Some(Announcement::already_selected(label));
        }

        if self.options.clear_filter_on_select && !self.candidates.term().is_empty() {
            let matches = self.candidates.set_filter("").len();
            if self.is_open() {
                self.cursor.reset_to(matches);
            }
        }

        if self.options.close_on_select {
            self.close();
        }

        Some(Announcement::selected(
            label,
            self.selection.len(),
            &self.options.noun,
        ))
    }

    /// Closed means no focus; open means focus exactly when there are rows.
    pub fn invariant_holds(&self) -> bool {
        let len = self.candidates.filtered().len();
        match (self.state, self.cursor.index()) {
            (DropdownState::Closed, focused) => focused.is_none(),
            (DropdownState::Open, None) => len == 0,
            (DropdownState::Open, Some(i)) => i < len,
        }
    }

    pub fn view(&self) -> RenderDescriptor {
        project(
            &self.candidates,
            &self.selection,
            &self.cursor,
            self.is_open(),
            &self.options.empty_message,
        )
    }

    /// The selection if it is non-empty, for form submission.
    pub fn validate(&self) -> Result<&[String], SelectionError> {
        if self.selection.is_empty() {
            Err(SelectionError::Empty {
                noun: self.options.noun.clone(),
            })
        } else {
            Ok(self.selection.as_slice())
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn filter_term(&self) -> &str {
        self.candidates.term()
    }

    pub fn filtered(&self) -> FilteredSequence<'_> {
        self.candidates.filtered()
    }

    pub fn selected(&self) -> &[String] {
        self.selection.as_slice()
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }
}
