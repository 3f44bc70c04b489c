//! The view side of the dropdown.
//!
//! [`RenderDescriptor`] is a plain snapshot of everything a surface needs to
//! draw. It is produced from the model and handed to a [`ViewSink`]; nothing
//! ever flows back from the view into the model.

use crate::announce::Announcement;
use crate::candidates::CandidateStore;
use crate::focus::FocusCursor;
use crate::selection::SelectionSet;

/// One visible list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderDescriptor {
    pub open: bool,
    /// The search input text, exactly as typed.
    pub filter_term: String,
    pub rows: Vec<Row>,
    /// Draw a divider immediately before `rows[divider]`. Never `Some(0)`.
    pub divider: Option<usize>,
    pub focused: Option<usize>,
    /// Selected labels in chip order.
    pub chips: Vec<String>,
    /// Placeholder drawn instead of rows when nothing matches.
    pub placeholder: Option<String>,
}

impl RenderDescriptor {
    pub fn focused_label(&self) -> Option<&str> {
        self.focused
            .and_then(|i| self.rows.get(i))
            .map(|row| row.label.as_str())
    }
}

/// Project the model into a descriptor.
pub fn project(
    candidates: &CandidateStore,
    selection: &SelectionSet,
    cursor: &FocusCursor,
    open: bool,
    empty_message: &str,
) -> RenderDescriptor {
    let filtered = candidates.filtered();
    let rows = filtered
        .iter()
        .map(|label| Row {
            label: label.to_string(),
            selected: selection.has(label),
        })
        .collect();

    RenderDescriptor {
        open,
        filter_term: candidates.term().to_string(),
        rows,
        divider: filtered.divider_index(),
        focused: cursor.index(),
        chips: selection.to_ordered_list(),
        placeholder: filtered.is_empty().then(|| empty_message.to_string()),
    }
}

/// Surface that draws descriptors and voices announcements.
///
/// The dropdown calls [`ViewSink::render`] exactly once per dispatched intent,
/// followed by at most one [`ViewSink::announce`].
pub trait ViewSink {
    fn render(&mut self, view: &RenderDescriptor);

    fn announce(&mut self, announcement: Announcement);
}

/// Sink that keeps everything it receives. Handy for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub renders: Vec<RenderDescriptor>,
    pub announcements: Vec<Announcement>,
}

impl RecordingSink {
    pub fn last_render(&self) -> Option<&RenderDescriptor> {
        self.renders.last()
    }

    pub fn last_announcement(&self) -> Option<&str> {
        self.announcements.last().map(Announcement::as_str)
    }
}

impl ViewSink for RecordingSink {
    fn render(&mut self, view: &RenderDescriptor) {
        self.renders.push(view.clone());
    }

    fn announce(&mut self, announcement: Announcement) {
        self.announcements.push(announcement);
    }
}
