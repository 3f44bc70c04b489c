use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::{FormFocus, StatusMessage};
use crate::ui::theme::Theme;

/// A key hint shown in the bottom line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub key: &'static str,
    pub label: &'static str,
}

impl Control {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Key hints for the current form state.
pub fn controls_for(open: bool, focus: FormFocus) -> Vec<Control> {
    let mut controls = Vec::new();
    if focus == FormFocus::Submit {
        controls.push(Control::new("Enter", "Request quote"));
        controls.push(Control::new("Tab", "Next"));
    } else if matches!(focus, FormFocus::Chips(_)) {
        controls.push(Control::new("\u{2190}/\u{2192}", "Move"));
        controls.push(Control::new("Del", "Remove"));
        controls.push(Control::new("Tab", "Back to search"));
    } else if open {
        controls.push(Control::new("\u{2191}/\u{2193}", "Move"));
        controls.push(Control::new("Enter", "Select"));
        controls.push(Control::new("Esc", "Close"));
        controls.push(Control::new("Tab", "Next"));
    } else {
        controls.push(Control::new("Type", "Search"));
        controls.push(Control::new("\u{2193}", "Open"));
        controls.push(Control::new("Tab", "Next"));
    }
    controls.push(Control::new("Ctrl+S", "Submit"));
    controls.push(Control::new("Ctrl+C", "Quit"));
    controls
}

/// Three lines: the live announcement, the status message and key hints.
pub struct StatusBar<'a> {
    pub live_text: &'a str,
    pub message: Option<&'a StatusMessage>,
    pub controls: &'a [Control],
    pub theme: &'a Theme,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut lines = Vec::with_capacity(3);

        lines.push(Line::from(Span::styled(
            self.live_text,
            Style::default()
                .fg(theme.announcement)
                .add_modifier(Modifier::ITALIC),
        )));

        lines.push(match self.message {
            Some(StatusMessage::Error(text)) => Line::from(Span::styled(
                text.as_str(),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )),
            Some(StatusMessage::Info(text)) => Line::from(Span::styled(
                text.as_str(),
                Style::default().fg(theme.row_selected_marker),
            )),
            None => Line::raw(""),
        });

        let mut hints = Vec::with_capacity(self.controls.len() * 2);
        for control in self.controls {
            hints.push(Span::styled(
                format!("{} ", control.key),
                Style::default()
                    .fg(theme.key_hint)
                    .add_modifier(Modifier::BOLD),
            ));
            hints.push(Span::styled(
                format!("{}  ", control.label),
                Style::default().fg(theme.muted),
            ));
        }
        lines.push(Line::from(hints));

        Paragraph::new(lines).render(area, buf);
    }
}
