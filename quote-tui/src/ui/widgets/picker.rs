use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use select_dropdown::RenderDescriptor;

use super::hit_map::{HitMap, HitTarget};
use crate::ui::theme::Theme;

const SEARCH_PLACEHOLDER: &str = "Type to search destinations...";
const SELECTED_MARK: &str = " \u{2713}";

/// Height of the search input including its border.
pub const INPUT_HEIGHT: u16 = 3;

const TOGGLE_WIDTH: u16 = 5;

/// Position of `row` once the divider line is counted.
fn display_index(row: usize, divider: Option<usize>) -> usize {
    match divider {
        Some(d) if row >= d => row + 1,
        _ => row,
    }
}

/// Lines the open list wants, borders included, capped at `max`.
pub fn list_height(view: &RenderDescriptor, max: u16) -> u16 {
    if !view.open {
        return 0;
    }
    let lines = if view.rows.is_empty() {
        1
    } else {
        view.rows.len() + usize::from(view.divider.is_some())
    };
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(max)
}

/// Search input, toggle button and (when open) the filtered list.
pub struct PickerWidget<'a> {
    pub view: &'a RenderDescriptor,
    pub input_focused: bool,
    pub theme: &'a Theme,
    pub list_state: &'a mut ListState,
    pub hit_map: &'a mut HitMap,
}

impl Widget for PickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < INPUT_HEIGHT {
            return;
        }
        let theme = self.theme;

        let input_area = Rect {
            height: INPUT_HEIGHT,
            ..area
        };
        let toggle_width = TOGGLE_WIDTH.min(input_area.width);
        let search_area = Rect {
            width: input_area.width - toggle_width,
            ..input_area
        };
        let toggle_area = Rect {
            x: search_area.right(),
            width: toggle_width,
            ..input_area
        };

        // === Search input ===
        let border_style = if self.input_focused {
            Style::default().fg(theme.border_focused)
        } else {
            Style::default().fg(theme.border)
        };
        let input_line = if self.view.filter_term.is_empty() && !self.input_focused {
            Line::from(Span::styled(
                SEARCH_PLACEHOLDER,
                Style::default().fg(theme.input_placeholder),
            ))
        } else {
            let mut spans = vec![
                Span::styled("> ", Style::default().fg(theme.title)),
                Span::styled(
                    self.view.filter_term.as_str(),
                    Style::default().fg(theme.input_text),
                ),
            ];
            if self.input_focused {
                spans.push(Span::styled("_", Style::default().fg(theme.muted)));
            }
            Line::from(spans)
        };
        Paragraph::new(input_line)
            .block(
                Block::default()
                    .title(" Destinations ")
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(search_area, buf);
        self.hit_map.push(search_area, HitTarget::Input);

        // === Toggle button ===
        let arrow = if self.view.open { "\u{25b2}" } else { "\u{25bc}" };
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", arrow),
            Style::default().fg(theme.toggle).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .render(toggle_area, buf);
        self.hit_map.push(toggle_area, HitTarget::Toggle);

        if !self.view.open {
            return;
        }

        // === Filtered list ===
        let below = area.height - INPUT_HEIGHT;
        let height = list_height(self.view, below);
        if height < 3 {
            return;
        }
        let list_area = Rect {
            y: area.y + INPUT_HEIGHT,
            height,
            ..area
        };
        Clear.render(list_area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused));
        let inner = block.inner(list_area);
        block.render(list_area, buf);
        self.hit_map.push(list_area, HitTarget::Inert);

        if let Some(placeholder) = &self.view.placeholder {
            Paragraph::new(Line::from(Span::styled(
                placeholder.as_str(),
                Style::default()
                    .fg(theme.placeholder)
                    .add_modifier(Modifier::ITALIC),
            )))
            .render(inner, buf);
            return;
        }

        let mut items = Vec::with_capacity(self.view.rows.len() + 1);
        for (i, row) in self.view.rows.iter().enumerate() {
            if self.view.divider == Some(i) {
                items.push(ListItem::new(Line::from(Span::styled(
                    "\u{2500}".repeat(inner.width as usize),
                    Style::default().fg(theme.divider),
                ))));
            }
            let mut spans = vec![Span::styled(
                row.label.as_str(),
                Style::default().fg(theme.row_text),
            )];
            if row.selected {
                spans.push(Span::styled(
                    SELECTED_MARK,
                    Style::default()
                        .fg(theme.row_selected_marker)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            items.push(ListItem::new(Line::from(spans)));
        }

        let divider = self.view.divider;
        self.list_state
            .select(self.view.focused.map(|f| display_index(f, divider)));

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.row_focused)
                    .bg(theme.row_focused_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("\u{25b6} ");
        StatefulWidget::render(list, inner, buf, self.list_state);

        // Rows scrolled into view are clickable.
        let offset = self.list_state.offset();
        let visible = inner.height as usize;
        for (i, row) in self.view.rows.iter().enumerate() {
            let shown = display_index(i, divider);
            if shown < offset || shown - offset >= visible {
                continue;
            }
            let row_area = Rect {
                y: inner.y + (shown - offset) as u16,
                height: 1,
                ..inner
            };
            self.hit_map.push(row_area, HitTarget::Item(row.label.clone()));
        }
    }
}
