//! Layout of the quote request form.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FormFocus};
use crate::ui::widgets::{
    chips_height, controls_for, ChipsWidget, HitTarget, PickerWidget, StatusBar, INPUT_HEIGHT,
};

const SUBMIT_WIDTH: u16 = 22;

/// Label, spacer, submit button and status bar.
const FIXED_LINES: u16 = 1 + 1 + 3 + 3;

/// Draw the whole form and rebuild the pointer hit map.
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hit_map.clear();

    let theme = &app.theme;
    let view = app.view.descriptor();
    let search_focused = app.focus == FormFocus::Search;
    let focused_chip = app.focused_chip();

    let outer = Block::default()
        .title(" Request a Travel Quote ")
        .title_style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    // Chips take what they need; the picker keeps at least its input line.
    let spare = inner.height.saturating_sub(FIXED_LINES + INPUT_HEIGHT).max(1);
    let chip_lines = chips_height(&view.chips, inner.width).min(spare);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Label
            Constraint::Length(chip_lines), // Chips
            Constraint::Length(1),          // Spacer
            Constraint::Min(INPUT_HEIGHT),  // Picker
            Constraint::Length(3),          // Submit button
            Constraint::Length(3),          // Status
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Where would you like to go?",
            Style::default()
                .fg(theme.row_text)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    f.render_widget(
        ChipsWidget {
            chips: &view.chips,
            focused: focused_chip,
            theme,
            hit_map: &mut app.hit_map,
        },
        chunks[1],
    );

    f.render_widget(
        PickerWidget {
            view,
            input_focused: search_focused,
            theme,
            list_state: &mut app.list_state,
            hit_map: &mut app.hit_map,
        },
        chunks[3],
    );

    // === Submit button ===
    let submit_area = Rect {
        width: SUBMIT_WIDTH.min(chunks[4].width),
        ..chunks[4]
    };
    let submit_style = if app.focus == FormFocus::Submit {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled("Get a quote", submit_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(submit_style),
            ),
        submit_area,
    );
    app.hit_map.push(submit_area, HitTarget::Submit);

    let controls = controls_for(view.open, app.focus);
    f.render_widget(
        StatusBar {
            live_text: app.view.live_text(),
            message: app.status.as_ref(),
            controls: &controls,
            theme,
        },
        chunks[5],
    );
}
