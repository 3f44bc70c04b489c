use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use super::hit_map::{HitMap, HitTarget};
use crate::ui::theme::Theme;

const REMOVE_GLYPH: &str = "\u{00d7}";
const EMPTY_TEXT: &str = "No destinations selected";

/// Where one chip lands on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipPlacement {
    /// Text drawn inside the chip (the label, possibly shortened).
    pub text: String,
    pub label: String,
    pub area: Rect,
    /// The single cell holding the remove glyph.
    pub remove: Rect,
}

/// Flow chips left to right, wrapping onto new lines.
///
/// A chip is drawn as ` label × ` and chips are separated by one blank cell.
/// Labels too long for the row are shortened with `…`.
pub fn layout_chips(chips: &[String], area: Rect) -> Vec<ChipPlacement> {
    let mut placements = Vec::with_capacity(chips.len());
    if area.width < 5 {
        return placements;
    }

    let mut x = area.x;
    let mut y = area.y;
    for label in chips {
        let text = fit_label(label, area.width.saturating_sub(4) as usize);
        let width = Span::raw(text.as_str()).width() as u16 + 4;

        if x > area.x && x + width > area.right() {
            x = area.x;
            y += 1;
        }

        placements.push(ChipPlacement {
            label: label.clone(),
            area: Rect::new(x, y, width, 1),
            remove: Rect::new(x + width - 2, y, 1, 1),
            text,
        });
        x += width + 1;
    }
    placements
}

/// Number of lines the chips need at `width`.
pub fn chips_height(chips: &[String], width: u16) -> u16 {
    let area = Rect::new(0, 0, width, u16::MAX);
    layout_chips(chips, area)
        .last()
        .map_or(1, |last| last.area.y + 1)
}

fn fit_label(label: &str, max_width: usize) -> String {
    if Span::raw(label).width() <= max_width {
        return label.to_string();
    }
    let mut text = String::new();
    for ch in label.chars() {
        let mut candidate = text.clone();
        candidate.push(ch);
        if Span::raw(candidate.as_str()).width() + 1 > max_width {
            break;
        }
        text = candidate;
    }
    text.push('\u{2026}');
    text
}

/// Selected labels drawn as removable chips.
///
/// Chips that do not fit in `area` are counted in a trailing `+N more`
/// marker; the form sizes the area so this only happens on tiny terminals.
pub struct ChipsWidget<'a> {
    pub chips: &'a [String],
    /// Chip whose remove control has keyboard focus.
    pub focused: Option<usize>,
    pub theme: &'a Theme,
    pub hit_map: &'a mut HitMap,
}

impl Widget for ChipsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        if self.chips.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                EMPTY_TEXT,
                Style::default().fg(self.theme.muted),
            );
            return;
        }

        let chip_style = Style::default()
            .fg(self.theme.chip_text)
            .bg(self.theme.chip_bg);
        let remove_style = chip_style
            .fg(self.theme.chip_remove)
            .add_modifier(Modifier::BOLD);

        let placements = layout_chips(self.chips, area);
        let (shown, marker) = fit_overflow(&placements, area);

        for (i, chip) in placements.into_iter().take(shown).enumerate() {
            let focused = self.focused == Some(i);
            let (style, remove) = if focused {
                (
                    chip_style.add_modifier(Modifier::REVERSED),
                    remove_style.add_modifier(Modifier::REVERSED),
                )
            } else {
                (chip_style, remove_style)
            };
            buf.set_string(chip.area.x, chip.area.y, format!(" {} ", chip.text), style);
            buf.set_string(chip.remove.x, chip.remove.y, REMOVE_GLYPH, remove);
            buf.set_string(chip.remove.x + 1, chip.remove.y, " ", style);
            self.hit_map.push(chip.remove, HitTarget::ChipRemove(chip.label));
        }

        if let Some((x, y, text)) = marker {
            buf.set_string(x, y, text, Style::default().fg(self.theme.muted));
        }
    }
}

/// How many placements fit in `area`, and where the `+N more` marker goes.
fn fit_overflow(
    placements: &[ChipPlacement],
    area: Rect,
) -> (usize, Option<(u16, u16, String)>) {
    let fits = placements
        .iter()
        .take_while(|c| c.area.y < area.bottom())
        .count();
    if fits == placements.len() {
        return (fits, None);
    }

    let last_line = area.bottom() - 1;
    let mut shown = fits;
    loop {
        let text = format!("+{} more", placements.len() - shown);
        let width = Span::raw(text.as_str()).width() as u16;
        let x = placements[..shown]
            .last()
            .filter(|c| c.area.y == last_line)
            .map_or(area.x, |c| c.area.right() + 1);
        if shown == 0 || x + width <= area.right() {
            return (shown, Some((x, last_line, text)));
        }
        shown -= 1;
    }
}
