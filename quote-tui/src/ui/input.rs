use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use select_dropdown::{Event, Key};

use crate::app::{App, FormFocus};
use crate::ui::widgets::HitTarget;

/// What the render loop should do after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
    /// The form was submitted with these labels.
    Submit(Vec<String>),
}

/// Translate a key pressed in the search input into a dropdown event.
///
/// Text keys produce the full new input value, the way a text field reports
/// its contents. Tab is left to the caller since it also moves form focus.
pub fn key_to_event(term: &str, key: KeyEvent) -> Option<Event> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => {
            let mut text = term.to_string();
            text.push(c);
            Some(Event::Input(text))
        }
        KeyCode::Backspace if !term.is_empty() => {
            let mut text = term.to_string();
            text.pop();
            Some(Event::Input(text))
        }
        KeyCode::Up => Some(Event::Key(Key::Up)),
        KeyCode::Down => Some(Event::Key(Key::Down)),
        KeyCode::Enter => Some(Event::Key(Key::Enter)),
        KeyCode::Esc => Some(Event::Key(Key::Escape)),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> AppAction {
    if key.kind != KeyEventKind::Press {
        return AppAction::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppAction::Quit,
            KeyCode::Char('s') => {
                app.handle(Event::OutsideClick);
                try_submit(app)
            }
            _ => AppAction::Continue,
        };
    }

    app.clear_status();

    match app.focus() {
        FormFocus::Search => match key.code {
            KeyCode::Tab => {
                app.handle(Event::Key(Key::Tab));
                app.set_focus(FormFocus::Submit);
            }
            KeyCode::BackTab => {
                app.handle(Event::Key(Key::Tab));
                let chips = app.descriptor().chips.len();
                app.set_focus(if chips > 0 {
                    FormFocus::Chips(chips - 1)
                } else {
                    FormFocus::Submit
                });
            }
            _ => {
                if let Some(event) = key_to_event(app.dropdown().filter_term(), key) {
                    app.handle(event);
                }
            }
        },
        FormFocus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => return try_submit(app),
            KeyCode::Tab if !app.descriptor().chips.is_empty() => {
                app.set_focus(FormFocus::Chips(0));
            }
            KeyCode::Tab | KeyCode::BackTab => focus_search(app),
            KeyCode::Char(c) => type_into_search(app, c),
            _ => {}
        },
        FormFocus::Chips(_) => handle_chip_key(app, key),
    }

    AppAction::Continue
}

/// Keys while a chip's remove control has focus.
fn handle_chip_key(app: &mut App, key: KeyEvent) {
    let Some(index) = app.focused_chip() else {
        // Every chip was removed out from under the focus.
        app.set_focus(FormFocus::Search);
        return;
    };
    let count = app.descriptor().chips.len();

    match key.code {
        KeyCode::Left => app.set_focus(FormFocus::Chips(index.saturating_sub(1))),
        KeyCode::Right => app.set_focus(FormFocus::Chips((index + 1).min(count - 1))),
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char(' ') => {
            let label = app.descriptor().chips[index].clone();
            app.handle(Event::ChipRemove(label));
            match app.descriptor().chips.len() {
                0 => app.set_focus(FormFocus::Search),
                left => app.set_focus(FormFocus::Chips(index.min(left - 1))),
            }
        }
        KeyCode::Tab => focus_search(app),
        KeyCode::BackTab => app.set_focus(FormFocus::Submit),
        KeyCode::Esc => app.set_focus(FormFocus::Search),
        KeyCode::Char(c) => type_into_search(app, c),
        _ => {}
    }
}

fn focus_search(app: &mut App) {
    app.set_focus(FormFocus::Search);
    app.handle(Event::FocusIn);
}

/// Typing away from the search input goes back to it.
fn type_into_search(app: &mut App, c: char) {
    app.set_focus(FormFocus::Search);
    let mut text = app.dropdown().filter_term().to_string();
    text.push(c);
    app.handle(Event::Input(text));
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> AppAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppAction::Continue;
    }

    let target = app.hit_map().target_at(mouse.column, mouse.row).cloned();
    tracing::trace!(column = mouse.column, row = mouse.row, ?target, "Pointer press");

    match target {
        None => {
            app.handle(Event::OutsideClick);
        }
        Some(HitTarget::Input) => {
            app.clear_status();
            app.set_focus(FormFocus::Search);
            app.handle(Event::FocusIn);
        }
        Some(HitTarget::Toggle) => {
            app.clear_status();
            app.set_focus(FormFocus::Search);
            app.handle(Event::ToggleButton);
        }
        Some(HitTarget::Item(label)) => {
            app.clear_status();
            app.handle(Event::ItemClick(label));
        }
        Some(HitTarget::ChipRemove(label)) => {
            app.clear_status();
            app.handle(Event::ChipRemove(label));
        }
        Some(HitTarget::Submit) => {
            app.set_focus(FormFocus::Submit);
            app.handle(Event::OutsideClick);
            return try_submit(app);
        }
        Some(HitTarget::Inert) => {}
    }

    AppAction::Continue
}

fn try_submit(app: &mut App) -> AppAction {
    match app.submit() {
        Some(labels) => AppAction::Submit(labels),
        None => AppAction::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_appends_to_term() {
        assert_eq!(
            key_to_event("ca", key(KeyCode::Char('n'))),
            Some(Event::Input("can".into()))
        );
    }

    #[test]
    fn test_backspace() {
        assert_eq!(
            key_to_event("can", key(KeyCode::Backspace)),
            Some(Event::Input("ca".into()))
        );
        assert_eq!(key_to_event("", key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_event("", key(KeyCode::Up)), Some(Event::Key(Key::Up)));
        assert_eq!(key_to_event("", key(KeyCode::Down)), Some(Event::Key(Key::Down)));
        assert_eq!(key_to_event("", key(KeyCode::Enter)), Some(Event::Key(Key::Enter)));
        assert_eq!(key_to_event("", key(KeyCode::Esc)), Some(Event::Key(Key::Escape)));
        assert_eq!(key_to_event("", key(KeyCode::Tab)), None);
        assert_eq!(key_to_event("", key(KeyCode::F(1))), None);
    }

    #[test]
    fn test_modified_chars_ignored() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(key_to_event("", ctrl_a), None);
    }

    #[test]
    fn test_shifted_chars_typed() {
        let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_event("", upper), Some(Event::Input("A".into())));
    }
}
