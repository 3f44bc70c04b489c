/// Keys the dropdown reacts to. Everything else is handled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Tab,
}

/// Raw input, as reported by whatever surface hosts the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search input gained focus.
    FocusIn,
    /// The toggle button next to the input was clicked.
    ToggleButton,
    /// A pointer press landed outside the widget.
    OutsideClick,
    Key(Key),
    /// The search input now holds this text.
    Input(String),
    /// A list row was clicked.
    ItemClick(String),
    /// The remove control of a chip was clicked.
    ChipRemove(String),
}

/// A state change request. Every event normalizes to at most one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Open,
    Close,
    Toggle,
    SetFilter(String),
    MoveFocus(isize),
    SelectAt(usize),
    Select(String),
    Remove(String),
}

impl Intent {
    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Open => "open",
            Intent::Close => "close",
            Intent::Toggle => "toggle",
            Intent::SetFilter(_) => "set_filter",
            Intent::MoveFocus(_) => "move_focus",
            Intent::SelectAt(_) => "select_at",
            Intent::Select(_) => "select",
            Intent::Remove(_) => "remove",
        }
    }
}

/// Map an event to an intent given the open flag and focused row.
///
/// Arrow keys and Enter open a closed dropdown. Enter with nothing focused
/// does nothing.
pub fn normalize(event: Event, is_open: bool, focused: Option<usize>) -> Option<Intent> {
    match event {
        Event::FocusIn => Some(Intent::Open),
        Event::ToggleButton => Some(Intent::Toggle),
        Event::OutsideClick => Some(Intent::Close),
        Event::Input(text) => Some(Intent::SetFilter(text)),
        Event::ItemClick(label) => Some(Intent::Select(label)),
        Event::ChipRemove(label) => Some(Intent::Remove(label)),
        Event::Key(key) if !is_open => match key {
            Key::Up | Key::Down | Key::Enter => Some(Intent::Open),
            Key::Escape | Key::Tab => None,
        },
        Event::Key(key) => match key {
            Key::Down => Some(Intent::MoveFocus(1)),
            Key::Up => Some(Intent::MoveFocus(-1)),
            Key::Enter => focused.map(Intent::SelectAt),
            Key::Escape | Key::Tab => Some(Intent::Close),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_open_closed_dropdown() {
        for key in [Key::Up, Key::Down, Key::Enter] {
            assert_eq!(normalize(Event::Key(key), false, None), Some(Intent::Open));
        }
    }

    #[test]
    fn test_escape_and_tab_ignored_when_closed() {
        assert_eq!(normalize(Event::Key(Key::Escape), false, None), None);
        assert_eq!(normalize(Event::Key(Key::Tab), false, None), None);
    }

    #[test]
    fn test_keys_when_open() {
        assert_eq!(
            normalize(Event::Key(Key::Down), true, Some(0)),
            Some(Intent::MoveFocus(1))
        );
        assert_eq!(
            normalize(Event::Key(Key::Up), true, Some(0)),
            Some(Intent::MoveFocus(-1))
        );
        assert_eq!(
            normalize(Event::Key(Key::Enter), true, Some(2)),
            Some(Intent::SelectAt(2))
        );
        assert_eq!(
            normalize(Event::Key(Key::Escape), true, Some(2)),
            Some(Intent::Close)
        );
        assert_eq!(
            normalize(Event::Key(Key::Tab), true, None),
            Some(Intent::Close)
        );
    }

    #[test]
    fn test_enter_without_focus_does_nothing() {
        assert_eq!(normalize(Event::Key(Key::Enter), true, None), None);
    }

    #[test]
    fn test_pointer_events() {
        assert_eq!(normalize(Event::FocusIn, true, None), Some(Intent::Open));
        assert_eq!(
            normalize(Event::ToggleButton, false, None),
            Some(Intent::Toggle)
        );
        assert_eq!(
            normalize(Event::OutsideClick, false, None),
            Some(Intent::Close)
        );
        assert_eq!(
            normalize(Event::ItemClick("Bali".into()), false, None),
            Some(Intent::Select("Bali".into()))
        );
        assert_eq!(
            normalize(Event::ChipRemove("Bali".into()), true, Some(0)),
            Some(Intent::Remove("Bali".into()))
        );
    }
}
