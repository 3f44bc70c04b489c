use crate::app::App;
use crate::ui::form;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as TermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the form until it is submitted or the user quits.
///
/// Returns the submitted labels, or `None` if the user quit.
pub async fn run_app(app: &mut App) -> anyhow::Result<Option<Vec<String>>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_ui_loop(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_ui_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<Option<Vec<String>>> {
    use super::input::{self, AppAction};
    use crossterm::event::EventStream;
    use futures::StreamExt;

    let mut term_events = EventStream::new();

    // UI refresh interval (~30fps). Also paces the announcement delay.
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));

    loop {
        app.tick();

        terminal.draw(|f| form::draw(f, app))?;

        // Wait for whichever comes first: terminal event or UI tick.
        let term_event = tokio::select! {
            biased;

            maybe_event = term_events.next() => {
                match maybe_event {
                    Some(Ok(ev)) => Some(ev),
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                        None
                    }
                    None => {
                        tracing::info!("Terminal event stream closed");
                        return Ok(None);
                    }
                }
            }

            _ = render_tick.tick() => {
                None
            }
        };

        let action = match term_event {
            Some(TermEvent::Key(key)) => input::handle_key(app, key),
            Some(TermEvent::Mouse(mouse)) => input::handle_mouse(app, mouse),
            _ => AppAction::Continue,
        };

        match action {
            AppAction::Continue => {}
            AppAction::Quit => {
                tracing::info!("Quit without submitting");
                return Ok(None);
            }
            AppAction::Submit(labels) => return Ok(Some(labels)),
        }
    }
}
