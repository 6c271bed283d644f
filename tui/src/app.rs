use std::io::Stdout;
use std::io::stdout;

use agentchat_core::Settings;
use color_eyre::eyre::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::unbounded_channel;
use tracing::error;
use tracing::info;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::chatwidget::ChatWidget;

/// Puts the terminal into raw mode with the alternate screen, mouse capture,
/// and bracketed paste, and restores all of it on drop so a panic or early
/// return cannot leave the shell unusable.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            error!("failed to restore terminal: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            error!("failed to disable raw mode: {e}");
        }
    }
}

/// Forward crossterm events into the app event channel. Runs on a dedicated
/// thread because `crossterm::event::read` blocks.
fn spawn_input_thread(app_event_tx: AppEventSender) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key_event)) => {
                    if key_event.kind == KeyEventKind::Release {
                        continue;
                    }
                    if key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app_event_tx.send(AppEvent::Exit);
                        continue;
                    }
                    app_event_tx.send(AppEvent::Key(key_event));
                }
                Ok(Event::Mouse(mouse_event)) => {
                    app_event_tx.send(AppEvent::Mouse(mouse_event));
                }
                Ok(Event::Paste(pasted)) => {
                    app_event_tx.send(AppEvent::Paste(pasted));
                }
                Ok(Event::Resize(_, _)) => {
                    app_event_tx.send(AppEvent::RequestRedraw);
                }
                Ok(_) => {}
                Err(e) => {
                    error!("input thread read failed: {e}");
                    app_event_tx.send(AppEvent::Exit);
                    break;
                }
            }
        }
    });
}

pub(crate) async fn run_app(settings: Settings, agent: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (tx, mut rx) = unbounded_channel();
    let app_event_tx = AppEventSender::new(tx);

    // No model backend is wired up yet; the trait seam in agentchat-core is
    // where one plugs in.
    let mut chat = ChatWidget::new(settings, agent, cwd, None, app_event_tx.clone());

    let mut guard = TerminalGuard::new()?;
    spawn_input_thread(app_event_tx);

    info!("agentchat started");
    guard
        .terminal
        .draw(|frame| chat.render(frame.area(), frame.buffer_mut()))?;

    while let Some(event) = rx.recv().await {
        if matches!(event, AppEvent::Exit) {
            break;
        }
        if chat.handle_app_event(event) {
            guard
                .terminal
                .draw(|frame| chat.render(frame.area(), frame.buffer_mut()))?;
        }
    }

    info!("agentchat exiting");
    Ok(())
}
