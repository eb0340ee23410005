//! TUI application — main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)    ├─ controller.handle_command()
//!   └─ tick_interval                      └─ controller.process_request()
//!        └── cmd_tx ──────────────────>──┘
//! ```
//!
//! The controller drains its inbox one command at a time, so a second
//! send cannot start while one is outstanding; the TUI reinforces that by
//! marking the input inert (`waiting`) until the reply event arrives.

use super::event::TuiCommand;
use super::mode::{self, InputMode, KeyAction};
use super::presenter::TuiPresenter;
use super::state::{DisplayMessage, TuiState};
use super::widgets::{
    MainLayout, conversation::ConversationWidget, header::HeaderWidget, input::InputWidget,
    sidebar::SidebarWidget, status_bar::StatusBarWidget,
};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use gemchat_application::{ChatController, ChatGateway, CommandAction, UiEvent};
use gemchat_domain::Model;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Main TUI application
pub struct TuiApp<G: ChatGateway + 'static> {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    // -- Presenter (applies UiEvents to state) --
    presenter: TuiPresenter,

    // -- Render tick --
    tick: Duration,

    // -- Controller task handle --
    _controller_handle: tokio::task::JoinHandle<()>,

    // -- Type witness for the gateway generic --
    _phantom: std::marker::PhantomData<G>,
}

impl<G: ChatGateway + 'static> TuiApp<G> {
    /// Create a new TUI application wired to the controller
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        let controller = ChatController::new(gateway, model, ui_tx);
        let controller_handle = tokio::spawn(controller_task(controller, cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            presenter: TuiPresenter::new(),
            tick: Duration::from_millis(250),
            _controller_handle: controller_handle,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Set the render tick interval
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick = Duration::from_millis(tick_ms.max(50));
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.tick);

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame, &state);
            })?;

            if state.should_quit {
                break;
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // UiEvents from the controller
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                }

                // Tick: timer refresh, flash expiry, spinner animation
                _ = tick.tick() => {
                    state.on_tick();
                    state.expire_flash(Duration::from_secs(5));
                    let _ = self.cmd_tx.send(TuiCommand::RefreshStats);
                }
            }
        }

        // Tell the controller to wind down
        let _ = self.cmd_tx.send(TuiCommand::Quit);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(ConversationWidget::new(state), layout.conversation);
        if layout.sidebar.width > 0 {
            frame.render_widget(SidebarWidget::new(state), layout.sidebar);
        }
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        // Help overlay
        if state.show_help {
            let help_area = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            self.render_help(frame, help_area);
        }
    }

    fn render_help(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Normal Mode:"),
            Line::from("  i/a    Enter Insert mode"),
            Line::from("  :      Enter Command mode"),
            Line::from("  c      Clear the chat"),
            Line::from("  j/k    Scroll down/up"),
            Line::from("  g/G    Scroll to top/bottom"),
            Line::from("  ?      Toggle this help"),
            Line::from("  q      Quit"),
            Line::from(""),
            Line::from("Insert Mode:"),
            Line::from("  Enter  Send message"),
            Line::from("  Esc    Return to Normal"),
            Line::from(""),
            Line::from("Commands (:command):"),
            Line::from("  :q      Quit"),
            Line::from("  :clear  Clear the conversation"),
            Line::from("  :help   Show this help"),
            Line::from("  :config Show configuration"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&self, state: &mut TuiState, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key) => {
                // If help is showing, Esc or ? closes it
                if state.show_help {
                    match key.code {
                        crossterm::event::KeyCode::Esc | crossterm::event::KeyCode::Char('?') => {
                            state.show_help = false;
                            return;
                        }
                        _ => {}
                    }
                }

                let action = mode::handle_key_event(state.mode, key);
                self.handle_action(state, action);
            }
            crossterm::event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}

            // Mode transitions
            KeyAction::EnterInsert => state.mode = InputMode::Insert,
            KeyAction::EnterCommand => {
                state.mode = InputMode::Command;
                state.command_input.clear();
                state.command_cursor = 0;
            }
            KeyAction::ExitToNormal => state.mode = InputMode::Normal,

            // Text editing
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),

            // Submit
            KeyAction::SubmitInput => {
                if state.waiting {
                    // One send at a time; the reply has to land first
                    state.set_flash("Still waiting for the reply...");
                    return;
                }
                let input = state.take_input();
                if !input.trim().is_empty() {
                    debug!("Submitting message ({} bytes)", input.len());
                    state.push_message(DisplayMessage::user(&input));
                    state.waiting = true;
                    let _ = self.cmd_tx.send(TuiCommand::ProcessRequest(input));
                }
            }
            KeyAction::SubmitCommand => {
                let cmd = state.take_command();
                state.mode = InputMode::Normal;
                if !cmd.is_empty() {
                    if cmd == "q" || cmd == "quit" || cmd == "exit" {
                        state.should_quit = true;
                    } else {
                        let _ = self.cmd_tx.send(TuiCommand::HandleCommand(cmd));
                    }
                }
            }

            // Chat
            KeyAction::ClearChat => {
                let _ = self.cmd_tx.send(TuiCommand::HandleCommand("clear".into()));
            }

            // Scrolling
            KeyAction::ScrollUp => state.scroll_up(),
            KeyAction::ScrollDown => state.scroll_down(),
            KeyAction::ScrollToTop => state.scroll_to_top(),
            KeyAction::ScrollToBottom => state.scroll_to_bottom(),

            // Application
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ShowHelp => state.show_help = !state.show_help,
        }
    }
}

/// Background controller task (Actor)
///
/// Owns the ChatController and processes commands from the TUI event loop
/// strictly in order.
async fn controller_task<G: ChatGateway + 'static>(
    mut controller: ChatController<G>,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
) {
    // Send welcome on startup
    controller.send_welcome();

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            TuiCommand::ProcessRequest(request) => {
                controller.process_request(&request).await;
            }
            TuiCommand::HandleCommand(command) => match controller.handle_command(&command) {
                CommandAction::Exit => break,
                CommandAction::Continue => {}
            },
            TuiCommand::RefreshStats => {
                controller.emit_stats();
            }
            TuiCommand::Quit => break,
        }
    }
}
