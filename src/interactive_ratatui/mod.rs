use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::browse::{FetchRequest, FetchResponse};
use crate::catalog::PageFetcher;
use crate::config::BrowseOptions;

mod application;
pub mod constants;
mod domain;
pub mod ui;


use self::application::catalog_service::CatalogService;
use self::constants::*;
use self::domain::models::Mode;
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct InteractiveBrowser {
    state: AppState,
    renderer: Renderer,
    catalog: CatalogService,
    fetch_sender: Option<Sender<FetchRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    should_quit: bool,
}

impl InteractiveBrowser {
    pub fn new(
        options: &BrowseOptions,
        fetcher: Arc<dyn PageFetcher>,
        initial_query: &str,
    ) -> Result<Self> {
        Ok(Self {
            state: AppState::new(options, initial_query)?,
            renderer: Renderer::new(),
            catalog: CatalogService::new(fetcher),
            fetch_sender: None,
            fetch_receiver: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_fetch_worker();
        self.fetch_sender = Some(tx);
        self.fetch_receiver = Some(rx);

        let command = self.state.start();
        self.execute_command(command);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_fetch_responses();
            self.handle_message(Message::Tick(Instant::now()));

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.execute_command(Command::ClearMessage);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn drain_fetch_responses(&mut self) {
        let responses: Vec<FetchResponse> = match &self.fetch_receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => return,
        };
        for response in responses {
            self.handle_message(Message::FetchCompleted(response));
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            return;
        }

        if key.code == KeyCode::F(1) && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return;
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Preview => self.renderer.get_artwork_detail_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => return Some(Message::LoadMore),
                KeyCode::Char('r') => return Some(Message::Retry),
                KeyCode::Char('n' | 'p') => {
                    return self.renderer.get_result_list_mut().handle_key(key);
                }
                _ => {}
            }
        }
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.get_result_list_mut().handle_key(key),
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Fetch(request) => self.dispatch_fetch(request),
            Command::CopyToClipboard(text) => {
                let command = match copy_to_clipboard(&text) {
                    Ok(()) => self.state.flash("✓ Copied image URL".to_string()),
                    Err(e) => {
                        tracing::warn!(error = %e, "clipboard copy failed");
                        self.state.flash(format!("Failed to copy: {e}"))
                    }
                };
                self.execute_command(command);
            }
            Command::ShowMessage(msg) => {
                let command = self.state.flash(msg);
                self.execute_command(command);
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn dispatch_fetch(&mut self, request: FetchRequest) {
        match &self.fetch_sender {
            Some(sender) => {
                if sender.send(request).is_err() {
                    tracing::error!("fetch worker is gone");
                }
            }
            // No worker (tests): fetch inline
            None => {
                let response = self.catalog.fetch(request);
                self.handle_message(Message::FetchCompleted(response));
            }
        }
    }

    /// Each request runs on its own thread so a slow page never holds up a
    /// newer one. Responses may arrive in any order.
    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let catalog = self.catalog.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let catalog = catalog.clone();
                let response_tx = response_tx.clone();
                thread::spawn(move || {
                    let _ = response_tx.send(catalog.fetch(request));
                });
            }
        });

        (request_tx, response_rx)
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to_command("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to_command("xclip", &["-selection", "clipboard"], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = text;
        Err(anyhow::anyhow!("Clipboard not supported on this platform"))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {program}"))?;
    if !status.success() {
        anyhow::bail!("{program} exited with {status}");
    }
    Ok(())
}
