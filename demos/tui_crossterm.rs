//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to drive calc_mini from a terminal application.
//! Run with: cargo run --example tui_crossterm -- --help

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use calc_mini::{
    Clipboard, Engine, KeyCode, KeyEvent, MemoryClipboard, Modifiers, Operator, Token,
};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, warn};

const COPIED_FLASH: Duration = Duration::from_secs(1);

const KEYPAD: [[&str; 4]; 5] = [
    ["AC", "+/-", "%", "÷"],
    ["7", "8", "9", "x"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "del", "="],
];

#[derive(Parser, Debug)]
#[command(name = "calc", about = "Keypad calculator in the terminal")]
struct Args {
    /// Maximum digits accepted for one number
    #[arg(long, default_value_t = 9)]
    max_digits: usize,

    /// Decimal places results are rounded to
    #[arg(long, default_value_t = 8)]
    precision: usize,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

struct App {
    engine: Engine,
    clipboard: Box<dyn Clipboard>,
    copied_at: Option<Instant>,
    message: String,
}

impl App {
    fn new(args: &Args) -> Self {
        let engine = Engine::builder()
            .max_input_len(args.max_digits)
            .round_decimals(args.precision)
            .build();
        Self {
            engine,
            clipboard: open_clipboard(),
            copied_at: None,
            message: "c: copy   ctrl-c: quit".to_string(),
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        if event.code == CKeyCode::Char('c') && event.modifiers.is_empty() {
            self.copy();
            return;
        }
        if let Some(key) = convert_crossterm_event(event) {
            self.engine.handle_key(key);
        }
    }

    fn copy(&mut self) {
        match self.engine.copy_current(&mut *self.clipboard) {
            Ok(()) => {
                info!(text = self.engine.current_display(), "copied to clipboard");
                self.copied_at = Some(Instant::now());
            }
            Err(e) => {
                warn!(error = %e, "copy failed");
                self.message = e.to_string();
            }
        }
    }

    fn copied(&self) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < COPIED_FLASH)
    }
}

#[cfg(feature = "clipboard")]
fn open_clipboard() -> Box<dyn Clipboard> {
    match calc_mini::SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!(error = %e, "falling back to in-memory clipboard");
            Box::new(MemoryClipboard::new())
        }
    }
}

#[cfg(not(feature = "clipboard"))]
fn open_clipboard() -> Box<dyn Clipboard> {
    Box::new(MemoryClipboard::new())
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        _ => return None,
    };
    Some(KeyEvent::new(code, mods))
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(f.size());

    // Display: previous line above current line
    let current_style = if app.copied() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let display = Paragraph::new(vec![
        Line::from(Span::styled(
            app.engine.previous_display(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(app.engine.current_display(), current_style)),
    ])
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL).title("calc_mini"));
    f.render_widget(display, chunks[0]);

    // Keypad, highlighting the pending operator
    let pending = app.engine.snapshot().operator;
    let rows: Vec<Line> = KEYPAD
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|label| {
                    let style = match Token::classify(label) {
                        Some(Token::Operator(op)) if Some(op) == pending => {
                            Style::default().fg(Color::Black).bg(Color::Yellow)
                        }
                        Some(Token::Operator(_) | Token::Compute) => {
                            Style::default().fg(Color::Yellow)
                        }
                        _ => Style::default(),
                    };
                    Span::styled(format!("{label:^6}"), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    let keypad = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keypad, chunks[1]);

    // Status line
    let status = if app.copied() {
        "copied!".to_string()
    } else {
        app.message.clone()
    };
    let status = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("calc_mini=info,tui_crossterm=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), io::Error> {
    let args = Args::parse();
    // Logs go to a file; stderr would draw over the alternate screen.
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    info!(?args, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&args);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // Poll so the "copied" flash can expire without a key press.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            app.handle_crossterm_event(key);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        last_result = app.engine.current_display(),
        operator = ?app.engine.snapshot().operator.map(Operator::glyph),
        "exiting"
    );
    Ok(())
}
