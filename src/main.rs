mod app;
mod config;
mod i18n;
mod models;
mod templates;
mod ui;
mod writer;

use crate::config::Config;
use crate::i18n::{Language, Messages};
use crate::ui::draw;
use crate::writer::WriteEvent;
use anyhow::Result;
use app::{App, Outcome};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    style::Stylize,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the prompt sequence. The terminal is restored before this returns.
fn prompt(messages: &'static Messages) -> Result<Outcome> {
    let mut session = TerminalSession::new()?;
    let mut app = App::new(messages);

    while !app.is_done() {
        session.terminal_mut().draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(app.outcome.unwrap_or(Outcome::Cancelled))
}

fn report(messages: &Messages, events: &[WriteEvent]) {
    for ev in events {
        match ev {
            WriteEvent::DirectoryCreated(path) => {
                println!("  {} {}/", messages.created.green().bold(), path.display());
            }
            WriteEvent::DirectoryExists(path) => {
                println!("  {} {}/", messages.exists.dark_grey(), path.display());
            }
            WriteEvent::FileWritten(path) => {
                println!("  {} {}", messages.written.cyan().bold(), path.display());
            }
            WriteEvent::FileKept(path) => {
                println!("  {} {}", messages.kept.yellow(), path.display());
            }
        }
    }
    println!("{}", messages.done.magenta().bold());
}

/// Applies the prompt outcome to `root`. A cancelled session touches nothing
/// and yields `None`.
fn scaffold(root: &Path, outcome: &Outcome) -> Result<Option<Vec<WriteEvent>>> {
    let Outcome::Finished(answers) = outcome else {
        return Ok(None);
    };
    let ctx = templates::TemplateContext::for_root(root)?;
    let output = templates::render(answers, &ctx);
    let events = writer::write_output(root, &output)?;
    Ok(Some(events))
}

fn main() -> Result<()> {
    let config = Config::load();
    let language = Language::resolve(&config, sys_locale::get_locale());
    let messages = language.messages();

    let outcome = prompt(messages)?;
    let root = std::env::current_dir()?;
    match scaffold(&root, &outcome)? {
        Some(events) => {
            report(messages, &events);
            Ok(())
        }
        None => {
            eprintln!("{}", messages.cancelled.red());
            std::process::exit(1);
        }
    }
}
