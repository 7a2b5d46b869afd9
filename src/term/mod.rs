/*!
## Terminal front-end

Drives a [`Runtime`] from a `linefeed` line editor. CTRL-C is the break
signal. The EEPROM is kept in the file named by `ALOHA_EEPROM`.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::hal::sim::SimEeprom;
use crate::hal::Board;
use crate::lang::LABEL_MARKER;
use crate::mach::{Config, Event, Listing, Runtime};
use ansi_term::Style;
use linefeed::{
    Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let runtime = match build() {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };
    if let Err(error) = main_loop(runtime, interrupted) {
        eprintln!("{}", error);
    }
}

fn build() -> Result<Runtime, crate::lang::Error> {
    let config = Config::from_env()?;
    let mut board = Board::simulated();
    if let Ok(path) = std::env::var("ALOHA_EEPROM") {
        board = board.with_eeprom(SimEeprom::open(path));
    }
    tracing::info!(lines = config.lines, row = config.row, "aloha ready");
    Runtime::new(config, board)
}

fn main_loop(mut runtime: Runtime, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let console = Console::new()?;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        let event = runtime.execute(5000);
        runtime.service();
        let more = match event {
            Event::Stopped => console.edit(&mut runtime)?,
            Event::Input(prompt) => console.answer(&mut runtime, &prompt)?,
            Event::Print(text) => console.show(&text)?,
            Event::List(listing) => console.show(&decorate_list(&listing))?,
            Event::Running => true,
        };
        if !more {
            return Ok(());
        }
    }
}

/// The editor prompt and the `input`/`read` prompt keep separate histories.
struct Console {
    editor: Interface<DefaultTerminal>,
    answers: Interface<DefaultTerminal>,
}

impl Console {
    fn new() -> std::io::Result<Console> {
        let editor = Interface::new("aloha")?;
        let answers = Interface::new("input")?;
        answers.set_report_signal(Signal::Interrupt, true);
        Ok(Console { editor, answers })
    }

    /// Reads one editor line. False on end of input.
    fn edit(&self, runtime: &mut Runtime) -> std::io::Result<bool> {
        let previous = self.editor.completer();
        self.editor.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
        let read = self.editor.read_line()?;
        self.editor.set_completer(previous);
        match read {
            ReadResult::Input(line) => {
                if runtime.enter(&line) {
                    self.editor.add_history_unique(line);
                }
                Ok(true)
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(false),
        }
    }

    fn answer(&self, runtime: &mut Runtime, prompt: &str) -> std::io::Result<bool> {
        self.answers.set_prompt(prompt)?;
        match self.answers.read_line()? {
            ReadResult::Input(line) => {
                if runtime.enter(&line) {
                    self.answers.add_history_unique(line);
                }
            }
            ReadResult::Signal(Signal::Interrupt) => {
                self.answers.set_buffer("")?;
                self.answers.lock_reader().cancel_read_line()?;
                runtime.interrupt();
            }
            ReadResult::Signal(_) | ReadResult::Eof => return Ok(false),
        }
        Ok(true)
    }

    fn show(&self, text: &str) -> std::io::Result<bool> {
        self.editor.write_fmt(format_args!("{}", text))?;
        Ok(true)
    }
}

/// Tab after a line number fills in that line.
struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<usize>().ok()?;
        let text = self.listing.line(num)?;
        let mut comp = Completion::simple(text.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

fn decorate_list(listing: &Listing) -> String {
    let number = Style::new().dimmed();
    let label = Style::new().bold();
    let mut out = String::new();
    for (n, text) in listing.lines() {
        out.push_str(&number.paint(format!("{:>3}", n)).to_string());
        out.push(' ');
        let trimmed = text.trim_start_matches(' ');
        if trimmed.as_bytes().first() == Some(&LABEL_MARKER) {
            let end = trimmed.find(' ').unwrap_or_else(|| trimmed.len());
            out.push_str(&text[..text.len() - trimmed.len()]);
            out.push_str(&label.paint(&trimmed[..end]).to_string());
            out.push_str(&trimmed[end..]);
        } else {
            out.push_str(text);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LineStore;

    #[test]
    fn test_decorate_list_keeps_text() {
        let mut store = LineStore::new(8, 32);
        store.write(1, ".top print 'a").unwrap();
        store.write(2, "end").unwrap();
        let out = decorate_list(&Listing::new(&store));
        assert!(out.contains("top"));
        assert!(out.contains(" print 'a\n"));
        assert!(out.ends_with("end\n"));
    }
}
