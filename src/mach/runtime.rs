use super::command::Meta;
use super::config::Config;
use super::listing::Listing;
use super::resolve::Operand;
use super::session::Session;
use super::val::Val;
use crate::hal::Board;
use crate::lang::{arguments, keyword, Command, Error, LabelTable, LineStore, Operator};
use rand::rngs::StdRng;
use rand::SeedableRng;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter runtime
///
/// The host calls `execute` in a loop. Each cycle performs one pipeline
/// stage; output and prompts come back as events so the host can service
/// its terminal and timers between calls.

pub struct Runtime {
    pub(super) config: Config,
    pub(super) lines: LineStore,
    pub(super) session: Session,
    pub(super) pipeline: Pipeline,
    pub(super) board: Board,
    pub(super) rng: StdRng,
    pub(super) print: String,
    running: bool,
    cursor: usize,
    listing: Option<Listing>,
    interrupted: bool,
}

/// Events are used by the host to respond to the runtime.
#[derive(Debug)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    List(Listing),
    /// Waiting for a line; carries the prompt.
    Input(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SearchCommand,
    EnumerateSources,
    ExecuteCommand,
    GoNextLine,
    Termination,
}

/// Why the pipeline is parked in `GoNextLine`.
#[derive(Debug, Clone, PartialEq)]
pub enum Suspend {
    Input { prompt: &'static str },
    Sleep { until: u64 },
}

/// Scratch of the instruction in flight.
#[derive(Debug)]
pub(super) struct Pipeline {
    pub stage: Stage,
    pub line: usize,
    pub command: Option<Command>,
    pub operator: Option<Operator>,
    pub operands: Vec<Operand>,
    pub sources: Vec<Val>,
    pub jump: Option<usize>,
    pub writeback: Option<(usize, String)>,
    pub suspend: Option<Suspend>,
}

impl Default for Pipeline {
    fn default() -> Pipeline {
        Pipeline {
            stage: Stage::SearchCommand,
            line: 1,
            command: None,
            operator: None,
            operands: vec![],
            sources: vec![],
            jump: None,
            writeback: None,
            suspend: None,
        }
    }
}

impl Pipeline {
    fn clear_scratch(&mut self) {
        self.command = None;
        self.operator = None;
        self.operands.clear();
        self.sources.clear();
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::build(Config::default(), Board::simulated())
    }
}

impl Runtime {
    pub fn new(config: Config, board: Board) -> Result<Runtime> {
        config.validate()?;
        Ok(Runtime::build(config, board))
    }

    fn build(config: Config, board: Board) -> Runtime {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runtime {
            lines: LineStore::new(config.lines, config.row),
            session: Session::new(&config),
            pipeline: Pipeline::default(),
            board,
            rng,
            print: String::new(),
            running: false,
            cursor: 1,
            listing: None,
            interrupted: false,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut LineStore {
        &mut self.lines
    }

    pub fn labels(&self) -> &LabelTable {
        &self.session.labels
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stage(&self) -> Stage {
        self.pipeline.stage
    }

    pub fn listing(&self) -> Listing {
        Listing::new(&self.lines)
    }

    /// The break signal. Takes effect at the top of the next cycle.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Timer tick from the host.
    pub fn service(&mut self) {
        self.board.service();
    }

    /// Accepts one received line. Returns true when the line was taken,
    /// which the host uses for its history.
    pub fn enter(&mut self, text: &str) -> bool {
        if text.contains('\x03') {
            self.interrupt();
            return false;
        }
        let slot = self.lines.input_slot();
        if self.running {
            if let Some(Suspend::Input { .. }) = self.pipeline.suspend {
                if let Err(e) = self.lines.write(slot, text) {
                    tracing::debug!(error = %e, "input slot not written");
                }
                let text = self.lines.read(slot).unwrap_or_default().to_string();
                if let Some(dest) = self.pipeline.operands.get(0).and_then(Operand::line) {
                    self.pipeline.writeback = Some((dest, text));
                }
                self.pipeline.suspend = None;
                return true;
            }
            tracing::debug!("line ignored while running");
            return false;
        }
        if let Err(e) = self.lines.write(slot, text) {
            tracing::debug!(error = %e, "input slot not written");
        }
        self.edit(text.trim())
    }

    fn edit(&mut self, text: &str) -> bool {
        let last = self.lines.input_slot().saturating_sub(1);
        let (word, rest) = keyword(text);
        match (word, rest.trim()) {
            ("run", "") => self.run(),
            ("clear", "") => {
                self.lines.clear();
                self.cursor = 1;
                self.running = true;
                self.pipeline = Pipeline::default();
                self.pipeline.stage = Stage::Termination;
            }
            ("set", n) if !n.is_empty() => match n.parse::<usize>() {
                Ok(n) if n >= 1 && n <= last => self.cursor = n,
                _ => tracing::warn!(line = n, "set out of range"),
            },
            ("insert", "") => {
                if let Err(e) = self.lines.insert(self.cursor, last) {
                    tracing::warn!(error = %e, "insert failed");
                }
            }
            ("delete", "") => {
                if let Err(e) = self.lines.remove(self.cursor, last) {
                    tracing::warn!(error = %e, "delete failed");
                }
            }
            ("list", "") => self.listing = Some(self.listing()),
            _ => {
                if let Err(e) = self.lines.write(self.cursor, text) {
                    tracing::warn!(error = %e, "line not stored");
                }
                self.cursor = (self.cursor + 1).min(last);
            }
        }
        true
    }

    fn run(&mut self) {
        self.session.reset(&mut *self.board.heap);
        if let Err(e) = self.session.labels.rebuild(&mut self.lines, 1) {
            tracing::warn!(error = %e, "label scan stopped");
        }
        self.pipeline = Pipeline::default();
        self.running = true;
        tracing::info!(labels = self.session.labels.len(), "run");
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if !self.print.is_empty() {
                return Event::Print(std::mem::take(&mut self.print));
            }
            if let Some(listing) = self.listing.take() {
                return Event::List(listing);
            }
            if self.interrupted {
                self.interrupted = false;
                if self.running {
                    tracing::info!(line = self.pipeline.line, "break");
                    self.pipeline.suspend = None;
                    self.pipeline.stage = Stage::Termination;
                }
            }
            if !self.running {
                return Event::Stopped;
            }
            if let Some(Suspend::Input { prompt }) = &self.pipeline.suspend {
                return Event::Input(prompt.to_string());
            }
            self.step();
        }
        Event::Running
    }

    fn step(&mut self) {
        tracing::trace!(stage = ?self.pipeline.stage, line = self.pipeline.line, "step");
        match self.pipeline.stage {
            Stage::SearchCommand => self.search_command(),
            Stage::EnumerateSources => self.enumerate_sources(),
            Stage::ExecuteCommand => self.execute_command(),
            Stage::GoNextLine => self.go_next_line(),
            Stage::Termination => self.terminate(),
        }
    }

    fn search_command(&mut self) {
        let line = self.pipeline.line;
        if line >= self.lines.input_slot() {
            self.pipeline.stage = Stage::Termination;
            return;
        }
        let leading = match self.lines.skip_leading(line) {
            Ok(leading) => leading,
            Err(_) => {
                self.pipeline.stage = Stage::Termination;
                return;
            }
        };
        let text = self.lines.read(line).unwrap_or_default();
        let (word, rest) = keyword(text.get(leading.offset..).unwrap_or_default());
        let command = Command::from_keyword(word);
        if self.session.flow.is_skipping() {
            if let Some(command) = command.filter(|c| c.is_skip_aware()) {
                self.session.flow.skipped(command);
            }
            self.pipeline.stage = Stage::GoNextLine;
            return;
        }
        let command = match command {
            Some(command) => command,
            None => {
                self.pipeline.stage = Stage::GoNextLine;
                return;
            }
        };
        let meta = Meta::of(command);
        let (args, operator) = arguments(rest, meta.operator, meta.args.min(self.config.args));
        let operands: Vec<Operand> = args
            .iter()
            .map(|arg| Operand::resolve(arg, line, &self.session.labels, &self.lines))
            .collect();
        self.pipeline.command = Some(command);
        self.pipeline.operator = operator;
        self.pipeline.stage = if operands.is_empty() {
            Stage::ExecuteCommand
        } else {
            meta.next_stage()
        };
        self.pipeline.operands = operands;
    }

    fn enumerate_sources(&mut self) {
        let domain = match self.pipeline.command {
            Some(command) => Meta::of(command).domain,
            None => {
                self.pipeline.stage = Stage::GoNextLine;
                return;
            }
        };
        let index = self.pipeline.sources.len();
        if let Some(operand) = self.pipeline.operands.get(index) {
            let val = operand.value(domain, &self.lines);
            self.pipeline.sources.push(val);
        }
        if self.pipeline.sources.len() >= self.pipeline.operands.len() {
            self.pipeline.stage = Stage::ExecuteCommand;
        }
    }

    fn execute_command(&mut self) {
        let command = match self.pipeline.command {
            Some(command) => command,
            None => {
                self.pipeline.stage = Stage::GoNextLine;
                return;
            }
        };
        tracing::debug!(line = self.pipeline.line, %command, "execute");
        let effect = self.dispatch(command);
        if effect.halt {
            self.pipeline.stage = Stage::Termination;
            return;
        }
        if let Some(text) = effect.write {
            if let Some(dest) = self.pipeline.operands.get(0).and_then(Operand::line) {
                self.pipeline.writeback = Some((dest, text));
            }
        }
        self.pipeline.jump = effect.jump;
        self.pipeline.suspend = effect.suspend;
        self.pipeline.stage = Stage::GoNextLine;
    }

    fn go_next_line(&mut self) {
        match self.pipeline.suspend {
            Some(Suspend::Input { .. }) => return,
            Some(Suspend::Sleep { until }) => {
                if self.board.clock.micros() < until {
                    self.board.service();
                    return;
                }
                self.pipeline.suspend = None;
            }
            None => {}
        }
        if let Some((dest, text)) = self.pipeline.writeback.take() {
            if let Err(e) = self.lines.write(dest, &text) {
                tracing::debug!(error = %e, "writeback dropped");
            }
        }
        let next = self
            .pipeline
            .jump
            .take()
            .unwrap_or(self.pipeline.line + 1);
        self.pipeline.clear_scratch();
        self.pipeline.line = next;
        self.pipeline.stage = if next >= self.lines.input_slot() {
            Stage::Termination
        } else {
            Stage::SearchCommand
        };
    }

    fn terminate(&mut self) {
        self.session.reset(&mut *self.board.heap);
        self.pipeline = Pipeline::default();
        self.running = false;
        self.listing = Some(self.listing());
        tracing::info!("terminated");
    }
}
