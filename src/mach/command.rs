use super::bcd::Bcd;
use super::flow::Pass;
use super::function::Function;
use super::operation::Operation;
use super::runtime::{Runtime, Stage, Suspend};
use super::val::{format_decimal, format_float, format_logic, Domain, Val};
use crate::lang::{Command, Operator};
use rand::Rng;
use std::convert::TryFrom;

/// ## Per-command metadata
///
/// How many operands a command keeps, whether an operator token is taken
/// out of the line, and the domain its sources are read in.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meta {
    pub args: usize,
    pub operator: bool,
    pub domain: Domain,
}

impl Meta {
    pub fn of(command: Command) -> Meta {
        use Command::*;
        let (args, operator, domain) = match command {
            Int => (3, true, Domain::Signed),
            Uint => (3, true, Domain::Unsigned),
            Intb => (3, true, Domain::Decimal),
            Float => (3, true, Domain::Float),
            And | Or | Xor | Lsl | Lsr => (3, false, Domain::Logic),
            Not => (2, false, Domain::Logic),
            Rand => (1, false, Domain::None),
            Let | Mov | Append | Apd | Hlen => (2, false, Domain::Text),
            Vlen => (2, false, Domain::None),
            Jmp | Call => (1, false, Domain::None),
            Push => (1, false, Domain::Text),
            Pop => (1, false, Domain::None),
            Ret | End | Else | Endif | Endwhile | Break => (0, false, Domain::None),
            If | While => (2, true, Domain::Signed),
            Ifu | Whileu => (2, true, Domain::Unsigned),
            Ifb | Whileb => (2, true, Domain::Decimal),
            Iff | Whilef => (2, true, Domain::Float),
            Ifs | Whiles => (2, true, Domain::Text),
            For => (2, false, Domain::Unsigned),
            Next => (1, false, Domain::Unsigned),
            Print => (usize::max_value(), false, Domain::Text),
            Sleep => (1, false, Domain::Unsigned),
            Input | Read => (1, false, Domain::None),
            Stime => (7, false, Domain::Signed),
            Gtime => (8, false, Domain::None),
            Csr => (2, false, Domain::Unsigned),
            Arr => (4, false, Domain::Unsigned),
            Free | Pict => (1, false, Domain::Unsigned),
            Gpio | Clrgpio | Ingpio | Snd | Intsnd => (2, false, Domain::Unsigned),
            Clrsnd => (0, false, Domain::None),
            Beat => (1, false, Domain::Unsigned),
            Save | Load => (3, false, Domain::Unsigned),
            Label | Clear => (0, false, Domain::None),
            Ptr => (2, false, Domain::None),
        };
        Meta {
            args,
            operator,
            domain,
        }
    }

    /// Stage after the command has been found.
    pub fn next_stage(&self) -> Stage {
        if self.domain == Domain::None {
            Stage::ExecuteCommand
        } else {
            Stage::EnumerateSources
        }
    }
}

/// What a command asks of the pipeline.
#[derive(Debug, Default)]
pub struct Effect {
    /// Text for the destination operand.
    pub write: Option<String>,
    pub jump: Option<usize>,
    pub suspend: Option<Suspend>,
    pub halt: bool,
}

impl Effect {
    fn write(text: String) -> Effect {
        Effect {
            write: Some(text),
            ..Effect::default()
        }
    }

    fn jump(line: Option<usize>) -> Effect {
        Effect {
            jump: line,
            ..Effect::default()
        }
    }

    fn halt() -> Effect {
        Effect {
            halt: true,
            ..Effect::default()
        }
    }
}

fn expand_escapes(s: &str, out: &mut String) {
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('s') => out.push(' '),
            Some('e') => out.push('\x1b'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
}

fn picture(elements: &[u32], width: u8) -> String {
    let bits = width as u32 * 8;
    let mut s = String::new();
    for element in elements {
        for bit in (0..bits).rev() {
            s.push(if element >> bit & 1 == 1 { '#' } else { '.' });
        }
        s.push('\n');
    }
    s
}

impl Runtime {
    fn src(&self, index: usize) -> Option<&Val> {
        self.pipeline.sources.get(index)
    }

    fn signed(&self, index: usize) -> i32 {
        self.src(index).map(Val::as_signed).unwrap_or(0)
    }

    fn unsigned(&self, index: usize) -> u32 {
        self.src(index).map(Val::as_unsigned).unwrap_or(0)
    }

    fn float(&self, index: usize) -> f64 {
        self.src(index).map(Val::as_float).unwrap_or(0.0)
    }

    fn decimal(&self, index: usize) -> Option<Bcd> {
        self.src(index).map(Val::as_decimal).unwrap_or_else(|| Some(Bcd::zero()))
    }

    fn text(&self, index: usize) -> String {
        self.src(index).map(Val::as_text).unwrap_or_default()
    }

    fn target(&self, index: usize) -> Option<usize> {
        self.pipeline.operands.get(index).and_then(|o| o.target())
    }

    fn condition(&self, domain: Domain) -> bool {
        let op = self.pipeline.operator.unwrap_or(Operator::Eq);
        match domain {
            Domain::Signed => Operation::compare_signed(op, self.signed(0), self.signed(1)),
            Domain::Unsigned => Operation::compare_unsigned(op, self.unsigned(0), self.unsigned(1)),
            Domain::Decimal => Operation::compare_decimal(op, self.decimal(0), self.decimal(1)),
            Domain::Float => Operation::compare_float(op, self.float(0), self.float(1)),
            _ => Operation::compare_text(op, &self.text(0), &self.text(1)),
        }
    }

    fn arithmetic(&mut self, domain: Domain) -> Effect {
        let op = self.pipeline.operator.unwrap_or(Operator::Add);
        let result = match domain {
            Domain::Signed => {
                Operation::signed(op, self.signed(1), self.signed(2)).map(|n| n.to_string())
            }
            Domain::Unsigned => {
                Operation::unsigned(op, self.unsigned(1), self.unsigned(2)).map(|n| n.to_string())
            }
            Domain::Decimal => {
                Operation::decimal(op, self.decimal(1), self.decimal(2)).map(format_decimal)
            }
            _ => {
                let result = if op.is_unary() {
                    Function::float(op, self.float(1))
                } else {
                    Operation::float(op, self.float(1), self.float(2))
                };
                result.map(format_float)
            }
        };
        match result {
            Some(text) => Effect::write(text),
            None => {
                tracing::debug!(%op, "operator does not apply");
                Effect::default()
            }
        }
    }

    fn logic(&mut self, command: Command) -> Effect {
        let (a, b) = (self.unsigned(1), self.unsigned(2));
        let n = match command {
            Command::And => a & b,
            Command::Or => a | b,
            Command::Xor => a ^ b,
            Command::Not => !a,
            Command::Lsl => a.checked_shl(b).unwrap_or(0),
            Command::Lsr => a.checked_shr(b).unwrap_or(0),
            _ => self.rng.gen::<u32>(),
        };
        Effect::write(format_logic(n))
    }

    fn branch(&mut self, domain: Domain) -> Effect {
        if !self.condition(domain) {
            self.session.flow.skip(Pass::Branch);
        }
        Effect::default()
    }

    fn loop_head(&mut self, taken: bool) -> Effect {
        if taken {
            self.session.link.push_saturating(self.pipeline.line);
        } else {
            self.session.flow.skip(Pass::Loop);
        }
        Effect::default()
    }

    fn back_edge(&mut self) -> Option<usize> {
        self.session.link.pop()
    }

    fn elements(&mut self, index: usize) -> Option<(Vec<u32>, u8)> {
        let id = self.unsigned(index) as usize;
        let width = self.session.arrays.get(id)?.width;
        match self.session.arrays.elements(id, &*self.board.heap) {
            Ok(values) => Some((values, width)),
            Err(e) => {
                tracing::warn!(id, error = %e, "array unreadable");
                None
            }
        }
    }

    fn transfer(&mut self, save: bool) {
        let chip = u8::try_from(self.unsigned(0)).unwrap_or(u8::max_value());
        let (first, last) = (self.unsigned(1) as usize, self.unsigned(2) as usize);
        let row = self.lines.row();
        for line in first..=last {
            let result = if save {
                match self.lines.raw(line) {
                    Ok(bytes) => self.board.eeprom.write(chip, line * row, bytes),
                    Err(e) => Err(e),
                }
            } else {
                self.board
                    .eeprom
                    .read(chip, line * row, row)
                    .and_then(|bytes| self.lines.write_bytes(line, &bytes))
            };
            if let Err(e) = result {
                tracing::warn!(chip, line, error = %e, "eeprom transfer stopped");
                break;
            }
        }
    }

    /// Runs one decoded command against the resolved operands.
    pub(super) fn dispatch(&mut self, command: Command) -> Effect {
        use Command::*;
        let line = self.pipeline.line;
        match command {
            Int => self.arithmetic(Domain::Signed),
            Uint => self.arithmetic(Domain::Unsigned),
            Intb => self.arithmetic(Domain::Decimal),
            Float => self.arithmetic(Domain::Float),
            And | Or | Xor | Not | Lsl | Lsr | Rand => self.logic(command),
            Let | Mov => Effect::write(self.text(1)),
            Append | Apd => Effect::write(self.text(0) + &self.text(1)),
            Vlen => {
                let start = self.target(1).unwrap_or(0);
                let count = (start..self.lines.len())
                    .take_while(|&i| !self.lines.is_blank(i))
                    .count();
                Effect::write(count.to_string())
            }
            Hlen => Effect::write(self.text(1).len().to_string()),
            Jmp => Effect::jump(self.target(0)),
            Call => match self.target(0) {
                Some(target) => {
                    self.session.link.push_saturating(line);
                    Effect::jump(Some(target))
                }
                None => Effect::default(),
            },
            Ret => Effect::jump(self.back_edge().map(|l| l + 1)),
            Push => {
                let text = self.text(0);
                self.session.push_scratch(&mut self.lines, &text);
                Effect::default()
            }
            Pop => match self.session.pop_scratch(&mut self.lines) {
                Some(text) => Effect::write(text),
                None => Effect::default(),
            },
            End => Effect::halt(),
            If => self.branch(Domain::Signed),
            Ifu => self.branch(Domain::Unsigned),
            Ifb => self.branch(Domain::Decimal),
            Iff => self.branch(Domain::Float),
            Ifs => self.branch(Domain::Text),
            Else => {
                self.session.flow.skip(Pass::Branch);
                Effect::default()
            }
            Endif => Effect::default(),
            While => {
                let taken = self.condition(Domain::Signed);
                self.loop_head(taken)
            }
            Whileu => {
                let taken = self.condition(Domain::Unsigned);
                self.loop_head(taken)
            }
            Whileb => {
                let taken = self.condition(Domain::Decimal);
                self.loop_head(taken)
            }
            Whilef => {
                let taken = self.condition(Domain::Float);
                self.loop_head(taken)
            }
            Whiles => {
                let taken = self.condition(Domain::Text);
                self.loop_head(taken)
            }
            Endwhile => Effect::jump(self.back_edge()),
            For => {
                let taken = self.unsigned(0) <= self.unsigned(1);
                self.loop_head(taken)
            }
            Next => Effect {
                write: Some(self.unsigned(0).wrapping_add(1).to_string()),
                jump: self.back_edge(),
                ..Effect::default()
            },
            Break => {
                self.back_edge();
                self.session.flow.skip(Pass::Loop);
                Effect::default()
            }
            Print => {
                for i in 0..self.pipeline.sources.len() {
                    let text = self.text(i);
                    expand_escapes(&text, &mut self.print);
                }
                Effect::default()
            }
            Sleep => {
                let until = self.board.clock.micros() + self.unsigned(0) as u64 * 1000;
                Effect {
                    suspend: Some(Suspend::Sleep { until }),
                    ..Effect::default()
                }
            }
            Input | Read => Effect {
                suspend: Some(Suspend::Input {
                    prompt: if command == Input { "? " } else { "" },
                }),
                ..Effect::default()
            },
            Stime => {
                let v: Vec<i32> = (0..7).map(|i| self.signed(i)).collect();
                self.board
                    .clock
                    .set_calendar(v[0], v[1] as u32, v[2] as u32);
                self.board
                    .clock
                    .set_clock(v[3] as u32, v[4] as u32, v[5] as u32, v[6] as u32);
                Effect::default()
            }
            Gtime => {
                let t = self.board.clock.now();
                let fields = [
                    t.year.to_string(),
                    t.month.to_string(),
                    t.week.to_string(),
                    t.day.to_string(),
                    t.hour.to_string(),
                    t.minute.to_string(),
                    t.second.to_string(),
                    t.micros.to_string(),
                ];
                for (operand, text) in self.pipeline.operands.iter().zip(fields.iter()) {
                    if let Some(dest) = operand.line() {
                        if let Err(e) = self.lines.write(dest, text) {
                            tracing::debug!(error = %e, "gtime field dropped");
                        }
                    }
                }
                Effect::default()
            }
            Csr => {
                let (x, y) = (self.unsigned(0), self.unsigned(1));
                self.print.push_str(&format!("\x1b[{};{}H", y, x));
                Effect::default()
            }
            Arr => {
                let id = self.unsigned(0) as usize;
                let start = self.unsigned(1) as usize;
                let count = self.unsigned(2) as usize;
                let width = u8::try_from(self.unsigned(3)).unwrap_or(0);
                let values: Vec<u32> = (start..start.saturating_add(count))
                    .take_while(|&i| i < self.lines.len())
                    .map(|i| Val::parse(Domain::Unsigned, self.lines.read(i).unwrap_or_default()))
                    .map(|v| v.as_unsigned())
                    .collect();
                if let Err(e) = self
                    .session
                    .arrays
                    .create(id, &values, width, &mut *self.board.heap)
                {
                    tracing::warn!(id, error = %e, "arr ignored");
                }
                Effect::default()
            }
            Free => {
                let id = self.unsigned(0) as usize;
                if !self.session.arrays.free(id, &mut *self.board.heap) {
                    tracing::debug!(id, "free of empty array");
                }
                Effect::default()
            }
            Pict => {
                if let Some((values, width)) = self.elements(0) {
                    self.print.push_str(&picture(&values, width));
                }
                Effect::default()
            }
            Gpio => {
                let repeat = self.unsigned(1);
                if let Some((values, _)) = self.elements(0) {
                    self.board.gpio.set(&values, repeat);
                }
                Effect::default()
            }
            Clrgpio => {
                let (mask, stay) = (self.unsigned(0), self.unsigned(1) != 0);
                self.board.gpio.clear(mask, stay);
                Effect::default()
            }
            Ingpio => {
                let pin = self.unsigned(1);
                let high = self.board.gpio.input(pin);
                Effect::write(if high { "1" } else { "0" }.to_string())
            }
            Snd | Intsnd => {
                let repeat = self.unsigned(1);
                if let Some((values, _)) = self.elements(0) {
                    if command == Snd {
                        self.board.sound.set(&values, repeat);
                    } else {
                        self.board.sound.interrupt(&values, repeat);
                    }
                }
                Effect::default()
            }
            Clrsnd => {
                self.board.sound.clear();
                Effect::default()
            }
            Beat => {
                let bpm = self.unsigned(0);
                self.board.sound.beat(bpm);
                Effect::default()
            }
            Save => {
                self.transfer(true);
                Effect::default()
            }
            Load => {
                self.transfer(false);
                Effect::default()
            }
            Label => {
                if let Err(e) = self.session.labels.rebuild(&mut self.lines, line) {
                    tracing::warn!(error = %e, "label rebuild stopped");
                }
                Effect::default()
            }
            Clear => {
                self.lines.clear();
                self.session.arrays.free_all(&mut *self.board.heap);
                Effect::halt()
            }
            Ptr => match self.target(1) {
                Some(n) => Effect::write(n.to_string()),
                None => Effect::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_stage() {
        assert_eq!(Meta::of(Command::Jmp).next_stage(), Stage::ExecuteCommand);
        assert_eq!(Meta::of(Command::Int).next_stage(), Stage::EnumerateSources);
        assert!(Meta::of(Command::Iff).operator);
        assert!(!Meta::of(Command::Print).operator);
    }

    #[test]
    fn test_every_command_has_meta() {
        for &command in Command::ALL.iter() {
            let meta = Meta::of(command);
            assert!(!meta.operator || meta.args >= 2, "{}", command);
        }
    }

    #[test]
    fn test_escapes() {
        let mut s = String::new();
        expand_escapes(r"a\sb\nc\ed\q\", &mut s);
        assert_eq!(s, "a b\nc\x1bd\\q\\");
    }

    #[test]
    fn test_picture() {
        assert_eq!(picture(&[0b1010_0001], 1), "#.#....#\n");
    }
}
