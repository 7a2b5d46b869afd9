use super::val::{parse_signed, parse_unsigned, Domain, Val};
use crate::lang::{Arg, LabelTable, LineStore, LABEL_MARKER};

/// A classified argument after label and indirection lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Line(usize),
    Immediate(String),
    /// A relative reference before line 0.
    Empty,
}

/// Text after leading spaces and an optional label.
fn body(text: &str) -> &str {
    let text = text.trim_start_matches(' ');
    if text.as_bytes().first() == Some(&LABEL_MARKER) {
        text.find(' ').map(|i| &text[i..]).unwrap_or("")
    } else {
        text
    }
}

impl Operand {
    /// Resolves one argument of the line `current`.
    pub fn resolve(arg: &Arg, current: usize, labels: &LabelTable, lines: &LineStore) -> Operand {
        let pointer = |index: usize| {
            let text = lines.read(index).unwrap_or_default();
            Operand::Line(parse_unsigned(body(text)) as usize)
        };
        match arg {
            Arg::Label(name) => Operand::Line(labels.lookup(name).unwrap_or(0)),
            Arg::IndirectLabel(name) => pointer(labels.lookup(name).unwrap_or(0)),
            Arg::Line(digits) => Operand::Line(parse_unsigned(digits) as usize),
            Arg::Relative(digits) => {
                let line = current as i64 + parse_signed(digits) as i64;
                if line < 0 {
                    Operand::Empty
                } else {
                    Operand::Line(line as usize)
                }
            }
            Arg::IndirectLine(digits) => pointer(parse_unsigned(digits) as usize),
            Arg::Immediate(text) => Operand::Immediate(text.to_string()),
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Operand::Line(n) => Some(*n),
            _ => None,
        }
    }

    /// A line number for jump-like commands. Bare numbers count.
    pub fn target(&self) -> Option<usize> {
        match self {
            Operand::Line(n) => Some(*n),
            Operand::Immediate(s) => Some(parse_unsigned(s) as usize),
            Operand::Empty => None,
        }
    }

    /// Source text: the line content or the immediate itself.
    pub fn text<'a>(&'a self, lines: &'a LineStore) -> &'a str {
        match self {
            Operand::Line(n) => lines.read(*n).unwrap_or_default(),
            Operand::Immediate(s) => s,
            Operand::Empty => "",
        }
    }

    pub fn value(&self, domain: Domain, lines: &LineStore) -> Val {
        Val::parse(domain, self.text(lines))
    }
}
