use super::token::Operator;

/// An argument token classified by its leading sigil.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    /// `.name`
    Label(&'a str),
    /// `:name`, the labelled line holds a line number.
    IndirectLabel(&'a str),
    /// `@n`
    Line(&'a str),
    /// `%n`, relative to the executing line.
    Relative(&'a str),
    /// `[n`, line `n` holds a line number.
    IndirectLine(&'a str),
    /// `'text` or bare text.
    Immediate(&'a str),
}

/// Splits on runs of spaces.
pub fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(' ').filter(|t| !t.is_empty())
}

/// Splits off the leading keyword.
pub fn keyword(s: &str) -> (&str, &str) {
    let s = s.trim_start_matches(' ');
    match s.find(' ') {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

pub fn classify(token: &str) -> Arg {
    let mut chars = token.chars();
    let first = chars.next();
    let rest = chars.as_str();
    match first {
        Some('.') => Arg::Label(rest),
        Some(':') => Arg::IndirectLabel(rest),
        Some('@') => Arg::Line(rest),
        Some('%') if !rest.is_empty() => Arg::Relative(rest),
        Some('[') => Arg::IndirectLine(rest.trim_end_matches(']')),
        Some('\'') => Arg::Immediate(rest),
        _ => Arg::Immediate(token),
    }
}

/// Walks the arguments of one line. Operator tokens are taken out when
/// `with_operator` is set; at most `max` operands are kept.
pub fn arguments(s: &str, with_operator: bool, max: usize) -> (Vec<Arg>, Option<Operator>) {
    let mut args = vec![];
    let mut operator = None;
    for token in tokens(s) {
        if with_operator && operator.is_none() {
            if let Some(op) = Operator::from_token(token) {
                operator = Some(op);
                continue;
            }
        }
        if args.len() < max {
            args.push(classify(token));
        }
    }
    (args, operator)
}
