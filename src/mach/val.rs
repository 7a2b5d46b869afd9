use super::bcd::{self, Bcd};

/// How a command reads its source operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Operands are used as line pointers only.
    None,
    Signed,
    Unsigned,
    /// Unsigned input, rendered as fixed-width binary.
    Logic,
    Decimal,
    Float,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Signed(i32),
    Unsigned(u32),
    /// `None` is the saturated value.
    Decimal(Option<Bcd>),
    Float(f64),
    Text(String),
}

/// Sign and body of a numeral after dropping spaces and commas.
fn numeral(s: &str) -> (bool, String) {
    let mut chars = s.chars().filter(|&c| c != ' ' && c != ',').peekable();
    let mut negative = false;
    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            negative = c == '-';
            chars.next();
        }
    }
    let body = chars
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '+' || *c == '-')
        .collect();
    (negative, body)
}

fn radix_digits(body: &str) -> (u32, &str) {
    let lower = body.get(..2).map(|p| p.to_ascii_lowercase());
    match lower.as_deref() {
        Some("0x") => (16, &body[2..]),
        Some("0b") => (2, &body[2..]),
        _ => (10, body),
    }
}

/// Leading decimal float text: digits, one point, optional exponent.
fn float_prefix(body: &str) -> &str {
    let bytes = body.as_bytes();
    let mut end = 0;
    let mut point = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !point => {
                point = true;
                end += 1
            }
            _ => break,
        }
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > start {
            end = exp;
        }
    }
    &body[..end]
}

/// Integer value of `s` as a wrapping 32-bit pattern. A decimal point
/// sends the numeral through `f64` and truncates.
fn parse_bits(s: &str) -> u32 {
    let (negative, body) = numeral(s);
    let (radix, digits) = radix_digits(&body);
    let mut bits: u32 = 0;
    if radix == 10 {
        let prefix = float_prefix(digits);
        if prefix.contains('.') || prefix.contains('e') || prefix.contains('E') {
            let f = prefix.parse::<f64>().unwrap_or(0.0);
            let f = if negative { -f } else { f };
            return if f < 0.0 { f as i32 as u32 } else { f as u32 };
        }
    }
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => bits = bits.wrapping_mul(radix).wrapping_add(d),
            None => break,
        }
    }
    if negative {
        bits.wrapping_neg()
    } else {
        bits
    }
}

pub fn parse_signed(s: &str) -> i32 {
    parse_bits(s) as i32
}

pub fn parse_unsigned(s: &str) -> u32 {
    parse_bits(s)
}

/// String to float; falls back to the integer parse when the fast path
/// finds no float numeral.
pub fn parse_float(s: &str) -> f64 {
    let (negative, body) = numeral(s);
    let prefix = float_prefix(&body);
    match prefix.parse::<f64>() {
        Ok(f) if radix_digits(&body).0 == 10 => {
            if negative {
                -f
            } else {
                f
            }
        }
        _ => parse_signed(s) as f64,
    }
}

/// `None` for a numeral too long to hold, or the saturated sentinel itself.
pub fn parse_decimal(s: &str) -> Option<Bcd> {
    if s.trim_start_matches(' ').starts_with(bcd::SATURATED) {
        return None;
    }
    let parsed = Bcd::parse(s);
    if parsed.is_none() {
        tracing::warn!(text = s, "decimal operand too long");
    }
    parsed
}

pub fn format_float(f: f64) -> String {
    format!("{}", f)
}

pub fn format_logic(n: u32) -> String {
    format!("0b{:032b}", n)
}

impl Val {
    pub fn parse(domain: Domain, s: &str) -> Val {
        match domain {
            Domain::Signed => Val::Signed(parse_signed(s)),
            Domain::Unsigned | Domain::Logic => Val::Unsigned(parse_unsigned(s)),
            Domain::Decimal => Val::Decimal(parse_decimal(s)),
            Domain::Float => Val::Float(parse_float(s)),
            Domain::None | Domain::Text => Val::Text(s.to_string()),
        }
    }

    pub fn zero(domain: Domain) -> Val {
        Val::parse(domain, "")
    }

    pub fn as_signed(&self) -> i32 {
        match self {
            Val::Signed(n) => *n,
            Val::Unsigned(n) => *n as i32,
            Val::Decimal(_) => parse_signed(&self.to_string()),
            Val::Float(f) => *f as i32,
            Val::Text(s) => parse_signed(s),
        }
    }

    pub fn as_unsigned(&self) -> u32 {
        match self {
            Val::Signed(n) => *n as u32,
            Val::Unsigned(n) => *n,
            Val::Decimal(_) => parse_unsigned(&self.to_string()),
            Val::Float(f) => {
                if *f < 0.0 {
                    *f as i32 as u32
                } else {
                    *f as u32
                }
            }
            Val::Text(s) => parse_unsigned(s),
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Val::Signed(n) => *n as f64,
            Val::Unsigned(n) => *n as f64,
            Val::Decimal(_) => parse_float(&self.to_string()),
            Val::Float(f) => *f,
            Val::Text(s) => parse_float(s),
        }
    }

    /// `None` when saturated.
    pub fn as_decimal(&self) -> Option<Bcd> {
        match self {
            Val::Decimal(d) => *d,
            Val::Signed(n) => Bcd::from_int(*n as i64),
            Val::Unsigned(n) => Bcd::from_int(*n as i64),
            other => parse_decimal(&other.to_string()),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Val::Text(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Signed(n) => write!(f, "{}", n),
            Val::Unsigned(n) => write!(f, "{}", n),
            Val::Decimal(Some(d)) => write!(f, "{}", d),
            Val::Decimal(None) => write!(f, "{}", bcd::SATURATED),
            Val::Float(n) => write!(f, "{}", format_float(*n)),
            Val::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Renders a decimal result, saturating on overflow.
pub fn format_decimal(result: Option<Bcd>) -> String {
    bcd::render(result)
}
