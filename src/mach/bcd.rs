use std::cmp::Ordering;

/// Significant decimal digits.
pub const DIGITS: u32 = 16;

/// Rendered in place of any result that does not fit.
pub const SATURATED: &str = "FFFFFFFFFFFFFFFF";

const LIMIT: i128 = 10_000_000_000_000_000;

/// ## 16-digit decimal number
///
/// `value * 10^-scale` with at most sixteen significant digits. Operations
/// return `None` on overflow; callers render that as [`SATURATED`].

#[derive(Debug, Clone, Copy, Default)]
pub struct Bcd {
    value: i128,
    scale: u32,
}

fn pow10(n: u32) -> i128 {
    10i128.pow(n)
}

impl Bcd {
    pub fn zero() -> Bcd {
        Bcd::default()
    }

    pub fn from_int(n: i64) -> Option<Bcd> {
        Bcd::normalize(n as i128, 0)
    }

    /// Parses the leading decimal numeral of `s`, skipping spaces and
    /// commas. No digits gives zero; more than sixteen integer digits
    /// gives `None`.
    pub fn parse(s: &str) -> Option<Bcd> {
        let mut chars = s.chars().filter(|&c| c != ' ' && c != ',').peekable();
        let mut negative = false;
        if let Some(&c) = chars.peek() {
            if c == '+' || c == '-' {
                negative = c == '-';
                chars.next();
            }
        }
        let mut value: i128 = 0;
        let mut scale = 0;
        let mut integer_digits = 0;
        let mut fraction = false;
        for c in chars {
            match c {
                '0'..='9' => {
                    let d = c as i128 - '0' as i128;
                    if fraction {
                        if digits(value) < DIGITS && scale < DIGITS {
                            value = value * 10 + d;
                            scale += 1;
                        }
                    } else {
                        value = value * 10 + d;
                        if value != 0 {
                            integer_digits += 1;
                        }
                        if integer_digits > DIGITS {
                            return None;
                        }
                    }
                }
                '.' if !fraction => fraction = true,
                _ => break,
            }
        }
        if negative {
            value = -value;
        }
        Bcd::normalize(value, scale)
    }

    fn normalize(mut value: i128, mut scale: u32) -> Option<Bcd> {
        while scale > 0 && (scale > DIGITS || value.abs() >= LIMIT || value % 10 == 0) {
            value /= 10;
            scale -= 1;
        }
        if value.abs() >= LIMIT {
            return None;
        }
        Some(Bcd { value, scale })
    }

    fn aligned(self, rhs: Bcd) -> (i128, i128, u32) {
        let scale = self.scale.max(rhs.scale);
        (
            self.value * pow10(scale - self.scale),
            rhs.value * pow10(scale - rhs.scale),
            scale,
        )
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Digits before the decimal point.
    pub fn integer_len(&self) -> usize {
        let int = (self.value / pow10(self.scale)).abs();
        if int == 0 {
            1
        } else {
            digits(int) as usize
        }
    }

    pub fn add(self, rhs: Bcd) -> Option<Bcd> {
        let (l, r, scale) = self.aligned(rhs);
        Bcd::normalize(l + r, scale)
    }

    pub fn sub(self, rhs: Bcd) -> Option<Bcd> {
        let (l, r, scale) = self.aligned(rhs);
        Bcd::normalize(l - r, scale)
    }

    pub fn mul(self, rhs: Bcd) -> Option<Bcd> {
        Bcd::normalize(self.value * rhs.value, self.scale + rhs.scale)
    }

    pub fn div(self, rhs: Bcd) -> Option<Bcd> {
        if rhs.value == 0 {
            return None;
        }
        // Twenty extra digits keep both sides well inside i128.
        let extra = 20 - rhs.scale;
        let numerator = self.value * pow10(rhs.scale + extra);
        let denominator = rhs.value * pow10(self.scale);
        Bcd::normalize(numerator / denominator, extra)
    }

    pub fn rem(self, rhs: Bcd) -> Option<Bcd> {
        let (l, r, scale) = self.aligned(rhs);
        if r == 0 {
            return None;
        }
        Bcd::normalize(l % r, scale)
    }

    pub fn compare(self, rhs: Bcd) -> Ordering {
        let (l, r, _) = self.aligned(rhs);
        l.cmp(&r)
    }
}

fn digits(mut n: i128) -> u32 {
    n = n.abs();
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

impl PartialEq for Bcd {
    fn eq(&self, other: &Bcd) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl std::fmt::Display for Bcd {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let abs = self.value.abs();
        if self.scale == 0 {
            return write!(f, "{}{}", sign, abs);
        }
        let unit = pow10(self.scale);
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / unit,
            abs % unit,
            width = self.scale as usize
        )
    }
}

/// Renders a result, saturating on overflow.
pub fn render(result: Option<Bcd>) -> String {
    match result {
        Some(bcd) => bcd.to_string(),
        None => {
            tracing::warn!("decimal result saturated");
            SATURATED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bcd(s: &str) -> Bcd {
        Bcd::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(bcd("1,234.50").to_string(), "1234.5");
        assert_eq!(bcd(" -0.25").to_string(), "-0.25");
        assert_eq!(bcd("+7").to_string(), "7");
        assert_eq!(bcd("abc").to_string(), "0");
        assert_eq!(bcd("12.5").integer_len(), 2);
    }

    #[test]
    fn test_parse_too_long() {
        assert!(Bcd::parse("12345678901234567").is_none());
        assert!(Bcd::parse("1234567890123456").is_some());
    }

    #[test]
    fn test_add_saturates() {
        let r = bcd("9999999999999999").add(bcd("1"));
        assert_eq!(render(r), SATURATED);
    }

    #[test]
    fn test_add_fraction() {
        assert_eq!(render(bcd("0.1").add(bcd("0.2"))), "0.3");
        assert_eq!(render(bcd("1.5").sub(bcd("2"))), "-0.5");
    }

    #[test]
    fn test_mul_truncates_fraction() {
        let r = bcd("12345678.12345678").mul(bcd("10"));
        assert_eq!(render(r), "123456781.2345678");
    }

    #[test]
    fn test_div() {
        assert_eq!(render(bcd("1").div(bcd("4"))), "0.25");
        assert_eq!(render(bcd("10").div(bcd("3"))), "3.333333333333333");
        assert_eq!(render(bcd("1").div(bcd("0"))), SATURATED);
    }

    #[test]
    fn test_rem() {
        assert_eq!(render(bcd("10").rem(bcd("3"))), "1");
        assert_eq!(render(bcd("-7.5").rem(bcd("2"))), "-1.5");
    }

    #[test]
    fn test_compare() {
        assert_eq!(bcd("2.50").compare(bcd("2.5")), Ordering::Equal);
        assert_eq!(bcd("-3").compare(bcd("1")), Ordering::Less);
    }
}
