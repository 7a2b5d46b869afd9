use super::bcd::Bcd;
use crate::lang::Operator;
use std::cmp::Ordering;

/// ## Condition flags of a comparison
///
/// Laid out like the ARM NZCV nibble. Conditions test these bits the way a
/// conditional branch does, so signed and unsigned `<` differ.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    pub const N: u8 = 0b1000;
    pub const Z: u8 = 0b0100;
    pub const C: u8 = 0b0010;
    pub const V: u8 = 0b0001;

    fn from_bits(n: bool, z: bool, c: bool, v: bool) -> Flags {
        let mut bits = 0;
        if n {
            bits |= Flags::N;
        }
        if z {
            bits |= Flags::Z;
        }
        if c {
            bits |= Flags::C;
        }
        if v {
            bits |= Flags::V;
        }
        Flags(bits)
    }

    /// Flags of `lhs - rhs` on 32-bit registers.
    pub fn subtract(lhs: u32, rhs: u32) -> Flags {
        let (result, borrow) = lhs.overflowing_sub(rhs);
        let (_, overflow) = (lhs as i32).overflowing_sub(rhs as i32);
        Flags::from_bits((result as i32) < 0, result == 0, !borrow, overflow)
    }

    /// Flags of an ordered comparison, for decimal and float operands.
    pub fn ordering(ordering: Option<Ordering>) -> Flags {
        match ordering {
            Some(Ordering::Less) => Flags::from_bits(true, false, false, false),
            Some(Ordering::Equal) => Flags::from_bits(false, true, true, false),
            Some(Ordering::Greater) => Flags::from_bits(false, false, true, false),
            None => Flags::from_bits(false, false, true, true),
        }
    }

    /// String comparison only feeds Z.
    pub fn equality(equal: bool) -> Flags {
        Flags::from_bits(false, equal, false, false)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    fn n(self) -> bool {
        self.0 & Flags::N != 0
    }
    fn z(self) -> bool {
        self.0 & Flags::Z != 0
    }
    fn c(self) -> bool {
        self.0 & Flags::C != 0
    }
    fn v(self) -> bool {
        self.0 & Flags::V != 0
    }

    /// Signed conditions: EQ NE LT GE GT LE.
    pub fn signed(self, op: Operator) -> bool {
        use Operator::*;
        match op {
            Eq => self.z(),
            NotEq => !self.z(),
            Lt => self.n() != self.v(),
            GtEq => self.n() == self.v(),
            Gt => !self.z() && self.n() == self.v(),
            LtEq => self.z() || self.n() != self.v(),
            _ => false,
        }
    }

    /// Unsigned conditions: EQ NE CC CS HI LS.
    pub fn unsigned(self, op: Operator) -> bool {
        use Operator::*;
        match op {
            Eq => self.z(),
            NotEq => !self.z(),
            Lt => !self.c(),
            GtEq => self.c(),
            Gt => self.c() && !self.z(),
            LtEq => !self.c() || self.z(),
            _ => false,
        }
    }
}

pub struct Operation {}

impl Operation {
    pub fn signed(op: Operator, lhs: i32, rhs: i32) -> Option<i32> {
        use Operator::*;
        Some(match op {
            Add => lhs.wrapping_add(rhs),
            Sub => lhs.wrapping_sub(rhs),
            Mul => lhs.wrapping_mul(rhs),
            Div => lhs.checked_div(rhs).unwrap_or(0),
            Mod => lhs.checked_rem(rhs).unwrap_or(0),
            BitAnd => lhs & rhs,
            BitOr => lhs | rhs,
            BitXor => lhs ^ rhs,
            Shl => lhs.checked_shl(rhs as u32).unwrap_or(0),
            Shr => lhs
                .checked_shr(rhs as u32)
                .unwrap_or(if lhs < 0 { -1 } else { 0 }),
            _ => return None,
        })
    }

    pub fn unsigned(op: Operator, lhs: u32, rhs: u32) -> Option<u32> {
        use Operator::*;
        Some(match op {
            Add => lhs.wrapping_add(rhs),
            Sub => lhs.wrapping_sub(rhs),
            Mul => lhs.wrapping_mul(rhs),
            Div => lhs.checked_div(rhs).unwrap_or(0),
            Mod => lhs.checked_rem(rhs).unwrap_or(0),
            BitAnd => lhs & rhs,
            BitOr => lhs | rhs,
            BitXor => lhs ^ rhs,
            Shl => lhs.checked_shl(rhs).unwrap_or(0),
            Shr => lhs.checked_shr(rhs).unwrap_or(0),
            _ => return None,
        })
    }

    /// Outer `None` means the operator does not apply; inner `None` is a
    /// saturated result. A saturated operand saturates the result.
    pub fn decimal(op: Operator, lhs: Option<Bcd>, rhs: Option<Bcd>) -> Option<Option<Bcd>> {
        use Operator::*;
        if !matches!(op, Add | Sub | Mul | Div | Mod) {
            return None;
        }
        let (lhs, rhs) = match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => (lhs, rhs),
            _ => return Some(None),
        };
        Some(match op {
            Add => lhs.add(rhs),
            Sub => lhs.sub(rhs),
            Mul => lhs.mul(rhs),
            Div => lhs.div(rhs),
            _ => lhs.rem(rhs),
        })
    }

    pub fn float(op: Operator, lhs: f64, rhs: f64) -> Option<f64> {
        use Operator::*;
        Some(match op {
            Add => lhs + rhs,
            Sub => lhs - rhs,
            Mul => lhs * rhs,
            Div => lhs / rhs,
            Mod => lhs % rhs,
            _ => return None,
        })
    }

    pub fn compare_signed(op: Operator, lhs: i32, rhs: i32) -> bool {
        Flags::subtract(lhs as u32, rhs as u32).signed(op)
    }

    pub fn compare_unsigned(op: Operator, lhs: u32, rhs: u32) -> bool {
        Flags::subtract(lhs, rhs).unsigned(op)
    }

    /// Saturated operands are unordered.
    pub fn compare_decimal(op: Operator, lhs: Option<Bcd>, rhs: Option<Bcd>) -> bool {
        Flags::ordering(lhs.zip(rhs).map(|(l, r)| l.compare(r))).signed(op)
    }

    pub fn compare_float(op: Operator, lhs: f64, rhs: f64) -> bool {
        Flags::ordering(lhs.partial_cmp(&rhs)).signed(op)
    }

    pub fn compare_text(op: Operator, lhs: &str, rhs: &str) -> bool {
        Flags::equality(lhs == rhs).signed(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operator::*;

    #[test]
    fn test_signed_arithmetic() {
        assert_eq!(Operation::signed(Add, 2, 3), Some(5));
        assert_eq!(Operation::signed(Add, i32::max_value(), 1), Some(i32::min_value()));
        assert_eq!(Operation::signed(Div, 7, 0), Some(0));
        assert_eq!(Operation::signed(Mod, -7, 3), Some(-1));
        assert_eq!(Operation::signed(Shr, -8, 1), Some(-4));
        assert_eq!(Operation::signed(Shl, 1, 40), Some(0));
        assert_eq!(Operation::signed(Lt, 1, 2), None);
    }

    #[test]
    fn test_unsigned_arithmetic() {
        assert_eq!(Operation::unsigned(Sub, 0, 1), Some(u32::max_value()));
        assert_eq!(Operation::unsigned(Shr, 0x8000_0000, 31), Some(1));
        assert_eq!(Operation::unsigned(BitXor, 0b1100, 0b1010), Some(0b0110));
    }

    #[test]
    fn test_signed_versus_unsigned_less() {
        assert!(Operation::compare_signed(Lt, -1, 1));
        assert!(!Operation::compare_unsigned(Lt, (-1i32) as u32, 1));
    }

    #[test]
    fn test_overflowing_compare() {
        assert!(Operation::compare_signed(Lt, i32::min_value(), 1));
        assert!(Operation::compare_signed(Gt, i32::max_value(), -1));
    }

    #[test]
    fn test_all_conditions() {
        for &(l, r) in &[(5, 5), (5, 6), (6, 5)] {
            assert_eq!(Operation::compare_signed(Eq, l, r), l == r);
            assert_eq!(Operation::compare_signed(NotEq, l, r), l != r);
            assert_eq!(Operation::compare_signed(LtEq, l, r), l <= r);
            assert_eq!(Operation::compare_signed(GtEq, l, r), l >= r);
            assert_eq!(Operation::compare_unsigned(Lt, l as u32, r as u32), l < r);
            assert_eq!(Operation::compare_unsigned(Gt, l as u32, r as u32), l > r);
            assert_eq!(Operation::compare_float(LtEq, l as f64, r as f64), l <= r);
        }
    }

    #[test]
    fn test_text_only_sets_z() {
        assert!(Operation::compare_text(Eq, "abc", "abc"));
        assert!(Operation::compare_text(NotEq, "abc", "abd"));
        assert_eq!(Flags::equality(true).bits(), Flags::Z);
        assert!(!Operation::compare_text(Lt, "a", "b"));
    }

    #[test]
    fn test_nan_is_unordered() {
        assert!(!Operation::compare_float(Eq, std::f64::NAN, 1.0));
        assert!(!Operation::compare_float(GtEq, std::f64::NAN, 1.0));
    }

    #[test]
    fn test_decimal_saturation_propagates() {
        let one = Bcd::from_int(1);
        assert_eq!(Operation::decimal(Add, None, one), Some(None));
        assert_eq!(Operation::decimal(Mul, one, one).map(|r| r.is_some()), Some(true));
        assert_eq!(Operation::decimal(Shl, None, one), None);
        assert!(!Operation::compare_decimal(Eq, None, None));
        assert!(Operation::compare_decimal(Lt, Bcd::from_int(-1), one));
    }
}
