use crate::lang::Operator;

pub struct Function {}

impl Function {
    /// Applies a single-operand float function; `None` for any other operator.
    pub fn float(op: Operator, val: f64) -> Option<f64> {
        use Operator::*;
        Some(match op {
            Sqrt => val.sqrt(),
            Rad => val.to_radians(),
            Sin => val.sin(),
            Cos => val.cos(),
            Tan => val.tan(),
            Ln => val.ln(),
            Log => val.log10(),
            Abs => val.abs(),
            Neg => -val,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions() {
        assert_eq!(Function::float(Operator::Sqrt, 9.0), Some(3.0));
        assert_eq!(Function::float(Operator::Neg, 2.5), Some(-2.5));
        let log = Function::float(Operator::Log, 1000.0).unwrap();
        assert!((log - 3.0).abs() < 1e-12);
        let rad = Function::float(Operator::Rad, 180.0).unwrap();
        assert!((rad - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(Function::float(Operator::Add, 1.0), None);
    }
}
