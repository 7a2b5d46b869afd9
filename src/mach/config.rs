use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Build-time geometry of the interpreter
///
/// The board builds differ only in these numbers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of line slots, including slot 0 and the input slot.
    pub lines: usize,
    /// Bytes per slot, including the terminating NUL.
    pub row: usize,
    /// Label table capacity.
    pub labels: usize,
    /// Significant bytes of a label name.
    pub label_len: usize,
    /// Link stack capacity.
    pub link_depth: usize,
    /// Raw-data array table capacity.
    pub arrays: usize,
    /// Operands kept per instruction.
    pub args: usize,
    /// Seed for `rand`; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            lines: 128,
            row: 64,
            labels: 32,
            label_len: 8,
            link_depth: 16,
            arrays: 16,
            args: 8,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.lines < 4 || self.lines > u16::max_value() as usize {
            return Err(error!(OutOfRange; "LINES"));
        }
        if self.row < 8 || self.row > 256 {
            return Err(error!(OutOfRange; "ROW"));
        }
        if self.arrays == 0 || self.arrays > 16 {
            return Err(error!(OutOfRange; "ARRAYS"));
        }
        if self.link_depth == 0 || self.label_len == 0 {
            return Err(error!(OutOfRange; "LINK DEPTH"));
        }
        if self.args < 8 {
            return Err(error!(OutOfRange; "ARGUMENTS"));
        }
        Ok(())
    }

    /// Floor of the push/pop scratch stack; empty when `stack_offset` is here.
    pub fn stack_floor(&self) -> usize {
        self.lines - 2
    }

    /// Defaults overridden by `ALOHA_LINES`, `ALOHA_ROW` and `ALOHA_SEED`.
    pub fn from_env() -> Result<Config> {
        fn var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
            match std::env::var(name) {
                Ok(s) => match s.trim().parse() {
                    Ok(v) => Ok(Some(v)),
                    Err(_) => Err(error!(SyntaxError; "BAD ENVIRONMENT VALUE")),
                },
                Err(_) => Ok(None),
            }
        }
        let mut config = Config::default();
        if let Some(lines) = var("ALOHA_LINES")? {
            config.lines = lines;
        }
        if let Some(row) = var("ALOHA_ROW")? {
            config.row = row;
        }
        config.seed = var("ALOHA_SEED")?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().stack_floor(), 126);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let config = Config {
            row: 2,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let config = Config {
            arrays: 17,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
