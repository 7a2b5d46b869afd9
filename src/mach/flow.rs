use crate::lang::Command;

/// Why lines are being skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Off,
    /// False `if`, or the `else` of a taken branch. Ends at `else`/`endif`.
    Branch,
    /// False loop head or `break`. Ends at `endwhile`/`next`; `else` and
    /// `endif` at depth zero are passed over, since a `break` inside an `if`
    /// must leave the loop rather than stop at the end of that `if`.
    Loop,
}

/// ## Pass flag and nest counter
///
/// Blocks are not parsed. While skipping, every block opener bumps `nest`
/// and every terminator either drops it or, at depth zero, ends the skip.

#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pass: Pass,
    nest: usize,
}

impl Default for Flow {
    fn default() -> Flow {
        Flow {
            pass: Pass::Off,
            nest: 0,
        }
    }
}

impl Flow {
    pub fn reset(&mut self) {
        *self = Flow::default();
    }

    pub fn is_skipping(&self) -> bool {
        self.pass != Pass::Off
    }

    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn nest(&self) -> usize {
        self.nest
    }

    pub fn skip(&mut self, pass: Pass) {
        self.pass = pass;
        self.nest = 0;
    }

    /// Feeds a keyword met while skipping.
    pub fn skipped(&mut self, command: Command) {
        use Command::*;
        if command.opens_block() {
            self.nest += 1;
            return;
        }
        match command {
            Else if self.nest == 0 => {
                if self.pass == Pass::Branch {
                    self.pass = Pass::Off;
                }
            }
            Endif => {
                if self.nest > 0 {
                    self.nest -= 1;
                } else if self.pass == Pass::Branch {
                    self.pass = Pass::Off;
                }
            }
            Endwhile | Next => {
                if self.nest > 0 {
                    self.nest -= 1;
                } else {
                    self.pass = Pass::Off;
                }
            }
            _ => {}
        }
    }
}
