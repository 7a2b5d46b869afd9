/*!
# Rust Language Module

This Rust module holds the text side of the interpreter: the line store
that is both program and memory, the label table, and the scanning of a
line into a keyword, operands and an operator.

*/

#[macro_use]
mod error;
mod label;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use label::LabelTable;
pub use lex::{arguments, classify, keyword, tokens, Arg};
pub use line::{Leading, LineStore, LABEL_MARKER};
pub use token::{Command, Operator};
