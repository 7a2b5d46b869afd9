//! # Aloha
//!
//! Line-store script interpreter with a simulated board.
//!

fn main() {
    aloha::term::main();
}
