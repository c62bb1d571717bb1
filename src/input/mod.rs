//! Reading scripted visitor messages from files and stdin.

mod reader;

pub use reader::{InputReader, parse_messages};
