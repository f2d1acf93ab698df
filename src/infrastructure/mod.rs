//! Infrastructure Layer
//!
//! All file and stdin I/O for tree data lives here; the domain layer only
//! sees parsed `RawInput`.

pub mod input;

pub use input::{load_input, read_input, InputFormat, STDIN_PATH};
