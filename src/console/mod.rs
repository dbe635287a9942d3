//! # Console Adapter
//!
//! The stdin/stdout-specific layer. This is the only module that touches the
//! real terminal; everything in `core` talks to the [`Console`] trait so menus
//! can be driven by a scripted console in tests.

use std::io::{self, BufRead, Write};

use log::debug;

/// Output sink + input source for a menu run.
///
/// `read_line` blocks until the user submits a line. Returning `None` means
/// the input source is exhausted (EOF, or a test script ran out of lines);
/// the run loop treats that as a quit.
pub trait Console {
    /// Print a string without a trailing newline (used for the prompt).
    fn print(&mut self, text: &str);

    /// Print a full line.
    fn print_line(&mut self, line: &str);

    /// Read one raw input line, without its line terminator.
    fn read_line(&mut self) -> Option<String>;
}

/// Console over the process stdin/stdout.
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) {
        print!("{text}");
        // The prompt has no newline, so stdout must be flushed by hand.
        let _ = io::stdout().flush();
    }

    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) => {
                debug!("stdin reached EOF");
                None
            }
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                debug!("stdin read failed: {e}");
                None
            }
        }
    }
}
