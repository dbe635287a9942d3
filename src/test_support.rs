//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::console::Console;

/// A console fed from a fixed input script, capturing everything printed.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
        }
    }

    /// Everything printed so far, prompts included.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn print_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn read_line(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }
}

/// A shared, mutable name collection standing in for an application model.
pub fn people_model(names: &[&str]) -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(
        names.iter().map(|s| s.to_string()).collect(),
    ))
}
