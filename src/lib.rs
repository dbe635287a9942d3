//! # menukit
//!
//! A library for interactive, text-driven hierarchical menus: show a lettered
//! list of choices, read a selection, run an action or descend into a
//! sub-menu. The centerpiece is [`core::List`], whose choices are regenerated
//! from a live data source on every display cycle, so what is shown always
//! matches what the model holds, even right after an action deleted
//! something.

pub mod console;
pub mod core;
pub mod render;

#[cfg(test)]
pub mod test_support;
