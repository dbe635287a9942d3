//! # Menu Errors
//!
//! Contract violations surface here: manual mutation of a derived list,
//! structural edits to a locked container, a missing list model. These are
//! programming errors in the embedding application, so they fail fast at the
//! call site and are never swallowed. Back/quit navigation is *not* an error;
//! it travels through [`crate::core::flow`].

use std::fmt;

#[derive(Debug)]
pub enum MenuError {
    /// Items on a dynamic list are derived from its model; adding one by hand
    /// is rejected regardless of lock state.
    ManualAddForbidden { list: String, item: String },
    /// Structural change attempted on a container while it is being displayed.
    ConcurrentModification {
        container: String,
        operation: &'static str,
    },
    /// The list's data source returned no sequence at materialize time.
    NoListModel { list: String },
    /// An action dispatch was requested on a list with no action binding.
    NoListAction { list: String },
    /// Two sibling items would share a shortcut.
    DuplicateShortcut { container: String, shortcut: String },
    /// A static menu was run with nothing to display.
    EmptyMenu { container: String },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::ManualAddForbidden { list, item } => write!(
                f,
                "it is forbidden to manually add an option (\"{item}\") to the list \"{list}\""
            ),
            MenuError::ConcurrentModification {
                container,
                operation,
            } => write!(
                f,
                "impossible to {operation} \"{container}\" while it is running"
            ),
            MenuError::NoListModel { list } => {
                write!(f, "no list model defined for list \"{list}\"")
            }
            MenuError::NoListAction { list } => {
                write!(f, "no list action defined for list \"{list}\"")
            }
            MenuError::DuplicateShortcut {
                container,
                shortcut,
            } => write!(
                f,
                "shortcut \"{shortcut}\" is already used in \"{container}\""
            ),
            MenuError::EmptyMenu { container } => {
                write!(f, "menu \"{container}\" has no options to display")
            }
        }
    }
}

impl std::error::Error for MenuError {}
