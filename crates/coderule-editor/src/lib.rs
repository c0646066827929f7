//! Editing operations over a code rule's segment list.
//!
//! [`EditorState`] is an immutable value: insert, remove, move, type
//! switches and field edits each return the next state. A commit validates
//! every form and either hands back the encoded rule or the failure maps.

mod edit;
mod error;
mod fill;
mod options;
mod state;

pub use edit::{FieldEdit, apply_edit};
pub use error::{EditError, Result};
pub use fill::{fill_user_input, fill_user_input_at};
pub use options::EditorOptions;
pub use state::{Commit, EditStatus, EditorState};
