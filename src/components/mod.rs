//! UI Components
//!
//! Leptos views for the board.

mod add_list_button;
mod card_row;
mod list_column;
mod list_title_editor;

pub use add_list_button::AddListButton;
pub use card_row::CardRow;
pub use list_column::ListColumn;
pub use list_title_editor::ListTitleEditor;
