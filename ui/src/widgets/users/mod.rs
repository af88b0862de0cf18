//! Users panel and its parts:
//! - `panel`: the panel widget wiring state to the pieces below
//! - `search`: the search box
//! - `table`: table rendering (columns, header, row)
//! - `pagination`: Previous / page numbers / Next

mod pagination;
mod panel;
mod search;
pub mod table;

pub use pagination::{PageAction, pagination};
pub use panel::{summary_line, users_panel};
pub use search::{SEARCH_PLACEHOLDER, search_box};
