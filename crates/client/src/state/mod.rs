//! Screen-facing state: the product list with its filter projection,
//! and the view-state machine that selects the mounted screen.

mod list;
mod view;

pub use list::{ListState, RefreshTicket};
pub use view::{NavIntent, NavToken, ViewController, ViewState, reduce};
