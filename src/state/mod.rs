//! UI state kept free of any reactive types so it can be tested natively.

pub use editor::*;
pub use engagement::*;
pub use forms::*;
pub use listing::*;
pub use upload::*;

mod editor;
mod engagement;
mod forms;
mod listing;
mod upload;
