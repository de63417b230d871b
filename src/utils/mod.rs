pub use format::*;

mod format;
