pub use session::*;
pub use storage::*;

mod session;
mod storage;
