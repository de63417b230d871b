pub use audience::*;
pub use blog::*;
pub use blog_version::*;
pub use comment::*;
pub use language::*;
pub use like::*;
pub use pagination::*;
pub use sort_by::*;
pub use user::*;

mod audience;
mod blog;
mod blog_version;
mod comment;
mod language;
mod like;
mod pagination;
mod sort_by;
mod user;
