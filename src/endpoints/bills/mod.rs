pub mod query;
pub use query::query;

pub mod create;
pub use create::create;
