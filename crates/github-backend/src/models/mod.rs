pub mod issue;
pub mod repo;

pub use issue::*;
pub use repo::*;
