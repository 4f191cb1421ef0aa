pub mod types;
pub mod ordering;
pub mod queries;

pub use types::*;
pub use ordering::*;
