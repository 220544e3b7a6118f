pub mod application;
pub mod transaction;
pub mod user;

pub use application::*;
pub use transaction::*;
pub use user::*;
