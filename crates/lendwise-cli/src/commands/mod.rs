pub mod applications;
pub mod schedule;
pub mod transactions;
pub mod users;
