pub mod amount;
pub mod bank;
pub mod csv;
pub mod internship;
pub mod model;

pub use amount::Amount;
pub use bank::Bank;
pub use internship::Program;
pub use model::{AccountKind, Operation, Owner};
