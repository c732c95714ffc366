mod register;
pub use register::Register;

mod query;
pub use query::Query;
