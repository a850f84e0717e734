//! Handlers: run a schema object's SQL through a client and capture the
//! outcome into a [`QueryResult`](crate::result::QueryResult) or
//! [`ExecResult`](crate::result::ExecResult).
//!
//! Every operation builds a fresh schema object, so a handler can be shared
//! freely between sequential calls. Handlers never return `Err`; a failed
//! operation yields an empty data list and a `Failed` status.

mod brand;
mod department;
mod product;

pub use brand::BrandHandler;
pub use department::DepartmentHandler;
pub use product::ProductHandler;

#[cfg(test)]
mod tests;
