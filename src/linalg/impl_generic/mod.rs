pub mod dense;

pub use dense::{solve_dense_impl, solve_system_impl};
