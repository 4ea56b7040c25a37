pub mod dense;

pub use dense::LinearSystemAlgorithms;
