//! Dense linear systems.
//!
//! Square systems `A x = b` are described by [`LinearSystem`] and solved on a
//! numr backend through [`LinearSystemAlgorithms`]. Solutions are presented
//! as a [`SolutionTable`] with `x1..xn` column headers.
//!
//! # Example
//!
//! ```
//! use labsolve::linalg::{solve_dense, LinearSystem};
//!
//! let system = LinearSystem::from_arrays([[2.0, 0.0], [0.0, 4.0]], [1.0, 2.0])?;
//! let x = solve_dense(&system)?;
//! assert!((x[0] - 0.5).abs() < 1e-12);
//! assert!(system.max_residual(&x)? < 1e-12);
//! # Ok::<(), labsolve::linalg::LinalgError>(())
//! ```

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod system;
pub mod table;
pub mod traits;

pub use error::{LinalgError, LinalgResult};
pub use system::LinearSystem;
pub use table::SolutionTable;
pub use traits::LinearSystemAlgorithms;

use numr::runtime::cpu::{CpuClient, CpuDevice};

/// Solve `system` on the CPU backend.
pub fn solve_dense(system: &LinearSystem) -> LinalgResult<Vec<f64>> {
    let device = CpuDevice::new();
    let client = CpuClient::new(device);
    client.solve_system(system)
}
