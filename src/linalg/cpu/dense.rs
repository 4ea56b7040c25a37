//! CPU implementation of the dense linear solve.

use crate::linalg::error::LinalgResult;
use crate::linalg::impl_generic::{solve_dense_impl, solve_system_impl};
use crate::linalg::system::LinearSystem;
use crate::linalg::traits::dense::LinearSystemAlgorithms;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl LinearSystemAlgorithms<CpuRuntime> for CpuClient {
    fn solve_dense(
        &self,
        a: &Tensor<CpuRuntime>,
        b: &Tensor<CpuRuntime>,
    ) -> LinalgResult<Tensor<CpuRuntime>> {
        solve_dense_impl(self, a, b)
    }

    fn solve_system(&self, system: &LinearSystem) -> LinalgResult<Vec<f64>> {
        solve_system_impl(self, system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::LinalgError;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    fn a1() -> LinearSystem {
        LinearSystem::from_arrays(
            [[3.0, 1.0, -1.0], [1.0, 4.0, 1.0], [2.0, 1.0, 2.0]],
            [2.0, 12.0, 10.0],
        )
        .unwrap()
    }

    fn a2() -> LinearSystem {
        LinearSystem::from_arrays(
            [
                [1.0, -10.0, 2.0, 4.0],
                [3.0, 0.0, 12.0, 0.0],
                [9.0, 2.0, 3.0, 4.0],
                [0.0, 0.0, 7.0, 0.0],
            ],
            [2.0, 12.0, 21.0, 37.0],
        )
        .unwrap()
    }

    #[test]
    fn test_solve_3x3() {
        let (client, _device) = setup();
        let system = a1();
        let x = client.solve_system(&system).unwrap();

        for (xi, expected) in x.iter().zip([1.0, 2.0, 3.0]) {
            assert!((xi - expected).abs() < 1e-10);
        }
        assert!(system.max_residual(&x).unwrap() < 1e-9);
    }

    #[test]
    fn test_solve_4x4() {
        let (client, _device) = setup();
        let system = a2();
        let x = client.solve_system(&system).unwrap();

        let expected = [-120.0 / 7.0, 88.0 / 7.0, 37.0 / 7.0, 235.0 / 7.0];
        for (xi, e) in x.iter().zip(expected) {
            assert!((xi - e).abs() < 1e-9);
        }
        assert!(system.max_residual(&x).unwrap() < 1e-9);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let (client, _device) = setup();
        let first = client.solve_system(&a2()).unwrap();
        let second = client.solve_system(&a2()).unwrap();
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn test_solve_dense_tensor() {
        let (client, device) = setup();
        let a = Tensor::<CpuRuntime>::from_slice(&[2.0f64, 0.0, 0.0, 4.0], &[2, 2], &device);
        let b = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0], &[2], &device);

        let x = client.solve_dense(&a, &b).unwrap();
        assert_eq!(x.shape(), &[2]);
        let x_data = x.to_vec::<f64>();
        assert!((x_data[0] - 0.5).abs() < 1e-12);
        assert!((x_data[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_solve_dense_shape_errors() {
        let (client, device) = setup();
        let a = Tensor::<CpuRuntime>::from_slice(
            &[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0],
            &[2, 3],
            &device,
        );
        let b = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0], &[2], &device);
        assert!(matches!(
            client.solve_dense(&a, &b),
            Err(LinalgError::NotSquare { .. })
        ));

        let a = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 0.0, 0.0, 1.0], &[2, 2], &device);
        let b = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0], &[3], &device);
        assert!(matches!(
            client.solve_dense(&a, &b),
            Err(LinalgError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_singular_system_fails() {
        let (client, _device) = setup();
        let system = LinearSystem::from_arrays([[1.0, 2.0], [2.0, 4.0]], [3.0, 6.0]).unwrap();
        assert!(client.solve_system(&system).is_err());
    }
}
