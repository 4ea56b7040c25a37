//! End-to-end checks of the three exercises through the public API.

use labsolve::exercises::{self, distributions, intersections, linear_systems};
use labsolve::integrate::trapezoid;
use labsolve::linalg::{LinearSystem, LinearSystemAlgorithms};
use labsolve::optimize::{Dedup, IntersectionOptions, RootMethod, find_intersections};
use labsolve::stats::{ContinuousDistribution, Normal, evaluate_curve};
use numr::runtime::cpu::{CpuClient, CpuDevice};

fn setup() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuClient::new(device.clone());
    (client, device)
}

#[test]
fn test_origin_is_not_a_crossing() {
    let (f1, f2) = (intersections::f1, intersections::f2);
    assert_eq!(f1(0.0), -3.0);
    assert_eq!(f2(0.0), 0.0);

    let report = intersections::solve().unwrap();
    for &x in &report.intersections.points {
        assert!((-5.0..=5.0).contains(&x));
        assert!((f1(x) - f2(x)).abs() < 0.01);
    }
}

#[test]
fn test_known_crossings() {
    let expected = [
        -3.912292859183039,
        -2.364717562515177,
        1.030137027625054,
        2.51431297441912,
        3.874414893582066,
    ];
    let report = intersections::solve().unwrap();
    let points = &report.intersections.points;
    assert_eq!(points.len(), expected.len());
    for (x, e) in points.iter().zip(expected) {
        assert!((x - e).abs() < 1e-8, "{} vs {}", x, e);
    }
}

#[test]
fn test_exact_dedup_still_respects_invariants() {
    let options = IntersectionOptions {
        dedup: Dedup::Exact,
        method: RootMethod::Newton,
        ..Default::default()
    };
    let result =
        find_intersections(intersections::f1, intersections::f2, -5.0, 5.0, &options).unwrap();
    assert!(result.points.len() >= 5);
    for &x in &result.points {
        assert!((intersections::f1(x) - intersections::f2(x)).abs() < options.epsilon);
    }
}

#[test]
fn test_standard_normal_symmetry_and_mass() {
    let n = Normal::standard();
    assert_eq!(n.cdf(0.0), 0.5);

    let curve = evaluate_curve(&n, -5.0, 5.0, exercises::DISTRIBUTION_SAMPLES).unwrap();
    let mass = trapezoid(&curve.pdf, &curve.x).unwrap();
    assert!((mass - 1.0).abs() < 1e-3);
}

#[test]
fn test_distribution_evaluation_is_deterministic() {
    let first = distributions::generate().unwrap();
    let second = distributions::generate().unwrap();
    for (a, b) in first.iter().zip(&second) {
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.curve.pdf), bits(&b.curve.pdf));
        assert_eq!(bits(&a.curve.cdf), bits(&b.curve.cdf));
    }
}

#[test]
fn test_known_linear_solves() {
    let solved = linear_systems::solve().unwrap();
    let systems = [
        LinearSystem::from_arrays(exercises::A1, exercises::B1).unwrap(),
        LinearSystem::from_arrays(exercises::A2, exercises::B2).unwrap(),
    ];
    for (s, system) in solved.iter().zip(&systems) {
        let r = system.residual(&s.solution).unwrap();
        assert!(r.iter().all(|v| v.abs() < 1e-9));
    }
}

#[test]
fn test_linear_solve_is_deterministic() {
    let (client, _device) = setup();
    let system = LinearSystem::from_arrays(exercises::A2, exercises::B2).unwrap();
    let first = client.solve_system(&system).unwrap();
    let second = client.solve_system(&system).unwrap();
    assert_eq!(
        first.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
        second.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
    );
}
