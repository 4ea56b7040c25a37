//! Roots of `x - 3cos(x)` and `cos(2x)x^3`, and where the two curves cross.

use labsolve::exercises::intersections;
use labsolve::optimize::SeedOutcome;
use std::error::Error;

fn print_roots(name: &str, outcomes: &[SeedOutcome]) {
    let roots: Vec<String> = outcomes
        .iter()
        .map(|o| match o.root() {
            Some(r) => r.to_string(),
            None => "-".to_string(),
        })
        .collect();
    println!("roots of {}: [{}]", name, roots.join(", "));
}

fn main() -> Result<(), Box<dyn Error>> {
    let report = intersections::solve()?;

    print_roots("x - 3cos(x)", &report.f1_roots);
    print_roots("cos(2x)x^3", &report.f2_roots);

    let found = &report.intersections;
    println!("intersections: {:?}", found.points);

    let failures = report.failure_count();
    if failures > 0 || found.rejected > 0 {
        eprintln!(
            "{} seeds did not converge, {} roots fell outside [-5, 5] or the tolerance",
            failures, found.rejected
        );
    }

    #[cfg(feature = "plot")]
    {
        let path = std::path::Path::new("problem_b.png");
        labsolve::plot::render_intersections(&report, path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
