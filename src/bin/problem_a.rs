//! Normal PDF/CDF panels with shaded tail probabilities.

use labsolve::exercises::distributions;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let panels = distributions::generate()?;

    for panel in &panels {
        println!("{}", panel.distribution);
        println!("  {}", panel.label());
        println!("  exact tail probability: {}", panel.probability());
        println!(
            "  trapezoid mass over [{}, {}]: {:.6} (tail: {:.6})",
            panel.window.0, panel.window.1, panel.mass, panel.region_mass
        );
        println!("  F({}) = {}", panel.marker.x, panel.marker.p);
    }

    #[cfg(feature = "plot")]
    {
        let path = std::path::Path::new("problem_a.png");
        labsolve::plot::render_distributions(&panels, path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
