//! Two dense linear systems and their solution tables.

use labsolve::exercises::linear_systems;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let solved = linear_systems::solve()?;

    for s in &solved {
        print!("{}", s.system);
        println!("{:?}", s.solution);
        println!("max residual: {:e}", s.residual);
        println!();
        print!("{}", s.table);
        println!();
    }

    #[cfg(feature = "plot")]
    {
        let path = std::path::Path::new("problem_c.png");
        labsolve::plot::render_solution_tables(&solved, path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
