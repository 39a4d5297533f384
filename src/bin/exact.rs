//! Binary that takes as standard in a graph in .gr format, computes an optimal vertex
//! cover and writes the solution to standard out.

use std::error;
use std::io;

use chord_and_cover::{graph::UGraph, cover_instance::CoverInstance, cust_error::ProcessingError};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let stdin = io::stdin();
    let stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let graph = UGraph::read_gr(stdin)?;
    let mut instance = CoverInstance::new(graph);
    let org = instance.clone();
    let cover = instance.solve()?;

    // Validate
    if !org.validate_solution(&cover) {
        return Err(Box::new(ProcessingError::InconsistentState(
            "the computed cover leaves an edge uncovered".to_owned())));
    }

    CoverInstance::write_solution(&cover, &mut stdout)?;
    Ok(())
}
