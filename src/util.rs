use std::path::Path;

use log::{info, warn};

use crate::{
    colour::{Colouring, CheckerResult, checker, write_colouring},
    error::Result,
    interference::read_from_file,
    search::greedy_degree::{greedy_colour, rank_by_degree},
};

/** reads the graph in inst_filename, colours it and writes the colouring in sol_filename.
Nothing is written if reading or colouring fails. */
pub fn run(inst_filename:&Path, sol_filename:&Path) -> Result<Colouring> {
    info!("reading instance: {}...", inst_filename.display());
    let instance = read_from_file(inst_filename)?;
    instance.display_statistics();
    let ranked = rank_by_degree(&instance);
    let solution = greedy_colour(&instance, &ranked)?;
    match checker(&instance, &solution) {
        CheckerResult::Ok(nb_colours) => info!("nb colours: {}", nb_colours),
        checker_result => warn!("invalid colouring (reason: {:?})", checker_result),
    };
    info!("printing solution in: {}", sol_filename.display());
    write_colouring(sol_filename, &solution)?;
    Ok(solution)
}
