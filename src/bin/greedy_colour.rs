use std::path::Path;
use std::process;
use std::time::Instant;

use clap::{App, ErrorKind, load_yaml};
use log::{debug, info};
use serde_json::json;

use dogs_greedy_colour::error::Error;
use dogs_greedy_colour::util::run;


/** colours an interference graph using a degree-ordered greedy */
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    // parse arguments
    let yaml = load_yaml!("greedy_colour.yml");
    let main_args = match App::from_yaml(yaml).get_matches_safe() {
        Ok(m) => m,
        Err(e) if e.kind == ErrorKind::HelpDisplayed || e.kind == ErrorKind::VersionDisplayed => e.exit(),
        Err(e) => {
            debug!("{}", e.message);
            println!("{}", Error::Usage);
            process::exit(2);
        }
    };
    let inst_filename = main_args.value_of("input").unwrap_or_default();
    let sol_filename = main_args.value_of("output").unwrap_or_default();

    // solve it
    let t_start = Instant::now();
    match run(Path::new(inst_filename), Path::new(sol_filename)) {
        Ok(solution) => {
            let duration = t_start.elapsed().as_secs_f32();
            let stats = json!({
                "inst_name": inst_filename,
                "nb_vertices": solution.nb_vertices(),
                "nb_colors": solution.nb_colours(),
                "time_searched": duration,
            });
            info!("{}", stats);
        },
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        },
    }
}
