use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gsr::config::PackingConfig;
use gsr::io;
use gsr::io::cli::Cli;
use gsr::io::layout_to_svg::layout_to_svg;
use gsr::io::output::PackingOutput;
use gsr::opt::session::PackingSession;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackingConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }

    info!("Successfully parsed PackingConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let mut session = PackingSession::from_config(config)?;
    let sol = session.solve()?;

    let stem = match config.prng_seed {
        Some(seed) => seed.to_string(),
        None => "rand".to_string(),
    };

    {
        let output = PackingOutput::new(config, &sol);
        let solution_path = args.solution_folder.join(format!("sol_{stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{stem}.svg"));
        let title = format!("seed: {stem}");
        let svg = layout_to_svg(
            &sol.layout,
            &session.canvas,
            config.svg_draw_options,
            &title,
        );
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
