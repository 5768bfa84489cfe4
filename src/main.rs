use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::prelude::*;

use maze_graphs::config::MazeConfig;
use maze_graphs::generators::GeneratorKind;
use maze_graphs::graphs::GraphKind;
use maze_graphs::maze::Maze;
use maze_graphs::record::{RecordWriter, RunRecord};
use maze_graphs::renderer::TextRenderer;

/// Times maze generation across graph backends
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Json configuration of a single maze to generate, random mazes otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of random configurations, each run once per data structure
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Data structures to benchmark
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = GraphKind::ALL.to_vec()
    )]
    structures: Vec<GraphKind>,

    /// Generator for random configurations
    #[arg(long, default_value_t = GeneratorKind::RecurBack)]
    generator: GeneratorKind,

    /// Seed for configurations and generators
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the run record csv
    #[arg(long, default_value = "record.csv")]
    record: PathBuf,

    /// Print every generated maze
    #[arg(long)]
    visualise: bool,

    /// Width and height of a printed cell
    #[arg(long, default_value_t = 1)]
    cell_size: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // (config, generator seed)
    let runs: Vec<(MazeConfig, Option<u64>)> = match &args.config {
        Some(path) => {
            let config = MazeConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?;
            vec![(config, args.seed)]
        }
        None => random_runs(&args),
    };

    let file = File::create(&args.record)
        .with_context(|| format!("creating {}", args.record.display()))?;
    let mut writer = RecordWriter::new(BufWriter::new(file));

    for (config, seed) in &runs {
        run(config, *seed, &args, &mut writer)?;
    }

    writer.finish().context("flushing run record")?;
    log::info!("recorded {} runs to {}", runs.len(), args.record.display());

    Ok(())
}

/// Every structure gets the same configurations and generator seeds, so with
/// `--seed` each configuration produces the same maze on every backend.
fn random_runs(args: &Args) -> Vec<(MazeConfig, Option<u64>)> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let configs: Vec<MazeConfig> = (0..args.runs)
        .map(|_| MazeConfig::random(&mut rng, GraphKind::Array))
        .collect();

    let mut runs = Vec::with_capacity(configs.len() * args.structures.len());
    for kind in &args.structures {
        for (i, config) in configs.iter().enumerate() {
            let config = MazeConfig {
                data_structure: *kind,
                generator: args.generator,
                ..config.clone()
            };
            runs.push((config, args.seed.map(|seed| seed.wrapping_add(i as u64))));
        }
    }

    runs
}

fn run<W: Write>(
    config: &MazeConfig,
    seed: Option<u64>,
    args: &Args,
    writer: &mut RecordWriter<W>,
) -> anyhow::Result<()> {
    let mut maze = Maze::new(config.row_num, config.col_num, config.data_structure);

    for coords in config.entrance_coords() {
        if let Err(err) = maze.add_entrance(coords) {
            log::warn!("skipping entrance: {}", err);
        }
    }
    for coords in config.exit_coords() {
        if let Err(err) = maze.add_exit(coords) {
            log::warn!("skipping exit: {}", err);
        }
    }

    let mut generator = config.generator.build(seed);

    let start = Instant::now();
    generator.generate_maze(&mut maze);
    let run_time = start.elapsed();

    println!(
        "{} {}x{}: generation took {:.4} seconds",
        config.data_structure,
        config.row_num,
        config.col_num,
        run_time.as_secs_f64()
    );

    generator.add_entrances(&mut maze);
    generator.add_exits(&mut maze);

    writer
        .write(&RunRecord {
            data_struct: config.data_structure,
            row: config.row_num,
            col: config.col_num,
            run_time,
        })
        .context("writing run record")?;

    if args.visualise || config.visualise {
        let drawing = TextRenderer::new(args.cell_size).render(&maze);
        // showing the maze is best effort
        if let Err(err) = io::stdout().write_all(drawing.as_bytes()) {
            log::warn!("could not show maze: {}", err);
        }
    }

    Ok(())
}
