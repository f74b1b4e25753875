//! CLI for one-shot maze generation

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusty_maze::{generate_with, render, solve_with, CellId, Grid};

/// Carve a maze and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Maze width in cells
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Solve from the top-left to the bottom-right corner before printing
    #[arg(long)]
    solve: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut grid = Grid::new(args.rows, args.cols)?;
    generate_with(&mut grid, &mut rng);

    let solved = args.solve
        && solve_with(
            &mut grid,
            CellId::new(0, 0),
            CellId::new(args.rows - 1, args.cols - 1),
            &mut rng,
        );

    print!("{}", render(&grid, solved));
    Ok(())
}
