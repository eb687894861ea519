use std::path::PathBuf;

use clap::Parser;
use lattice::{reader, Domain, Grid, LatticeError, Point};
use rustc_hash::FxHashSet;

#[derive(Parser)]
#[command(name = "lattice")]
#[command(about = "Ingest a point list into a dense grid and report occupancy", long_about = None)]
struct Cli {
    /// Point list file: one point per line, blank lines and '#' comments
    /// skipped
    file: PathBuf,

    /// Number of coordinates per point
    #[arg(long, default_value_t = 2)]
    dimension: usize,

    /// Columns to read coordinates from (defaults to the first `dimension`
    /// columns in order)
    #[arg(long, num_args = 1..)]
    columns: Option<Vec<usize>>,
}

fn bounding_domain(points: &[Point]) -> Domain {
    let dimension = points[0].dimension();
    let mut lower = points[0].clone();
    let mut upper = points[0].clone();
    for p in &points[1..] {
        for k in 0..dimension {
            lower[k] = lower[k].min(p[k]);
            upper[k] = upper[k].max(p[k]);
        }
    }
    Domain::new(lower, upper)
}

fn render_2d(grid: &Grid<u32>) {
    let lower = grid.domain().lower_bound().clone();
    let upper = grid.domain().upper_bound().clone();
    // Highest y first so the render matches the usual orientation.
    for y in (lower[1]..=upper[1]).rev() {
        let start = Point::new(&[lower[0], y]);
        let mut cursor = grid.span(&start, 0);
        let end = grid.span_end(&start, 0);
        let mut row = String::new();
        while cursor != end {
            let hits = *grid.at(&cursor);
            row.push(match hits {
                0 => '.',
                1..=9 => char::from_digit(hits, 10).unwrap(),
                _ => '#',
            });
            cursor.next();
        }
        println!("[lattice] {}", row);
    }
}

fn main() -> Result<(), LatticeError> {
    let cli = Cli::parse();

    println!("[lattice] Reading points from {}", cli.file.display());
    let points = match &cli.columns {
        Some(columns) => reader::points_from_file_with_columns(&cli.file, columns)?,
        None => reader::points_from_file(&cli.file, cli.dimension)?,
    };

    if points.is_empty() {
        println!("[lattice] No points found");
        return Ok(());
    }

    let distinct: FxHashSet<&Point> = points.iter().collect();
    println!(
        "[lattice] {} point(s) read, {} distinct",
        points.len(),
        distinct.len()
    );

    let domain = bounding_domain(&points);
    println!("[lattice] Bounding domain: {}", domain);
    println!(
        "[lattice] Extent: {}, volume: {}",
        domain.extent(),
        domain.volume()
    );

    let mut grid: Grid<u32> = Grid::new(domain);
    for p in &points {
        let hits = grid.get(p);
        grid.set(p, hits + 1);
    }

    let occupied = grid.iter().filter(|&&v| v > 0).count();
    let max_hits = grid.iter().copied().max().unwrap_or(0);
    println!(
        "[lattice] Occupied {}/{} slot(s), max hits per point: {}",
        occupied,
        grid.len(),
        max_hits
    );

    if grid.domain().dimension() == 2 {
        println!("[lattice] Density map:");
        render_2d(&grid);
    }

    Ok(())
}
