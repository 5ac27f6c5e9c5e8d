use clap::{Parser, Subcommand};
use kdpoint::autocomplete::{Autocomplete, BinaryRangeSearch};
use kdpoint::config;
use kdpoint::tools::{compare_point_sets, load_points, load_terms, random_points, random_queries};
use kdpoint::{KdTree, NaivePointSet, Point};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pointtool", version, about = "kdpoint CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the stored point nearest to a query coordinate
    Nearest {
        #[arg(long)]
        points: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Cross-check the k-d tree against brute force on random queries
    Verify {
        /// Point file; random points are generated when omitted
        #[arg(long)]
        points: Option<PathBuf>,
        #[arg(long, default_value_t = 10_000)]
        count: usize,
        #[arg(long, default_value_t = 10_000)]
        queries: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List the heaviest terms starting with a prefix
    Autocomplete {
        #[arg(long)]
        terms: PathBuf,
        #[arg(long, default_value = "")]
        prefix: String,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Nearest { points, x, y } => nearest_cmd(&points, x, y),
        Command::Verify {
            points,
            count,
            queries,
            seed,
        } => verify_cmd(points.as_deref(), count, queries, seed),
        Command::Autocomplete {
            terms,
            prefix,
            limit,
        } => autocomplete_cmd(&terms, &prefix, limit),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn nearest_cmd(path: &Path, x: f64, y: f64) -> kdpoint::Result<ExitCode> {
    let points = load_points(path)?;
    let tree = KdTree::build(points)?;
    println!(
        "Points: {} ({} stored, height {})",
        path.display(),
        tree.len(),
        tree.height()
    );

    let query = Point::new(x, y);
    match tree.nearest(x, y) {
        Some(found) => println!(
            "Nearest to {}: {} (distance {:.6})",
            query,
            found,
            found.distance_to(&query)
        ),
        None => println!("Nearest to {}: none (empty point set)", query),
    }
    Ok(ExitCode::SUCCESS)
}

fn verify_cmd(
    path: Option<&Path>,
    count: usize,
    query_count: usize,
    seed: u64,
) -> kdpoint::Result<ExitCode> {
    let points = match path {
        Some(path) => load_points(path)?,
        None => random_points(count, seed),
    };
    let queries = random_queries(query_count, seed.wrapping_add(1));

    let start = Instant::now();
    let tree = KdTree::build(points.clone())?;
    let build_time = start.elapsed();
    let naive = NaivePointSet::build(points)?;

    println!(
        "Built tree: {} points, height {}, {:.2}ms",
        tree.len(),
        tree.height(),
        build_time.as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let batch = tree.nearest_batch(&queries);
    let batch_time = start.elapsed();
    println!(
        "Batch: {} queries in {:.2}ms (parallel threshold {})",
        batch.len(),
        batch_time.as_secs_f64() * 1000.0,
        config::parallel_batch_threshold()
    );

    let start = Instant::now();
    let stats = compare_point_sets(&tree, &naive, &queries);
    let compare_time = start.elapsed();
    println!(
        "Verified: {} queries, {} mismatches, {:.2}ms",
        stats.queries,
        stats.mismatches,
        compare_time.as_secs_f64() * 1000.0
    );

    if stats.mismatches > 0 {
        eprintln!("{} queries disagreed with brute force", stats.mismatches);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn autocomplete_cmd(path: &Path, prefix: &str, limit: Option<usize>) -> kdpoint::Result<ExitCode> {
    let search = BinaryRangeSearch::new(load_terms(path)?);
    let matches = search.all_matches(prefix);
    let limit = limit.unwrap_or_else(config::autocomplete_limit);

    println!(
        "Terms: {} ({} stored), prefix '{}': {} matches",
        path.display(),
        search.len(),
        prefix,
        matches.len()
    );
    for term in matches.iter().take(limit) {
        println!("  {}", term);
    }
    Ok(ExitCode::SUCCESS)
}
