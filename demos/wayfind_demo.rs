//! Command-line walkthrough of the wayfind searches.
//!
//! Run: cargo run --bin wayfind-demo -- grid --width 40 --height 16

use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use wayfind_demos::{GridMap, compare_on_grid, lettered_graph, line_graph};
use wayfind_paths::{PathSearch, SearchConfig};

#[derive(Parser)]
#[command(name = "wayfind-demo", version, about = "Shortest-path search demos")]
struct Cli {
    /// Log filter, e.g. `info` or `wayfind_paths=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Stop each search after this many frontier extractions.
    #[arg(long, global = true)]
    max_steps: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dijkstra from A on the nine-node lettered graph.
    Scenario {
        #[arg(long, default_value_t = 'A')]
        from: char,
        #[arg(long, default_value_t = 'I')]
        to: char,
    },
    /// Distance to the nearest of {A, E} on a five-node line.
    Nearest,
    /// Dijkstra vs A* corner to corner on a random weighted grid.
    Grid {
        #[arg(long, default_value_t = 40)]
        width: i32,
        #[arg(long, default_value_t = 16)]
        height: i32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Probability that a cell is a wall.
        #[arg(long, default_value_t = 0.25)]
        walls: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_str(&cli.log_level)?.start()?;

    let config = match cli.max_steps {
        Some(steps) => SearchConfig::new().with_max_steps(steps),
        None => SearchConfig::new(),
    };

    match cli.command {
        Command::Scenario { from, to } => {
            let graph = lettered_graph()?;
            let route = PathSearch::new(&graph)
                .with_config(config)
                .shortest_path(&from, &to)?;
            if route.is_reachable() {
                let hops: Vec<String> = route.path.iter().map(char::to_string).collect();
                println!("{from} -> {to}: {} (length {})", hops.join(" -> "), route.length);
            } else if route.truncated {
                println!("{from} -> {to}: step budget exhausted");
            } else {
                println!("{from} -> {to}: unreachable");
            }

            let all = PathSearch::new(&graph)
                .with_config(config)
                .shortest_paths_from(&from);
            if all.truncated {
                println!("  (partial table, step budget exhausted)");
            }
            let mut rows: Vec<_> = all.distances.iter().collect();
            rows.sort_by(|a, b| a.0.cmp(b.0));
            for (node, dist) in rows {
                println!("  dist({from}, {node}) = {dist}");
            }
        }
        Command::Nearest => {
            let graph = line_graph()?;
            let near = PathSearch::new(&graph)
                .with_config(config)
                .nearest_of(['A', 'E']);
            if near.truncated {
                println!("(partial table, step budget exhausted)");
            }
            for node in ['A', 'B', 'C', 'D', 'E'] {
                match near.next_hop(&node) {
                    Some(hop) => println!("{node}: {} via {hop}", near.distance(&node)),
                    None => println!("{node}: {}", near.distance(&node)),
                }
            }
        }
        Command::Grid {
            width,
            height,
            seed,
            walls,
        } => {
            if width <= 0 || height <= 0 {
                return Err("grid dimensions must be positive".into());
            }
            log::info!("generating {width}x{height} grid with seed {seed}");
            let map = GridMap::random(width, height, walls, seed);
            let cmp = compare_on_grid(&map, config)?;
            print!("{}", map.render(&cmp.astar.route.path));
            for (name, m) in [("dijkstra", &cmp.dijkstra), ("a*", &cmp.astar)] {
                if m.route.truncated {
                    println!(
                        "{name:>8}: step budget exhausted after {} pops",
                        m.stats.pops
                    );
                    continue;
                }
                println!(
                    "{name:>8}: length {} pops {} stale {} relaxations {}",
                    m.route.length, m.stats.pops, m.stats.stale, m.stats.relaxations
                );
            }
        }
    }
    Ok(())
}
