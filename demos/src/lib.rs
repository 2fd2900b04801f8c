//! Shared scenarios for the `wayfind-demo` binary.
//!
//! Demonstrates: point-to-point Dijkstra, single-source tables, A* on a
//! randomly generated weighted grid, and nearest-target tables.

use std::collections::HashSet;

use rand::{RngExt, SeedableRng};
use wayfind_core::{Graph, GraphError, Point, Range, grid_graph};
use wayfind_paths::{Goal, Metric, PathSearch, Route, SearchConfig, SearchStats};

/// Worked example: nine lettered nodes, fourteen one-way links.
pub fn lettered_graph() -> Result<Graph<char>, GraphError> {
    Graph::from_links([
        ('A', 'B', 2.0),
        ('A', 'D', 3.0),
        ('B', 'C', 1.0),
        ('B', 'E', 5.0),
        ('C', 'D', 2.0),
        ('C', 'E', 1.0),
        ('D', 'E', 3.0),
        ('E', 'B', 2.0),
        ('E', 'F', 3.0),
        ('F', 'G', 5.0),
        ('F', 'I', 8.0),
        ('G', 'H', 2.0),
        ('G', 'I', 5.0),
        ('H', 'I', 3.0),
    ])
}

/// `A -> B -> C -> D -> E`, every link weight 1.
pub fn line_graph() -> Result<Graph<char>, GraphError> {
    Graph::from_links([
        ('A', 'B', 1.0),
        ('B', 'C', 1.0),
        ('C', 'D', 1.0),
        ('D', 'E', 1.0),
    ])
}

// ---------------------------------------------------------------------------
// Random grid
// ---------------------------------------------------------------------------

/// A rectangular map with impassable walls and per-cell entry costs.
pub struct GridMap {
    pub range: Range,
    pub walls: HashSet<Point>,
    /// Cost of entering each cell, row-major; at least 1.
    costs: Vec<f64>,
}

impl GridMap {
    /// Generate a map where each cell is a wall with probability
    /// `wall_ratio` and otherwise costs 1 to 4 to enter. The corners are
    /// always open. Negative dimensions extend the map left of or above the
    /// origin.
    pub fn random(width: i32, height: i32, wall_ratio: f64, seed: u64) -> Self {
        let range = Range::new(0, 0, width, height);
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut walls = HashSet::new();
        let mut costs = Vec::with_capacity(range.len());
        for p in range.iter() {
            costs.push(f64::from(rng.random_range(1..=4u32)));
            if rng.random_range(0.0..1.0) < wall_ratio {
                walls.insert(p);
            }
        }
        let (min, max) = (range.min, range.max.shift(-1, -1));
        for corner in [min, max] {
            walls.remove(&corner);
        }
        Self {
            range,
            walls,
            costs,
        }
    }

    fn cost(&self, p: Point) -> f64 {
        let d = p - self.range.min;
        self.costs[(d.y * self.range.width() + d.x) as usize]
    }

    /// The 4-connected graph of open cells. Entering a cell costs its
    /// terrain value, so Manhattan distance stays admissible.
    pub fn graph(&self) -> Result<Graph<Point>, GraphError> {
        grid_graph(self.range, |from, to| {
            if self.walls.contains(&from) || self.walls.contains(&to) {
                None
            } else {
                Some(self.cost(to))
            }
        })
    }

    /// Render the map with `path` overlaid.
    pub fn render(&self, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.range.len() + self.range.height() as usize);
        for y in self.range.min.y..self.range.max.y {
            for x in self.range.min.x..self.range.max.x {
                let p = Point::new(x, y);
                let c = if self.walls.contains(&p) {
                    '#'
                } else if on_path.contains(&p) {
                    '*'
                } else {
                    char::from(b'0' + self.cost(p) as u8)
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

/// The outcome of one search plus the work it took.
pub struct Measured {
    pub route: Route<Point>,
    pub stats: SearchStats,
}

/// Dijkstra and A* run on the same query.
pub struct Comparison {
    pub dijkstra: Measured,
    pub astar: Measured,
}

/// Search corner to corner on `map` with both algorithms.
pub fn compare_on_grid(
    map: &GridMap,
    config: SearchConfig,
) -> Result<Comparison, Box<dyn std::error::Error>> {
    let graph = map.graph()?;
    let from = map.range.min;
    let to = map.range.max.shift(-1, -1);
    let search = PathSearch::new(&graph).with_config(config);

    let measure = |astar: bool| -> Result<Measured, Box<dyn std::error::Error>> {
        let result = search.run([from], &Goal::Sink(to), |n, d| {
            if astar {
                d + Metric::Manhattan.distance((*n).into(), to.into())
            } else {
                d
            }
        });
        Ok(Measured {
            route: result.route(&from, &to)?,
            stats: result.stats,
        })
    };

    let dijkstra = measure(false)?;
    let astar = measure(true)?;
    log::debug!(
        "grid {}x{}: dijkstra pops {}, astar pops {}",
        map.range.width(),
        map.range.height(),
        dijkstra.stats.pops,
        astar.stats.pops
    );
    Ok(Comparison { dijkstra, astar })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_paths::{nearest_of, path_length, shortest_path};

    #[test]
    fn lettered_graph_route() {
        let g = lettered_graph().unwrap();
        let route = shortest_path(&g, &'A', &'I').unwrap();
        assert_eq!(route.path, vec!['A', 'B', 'C', 'E', 'F', 'I']);
        assert_eq!(route.length, 15.0);
    }

    #[test]
    fn line_graph_nearest() {
        let near = nearest_of(&line_graph().unwrap(), ['A', 'E']);
        assert_eq!(near.distance(&'C'), 2.0);
    }

    #[test]
    fn random_grid_is_reproducible() {
        let a = GridMap::random(12, 8, 0.25, 7);
        let b = GridMap::random(12, 8, 0.25, 7);
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.render(&[]), b.render(&[]));
        assert!(!a.walls.contains(&Point::new(0, 0)));
        assert!(!a.walls.contains(&Point::new(11, 7)));
    }

    #[test]
    fn astar_and_dijkstra_agree_on_grids() {
        for seed in 0..20 {
            let map = GridMap::random(16, 10, 0.2, seed);
            let cmp = compare_on_grid(&map, SearchConfig::default()).unwrap();
            assert_eq!(cmp.dijkstra.route.length, cmp.astar.route.length, "seed {seed}");
            if cmp.astar.route.is_reachable() {
                let g = map.graph().unwrap();
                assert_eq!(path_length(&g, &cmp.astar.route.path), Some(cmp.astar.route.length));
            }
        }
    }

    #[test]
    fn negative_dimensions_map_is_usable() {
        let map = GridMap::random(-3, 2, 0.0, 5);
        assert_eq!(map.range.min, Point::new(-3, 0));
        let cmp = compare_on_grid(&map, SearchConfig::default()).unwrap();
        assert_eq!(cmp.astar.route.path.first(), Some(&Point::new(-3, 0)));
        assert_eq!(cmp.astar.route.path.last(), Some(&Point::new(-1, 1)));
        assert_eq!(cmp.dijkstra.route.length, cmp.astar.route.length);
        assert_eq!(map.render(&[]).lines().count(), 2);
    }

    #[test]
    fn budget_stop_is_visible_in_comparison() {
        let map = GridMap::random(16, 10, 0.0, 3);
        let cmp = compare_on_grid(&map, SearchConfig::new().with_max_steps(3)).unwrap();
        assert!(cmp.dijkstra.route.truncated);
        assert!(cmp.astar.route.truncated);
        assert_eq!(cmp.dijkstra.stats.pops, 3);
    }

    #[test]
    fn render_marks_walls_and_path() {
        let mut map = GridMap::random(3, 1, 0.0, 1);
        map.walls.insert(Point::new(1, 0));
        let s = map.render(&[Point::new(0, 0)]);
        assert_eq!(s.len(), 4);
        assert!(s.starts_with("*#"));
    }
}
