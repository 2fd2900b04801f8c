//! Remaining-cost estimates for A*.
//!
//! A heuristic is admissible when it never overestimates the true cost of
//! the cheapest path to the goal. Search does not check this: an
//! inadmissible heuristic still terminates and still returns a valid path,
//! but that path may be longer than the shortest one.

use std::hash::Hash;

use wayfind_core::{Coord, Coords, Point};

/// Estimate of the cost remaining from `from` to `goal`.
///
/// Must return a finite, non-negative value. Closures of the form
/// `Fn(&N, &N) -> f64` implement this trait.
pub trait Heuristic<N> {
    fn estimate(&self, from: &N, goal: &N) -> f64;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    #[inline]
    fn estimate(&self, from: &N, goal: &N) -> f64 {
        self(from, goal)
    }
}

/// The zero estimate. A* with this heuristic expands nodes exactly like
/// Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<N> Heuristic<N> for Zero {
    #[inline]
    fn estimate(&self, _: &N, _: &N) -> f64 {
        0.0
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    Metric::Manhattan.distance(a.into(), b.into())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    Metric::Euclidean.distance(a.into(), b.into())
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    Metric::Chebyshev.distance(a.into(), b.into())
}

/// Octile distance: exact cost on an empty 8-connected grid where
/// diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    Metric::Octile.distance(a.into(), b.into())
}

/// Planar distance functions.
///
/// Which one is admissible depends on how the graph prices movement:
/// Manhattan for unit-cost 4-connected grids, Octile for 8-connected grids
/// with √2 diagonals, Chebyshev for unit-cost 8-connected grids, Euclidean
/// whenever an edge never costs less than the straight-line distance it
/// covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Metric {
    pub fn distance(self, a: Coord, b: Coord) -> f64 {
        let d = a - b;
        let (dx, dy) = (d.x.abs(), d.y.abs());
        match self {
            Metric::Manhattan => dx + dy,
            Metric::Euclidean => dx.hypot(dy),
            Metric::Chebyshev => dx.max(dy),
            Metric::Octile => dx.max(dy) + (std::f64::consts::SQRT_2 - 1.0) * dx.min(dy),
        }
    }
}

impl Heuristic<Point> for Metric {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        self.distance((*from).into(), (*goal).into())
    }
}

/// Heuristic for label-keyed nodes placed in the plane by a [`Coords`]
/// table.
///
/// The estimate is `scale * metric(from, goal)`. Nodes without a position
/// estimate 0, which keeps the heuristic admissible.
#[derive(Debug, Clone, Copy)]
pub struct CoordHeuristic<'a, N> {
    coords: &'a Coords<N>,
    metric: Metric,
    scale: f64,
}

impl<'a, N: Eq + Hash> CoordHeuristic<'a, N> {
    pub fn new(coords: &'a Coords<N>, metric: Metric) -> Self {
        Self {
            coords,
            metric,
            scale: 1.0,
        }
    }

    /// Multiply every estimate by `scale`, typically the lowest cost per
    /// unit of distance anywhere in the graph.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl<N: Eq + Hash> Heuristic<N> for CoordHeuristic<'_, N> {
    fn estimate(&self, from: &N, goal: &N) -> f64 {
        match (self.coords.get(from), self.coords.get(goal)) {
            (Some(a), Some(b)) => self.scale * self.metric.distance(a, b),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert!((octile(a, b) - (4.0 + 3.0 * (std::f64::consts::SQRT_2 - 1.0))).abs() < 1e-12);
        assert_eq!(manhattan(b, a), manhattan(a, b));
    }

    #[test]
    fn metric_is_a_point_heuristic() {
        let h = Metric::Manhattan;
        assert_eq!(h.estimate(&Point::new(0, 0), &Point::new(-2, 3)), 5.0);
        assert_eq!(Zero.estimate(&Point::new(0, 0), &Point::new(-2, 3)), 0.0);
    }

    #[test]
    fn closures_are_heuristics() {
        let h = |a: &i32, b: &i32| f64::from((a - b).abs());
        assert_eq!(h.estimate(&3, &10), 7.0);
    }

    #[test]
    fn coord_heuristic_scales_and_defaults_to_zero() {
        let coords: Coords<&str> = [("a", Coord::new(0.0, 0.0)), ("b", Coord::new(3.0, 4.0))]
            .into_iter()
            .collect();
        let h = CoordHeuristic::new(&coords, Metric::Euclidean);
        assert_eq!(h.estimate(&"a", &"b"), 5.0);
        assert_eq!(h.with_scale(0.5).estimate(&"a", &"b"), 2.5);
        assert_eq!(h.estimate(&"a", &"nowhere"), 0.0);
    }
}
