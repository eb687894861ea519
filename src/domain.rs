use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Axis-aligned rectangular region of lattice points. Both bounds are
/// inclusive; every axis satisfies lower <= upper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    lower: Point,
    upper: Point,
}

impl Domain {
    /// # Panics
    /// Panics if the bounds disagree on dimension, the dimension is zero,
    /// or any lower coordinate exceeds its upper coordinate.
    pub fn new(lower: Point, upper: Point) -> Self {
        assert_eq!(
            lower.dimension(),
            upper.dimension(),
            "domain bounds must have the same dimension"
        );
        assert!(lower.dimension() > 0, "domain must have at least one axis");
        for k in 0..lower.dimension() {
            assert!(
                lower[k] <= upper[k],
                "lower bound {} exceeds upper bound {} on axis {}",
                lower[k],
                upper[k],
                k
            );
        }
        Domain { lower, upper }
    }

    pub fn lower_bound(&self) -> &Point {
        &self.lower
    }

    pub fn upper_bound(&self) -> &Point {
        &self.upper
    }

    pub fn dimension(&self) -> usize {
        self.lower.dimension()
    }

    /// Per-axis length of the domain: upper - lower + 1 on every axis.
    pub fn extent(&self) -> Point {
        &(&self.upper - &self.lower) + &Point::diagonal(self.dimension(), 1)
    }

    /// Number of points in the domain.
    pub fn volume(&self) -> usize {
        (0..self.dimension())
            .map(|k| (self.upper[k] - self.lower[k] + 1) as usize)
            .product()
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.dimension() == self.dimension()
            && (0..self.dimension()).all(|k| self.lower[k] <= p[k] && p[k] <= self.upper[k])
    }

    /// The domain shifted by `shift` on both bounds.
    pub fn translate(&self, shift: &Point) -> Domain {
        Domain::new(&self.lower + shift, &self.upper + shift)
    }

    /// All points of the domain in linearization order: axis 0 varies
    /// fastest, the last axis slowest.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        // multi_cartesian_product varies its last factor fastest, so feed
        // the axes reversed and flip each tuple back.
        (0..self.dimension())
            .rev()
            .map(|k| self.lower[k]..=self.upper[k])
            .multi_cartesian_product()
            .map(|mut coords| {
                coords.reverse();
                Point::from(coords)
            })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.lower, self.upper)
    }
}
