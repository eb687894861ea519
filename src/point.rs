use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A point of the integer lattice. Doubles as a shift vector when passed to
/// domain or grid translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    coords: SmallVec<[i64; 4]>,
}

impl Point {
    pub fn new(coords: &[i64]) -> Self {
        Point {
            coords: SmallVec::from_slice(coords),
        }
    }

    /// Point with every coordinate zero.
    pub fn zero(dimension: usize) -> Self {
        Point {
            coords: SmallVec::from_elem(0, dimension),
        }
    }

    /// Point with every coordinate equal to `value`.
    pub fn diagonal(dimension: usize, value: i64) -> Self {
        Point {
            coords: SmallVec::from_elem(value, dimension),
        }
    }

    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[i64] {
        &self.coords
    }
}

impl From<Vec<i64>> for Point {
    fn from(coords: Vec<i64>) -> Self {
        Point {
            coords: SmallVec::from_vec(coords),
        }
    }
}

impl Index<usize> for Point {
    type Output = i64;

    fn index(&self, axis: usize) -> &i64 {
        &self.coords[axis]
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, axis: usize) -> &mut i64 {
        &mut self.coords[axis]
    }
}

impl Add for &Point {
    type Output = Point;

    /// # Panics
    /// Panics if the operands disagree on dimension.
    fn add(self, other: &Point) -> Point {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "cannot add points of different dimension"
        );
        Point {
            coords: self
                .coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &Point {
    type Output = Point;

    /// # Panics
    /// Panics if the operands disagree on dimension.
    fn sub(self, other: &Point) -> Point {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "cannot subtract points of different dimension"
        );
        Point {
            coords: self
                .coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, c) in self.coords.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_indexing() {
        let p = Point::new(&[3, -1, 7]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p[0], 3);
        assert_eq!(p[1], -1);
        assert_eq!(p[2], 7);
        assert_eq!(p.coords(), &[3, -1, 7]);
    }

    #[test]
    fn test_zero_and_diagonal() {
        assert_eq!(Point::zero(2), Point::new(&[0, 0]));
        assert_eq!(Point::diagonal(3, 1), Point::new(&[1, 1, 1]));
        assert_eq!(Point::diagonal(2, -4), Point::new(&[-4, -4]));
    }

    #[test]
    fn test_add_and_sub() {
        let a = Point::new(&[1, 2]);
        let b = Point::new(&[10, -3]);
        assert_eq!(&a + &b, Point::new(&[11, -1]));
        assert_eq!(&b - &a, Point::new(&[9, -5]));
    }

    #[test]
    #[should_panic(expected = "different dimension")]
    fn test_add_dimension_mismatch_panics() {
        let _ = &Point::new(&[1]) + &Point::new(&[1, 2]);
    }

    #[test]
    fn test_index_mut() {
        let mut p = Point::new(&[0, 0]);
        p[1] = 5;
        assert_eq!(p, Point::new(&[0, 5]));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(&[1, -2, 3])), "(1, -2, 3)");
        assert_eq!(format!("{}", Point::new(&[4])), "(4)");
    }
}
