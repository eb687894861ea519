use std::fmt;
use std::slice;

use crate::domain::Domain;
use crate::point::Point;
use crate::span::SpanCursor;

/// Dense value storage over a rectangular domain. One slot per domain
/// point, laid out by a row-major linearization with axis 0 varying
/// fastest.
///
/// The buffer is private and always sized to the domain volume; there is no
/// resize or insert surface that could break that invariant. Mutations that
/// change what a linear offset means (domain translation) bump a generation
/// counter checked by span-cursor access.
#[derive(Debug, Clone)]
pub struct Grid<V> {
    domain: Domain,
    data: Vec<V>,
    generation: u64,
}

impl<V: Clone + Default> Grid<V> {
    /// Grid over `domain` with every slot default-initialized.
    pub fn new(domain: Domain) -> Self {
        let volume = domain.volume();
        Grid {
            domain,
            data: vec![V::default(); volume],
            generation: 0,
        }
    }
}

impl<V> Grid<V> {
    /// Linear offset of a point under the current bounds. Offsets of the
    /// domain's points are exactly `0..volume`, each hit once.
    ///
    /// # Panics
    /// Panics if the point lies outside the domain.
    pub fn offset_of(&self, p: &Point) -> usize {
        assert!(
            self.domain.contains(p),
            "point {} outside domain {}",
            p,
            self.domain
        );
        self.raw_offset(p)
    }

    // Bound-relative offset. Also accepts the span-end sentinel, one past
    // the upper bound on a single axis; that offset is only ever compared,
    // never dereferenced.
    fn raw_offset(&self, p: &Point) -> usize {
        let lower = self.domain.lower_bound();
        let upper = self.domain.upper_bound();
        let mut offset: i64 = 0;
        let mut weight: i64 = 1;
        for k in 0..self.domain.dimension() {
            offset += (p[k] - lower[k]) * weight;
            weight *= upper[k] - lower[k] + 1;
        }
        debug_assert!(offset >= 0, "offset of {} underflowed", p);
        offset as usize
    }

    /// Linear distance between points one unit apart along `axis`: the
    /// product of the extents of all axes below it.
    ///
    /// # Panics
    /// Panics if `axis` is not an axis of the domain.
    pub fn stride_of(&self, axis: usize) -> usize {
        assert!(
            axis < self.domain.dimension(),
            "axis {} out of range for a {}-dimensional domain",
            axis,
            self.domain.dimension()
        );
        let lower = self.domain.lower_bound();
        let upper = self.domain.upper_bound();
        (0..axis)
            .map(|k| (upper[k] - lower[k] + 1) as usize)
            .product()
    }

    /// # Panics
    /// Panics if the point lies outside the domain.
    pub fn value_at(&self, p: &Point) -> &V {
        &self.data[self.offset_of(p)]
    }

    /// Copy of the value at `p`.
    ///
    /// # Panics
    /// Panics if the point lies outside the domain.
    pub fn get(&self, p: &Point) -> V
    where
        V: Clone,
    {
        self.data[self.offset_of(p)].clone()
    }

    /// # Panics
    /// Panics if the point lies outside the domain.
    pub fn set(&mut self, p: &Point, value: V) {
        let offset = self.offset_of(p);
        self.data[offset] = value;
    }

    /// # Panics
    /// Panics if the offset is not below the domain volume.
    pub fn at_offset(&self, offset: usize) -> &V {
        &self.data[offset]
    }

    /// # Panics
    /// Panics if the offset is not below the domain volume.
    pub fn at_offset_mut(&mut self, offset: usize) -> &mut V {
        &mut self.data[offset]
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Per-axis length of the domain: upper - lower + 1 on every axis.
    pub fn extent(&self) -> Point {
        self.domain.extent()
    }

    /// Number of slots, always equal to the domain volume.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Structural sanity check: the buffer length matches the domain
    /// volume.
    pub fn is_valid(&self) -> bool {
        self.data.len() == self.domain.volume()
    }

    /// Mutation counter span cursors are validated against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Shift the domain by `shift` on both bounds. Pure relabeling: no
    /// value moves, the slot at offset 0 simply becomes the new lower
    /// bound. Outstanding span cursors are invalidated.
    pub fn translate_domain(&mut self, shift: &Point) {
        self.domain = self.domain.translate(shift);
        self.generation += 1;
    }

    /// Iterate every slot in linearization order. The iterator is
    /// double-ended, so `.rev()` gives the exact reverse order.
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, V> {
        self.data.iter_mut()
    }

    /// Iterate from a point's slot to the end of the buffer.
    ///
    /// # Panics
    /// Panics if the point lies outside the domain.
    pub fn iter_from(&self, p: &Point) -> slice::Iter<'_, V> {
        self.data[self.offset_of(p)..].iter()
    }

    /// # Panics
    /// Panics if the point lies outside the domain.
    pub fn iter_from_mut(&mut self, p: &Point) -> slice::IterMut<'_, V> {
        let offset = self.offset_of(p);
        self.data[offset..].iter_mut()
    }

    /// Span cursor positioned at `start`, walking along `axis`.
    ///
    /// # Panics
    /// Panics if `start` lies outside the domain or `axis` is out of range.
    pub fn span(&self, start: &Point, axis: usize) -> SpanCursor {
        assert!(
            self.domain.contains(start),
            "span start {} outside domain {}",
            start,
            self.domain
        );
        SpanCursor::new(
            self.raw_offset(start),
            self.stride_of(axis),
            axis,
            self.generation,
        )
    }

    /// End sentinel for the span through `start` along `axis`: `start` with
    /// that coordinate set one past the upper bound. Equal to a begin
    /// cursor advanced once per point of the span; never dereference it.
    ///
    /// # Panics
    /// Panics if `start` lies outside the domain or `axis` is out of range.
    pub fn span_end(&self, start: &Point, axis: usize) -> SpanCursor {
        assert!(
            self.domain.contains(start),
            "span start {} outside domain {}",
            start,
            self.domain
        );
        let stride = self.stride_of(axis);
        let mut sentinel = start.clone();
        sentinel[axis] = self.domain.upper_bound()[axis] + 1;
        SpanCursor::new(self.raw_offset(&sentinel), stride, axis, self.generation)
    }

    /// Value under a span cursor.
    ///
    /// # Panics
    /// Panics if the cursor was built before the last domain mutation, or
    /// if its position is out of range (a dereferenced end sentinel).
    pub fn at(&self, cursor: &SpanCursor) -> &V {
        assert_eq!(
            cursor.generation(),
            self.generation,
            "span cursor outlived a domain mutation"
        );
        &self.data[cursor.position()]
    }

    /// Write through a span cursor.
    ///
    /// # Panics
    /// Same conditions as [`Grid::at`].
    pub fn set_at(&mut self, cursor: &SpanCursor, value: V) {
        assert_eq!(
            cursor.generation(),
            self.generation,
            "span cursor outlived a domain mutation"
        );
        self.data[cursor.position()] = value;
    }
}

impl<V> fmt::Display for Grid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid domain={} volume={} valid={}",
            self.domain,
            self.data.len(),
            self.is_valid()
        )
    }
}
