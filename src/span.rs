/// Cursor over the points sharing every coordinate with a starting point
/// except along one chosen axis. One step along that axis is a fixed stride
/// in the linearized buffer, so a whole span is walked without ever
/// materializing intermediate points.
///
/// Cursors are plain data: reading and writing goes through
/// [`Grid::at`](crate::Grid::at) and [`Grid::set_at`](crate::Grid::set_at),
/// which check that the grid has not been mutated since the cursor was
/// built.
#[derive(Debug, Clone, Copy, Eq)]
pub struct SpanCursor {
    pos: usize,
    stride: usize,
    axis: usize,
    generation: u64,
}

impl SpanCursor {
    pub(crate) fn new(pos: usize, stride: usize, axis: usize, generation: u64) -> Self {
        SpanCursor {
            pos,
            stride,
            axis,
            generation,
        }
    }

    /// Current linear offset in the grid buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The axis this cursor walks along.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Linear distance covered by one step.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Move one unit forward along the span axis. No bound check: a loop
    /// driven against the matching end sentinel stops before running past
    /// the domain.
    pub fn next(&mut self) {
        self.pos += self.stride;
    }

    /// Move one unit backward along the span axis.
    ///
    /// # Panics
    /// Panics if the move would take the position below zero, which means
    /// the caller stepped back past the start of the buffer.
    pub fn prev(&mut self) {
        assert!(
            self.pos >= self.stride,
            "span cursor stepped before position zero"
        );
        self.pos -= self.stride;
    }
}

/// Cursors compare by linear position alone; `axis` and `stride` are
/// ignored. Two cursors built along different axes can therefore compare
/// equal when they land on the same slot. Span loops are expected to be
/// driven with a begin/end pair built for the same axis.
impl PartialEq for SpanCursor {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}
