use lattice::{Domain, Grid, Point};

/// Walking a span along axis 0 from (0,1) in a 3x3 grid visits the middle
/// row and stops exactly at the sentinel built at (3,1).
#[test]
fn test_span_along_axis_0_visits_one_row() {
    let domain = Domain::new(Point::new(&[0, 0]), Point::new(&[2, 2]));
    let mut grid: Grid<u32> = Grid::new(domain.clone());
    for (i, slot) in grid.iter_mut().enumerate() {
        *slot = i as u32;
    }

    let start = Point::new(&[0, 1]);
    let mut cursor = grid.span(&start, 0);
    let end = grid.span_end(&start, 0);

    let mut visited = Vec::new();
    let mut steps = 0;
    while cursor != end {
        visited.push(cursor.position());
        cursor.next();
        steps += 1;
    }

    assert_eq!(steps, 3);
    assert_eq!(
        visited,
        vec![
            grid.offset_of(&Point::new(&[0, 1])),
            grid.offset_of(&Point::new(&[1, 1])),
            grid.offset_of(&Point::new(&[2, 1])),
        ]
    );
}

/// A span along axis 1 strides by the axis-0 extent.
#[test]
fn test_span_along_axis_1_strides_by_the_axis_0_extent() {
    let domain = Domain::new(Point::new(&[0, 0]), Point::new(&[2, 2]));
    let grid: Grid<u32> = Grid::new(domain);

    let start = Point::new(&[1, 0]);
    let mut cursor = grid.span(&start, 1);
    let end = grid.span_end(&start, 1);

    assert_eq!(cursor.stride(), 3);

    let mut steps = 0;
    while cursor != end {
        cursor.next();
        steps += 1;
    }
    assert_eq!(steps, 3);
    assert_eq!(end.position(), grid.offset_of(&Point::new(&[1, 2])) + 3);
}

/// In three dimensions a span along the last axis collects one column of
/// values, untouched slots staying at their defaults.
#[test]
fn test_three_dimensional_span_collects_one_column() {
    let domain = Domain::new(Point::new(&[0, 0, 0]), Point::new(&[3, 2, 4]));
    let mut grid: Grid<i64> = Grid::new(domain.clone());
    for z in 0..=4 {
        grid.set(&Point::new(&[2, 1, z]), 1000 + z);
    }

    let start = Point::new(&[2, 1, 0]);
    assert_eq!(grid.stride_of(2), 12);

    let mut cursor = grid.span(&start, 2);
    let end = grid.span_end(&start, 2);
    let mut values = Vec::new();
    while cursor != end {
        values.push(*grid.at(&cursor));
        cursor.next();
    }
    assert_eq!(values, vec![1000, 1001, 1002, 1003, 1004]);

    // Every slot off the span is still default.
    let written: usize = grid.iter().filter(|&&v| v != 0).count();
    assert_eq!(written, 5);
}

/// Spans over a domain with negative bounds behave the same: offsets are
/// bound-relative.
#[test]
fn test_span_with_negative_lower_bounds() {
    let domain = Domain::new(Point::new(&[-2, -2]), Point::new(&[2, 2]));
    let mut grid: Grid<u32> = Grid::new(domain);

    let start = Point::new(&[-2, 0]);
    let mut cursor = grid.span(&start, 0);
    let end = grid.span_end(&start, 0);
    let mut marked = 0;
    while cursor != end {
        grid.set_at(&cursor, 1);
        cursor.next();
        marked += 1;
    }

    assert_eq!(marked, 5);
    for x in -2..=2 {
        assert_eq!(grid.get(&Point::new(&[x, 0])), 1);
    }
    assert_eq!(grid.iter().filter(|&&v| v == 1).count(), 5);
}

/// Walking a span backward with prev() retraces the same slots.
#[test]
fn test_span_prev_retraces_the_row() {
    let domain = Domain::new(Point::new(&[0, 0]), Point::new(&[2, 2]));
    let mut grid: Grid<u32> = Grid::new(domain);
    for (i, slot) in grid.iter_mut().enumerate() {
        *slot = i as u32;
    }

    let start = Point::new(&[0, 2]);
    let mut cursor = grid.span(&start, 0);
    cursor.next();
    cursor.next();
    assert_eq!(*grid.at(&cursor), 8);
    cursor.prev();
    assert_eq!(*grid.at(&cursor), 7);
    cursor.prev();
    assert_eq!(*grid.at(&cursor), 6);
    assert_eq!(cursor, grid.span(&start, 0));
}
