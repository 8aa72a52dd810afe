use hilbert_sonify::curve::{d2xy, xy2d, CurvePoint, HilbertCurve};
use hilbert_sonify::unroll::{cell_distance, distance_table};

#[test]
fn distance_and_point_are_inverse_for_all_small_orders() {
    for k in 1..=7 {
        let curve = HilbertCurve::new(1 << k).unwrap();
        for (d, p) in curve.iter().enumerate() {
            assert_eq!(curve.distance(p).unwrap(), d as u64);
            assert_eq!(curve.point(d as u64).unwrap(), p);
        }
    }
}

#[test]
fn every_step_moves_one_unit_along_one_axis() {
    for k in 1..=8 {
        let n = 1u64 << k;
        let mut prev = d2xy(n, 0);
        for d in 1..n * n {
            let next = d2xy(n, d);
            let dx = prev.0.abs_diff(next.0);
            let dy = prev.1.abs_diff(next.1);
            assert!(
                (dx, dy) == (1, 0) || (dx, dy) == (0, 1),
                "n={n}: step {} -> {d} moves by ({dx}, {dy})",
                d - 1
            );
            prev = next;
        }
    }
}

#[test]
fn distances_cover_the_full_range_once() {
    let n = 128u64;
    let mut hits = vec![0u8; (n * n) as usize];
    for x in 0..n {
        for y in 0..n {
            hits[xy2d(n, x, y) as usize] += 1;
        }
    }
    assert!(hits.iter().all(|&h| h == 1));
}

#[test]
fn grid_cells_use_flipped_rows_and_column_as_x() {
    let n = 8;
    let table = distance_table(n).unwrap();
    for row in 0..n {
        for col in 0..n {
            let expected = xy2d(n as u64, col as u64, (n - 1 - row) as u64);
            assert_eq!(table[row * n + col], expected);
            assert_eq!(cell_distance(n, row, col), expected);
        }
    }
    assert_eq!(
        HilbertCurve::new(n).unwrap().point(table[0]).unwrap(),
        CurvePoint::new(0, (n - 1) as u64)
    );
}
