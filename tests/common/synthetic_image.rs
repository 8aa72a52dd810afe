use hilbert_sonify::image::GrayImageU8;

/// Square grid of zeros with one cell set to `value`.
pub fn single_cell(n: usize, row: usize, col: usize, value: u8) -> GrayImageU8 {
    assert!(row < n && col < n, "cell must lie inside the grid");
    let mut img = GrayImageU8::from_fn(n, n, |_, _| 0);
    img.set(row, col, value);
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(n: usize, cell: usize) -> GrayImageU8 {
    assert!(n > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");
    GrayImageU8::from_fn(n, n, |row, col| {
        if (row / cell + col / cell) & 1 == 0 {
            32
        } else {
            220
        }
    })
}

/// Top half black, bottom half white.
pub fn horizon(n: usize) -> GrayImageU8 {
    GrayImageU8::from_fn(n, n, |row, _| if row < n / 2 { 0 } else { 255 })
}
