//! Hilbert curve mapping between 2-D grid coordinates and 1-D distances.
//!
//! Convention
//! - `(0, 0)` is the bottom-left cell, `x` grows rightwards and `y` upwards.
//! - The curve of dimension `n` starts at `(0, 0)` and ends at `(n-1, 0)`.
//!
//! Algorithm
//! - `xy2d` walks the scale `s` from `n/2` down to `1`, reading one quadrant
//!   bit per axis and accumulating `s² · ((3·rx) ^ ry)`.
//! - `d2xy` runs the same rotation in the opposite bit order, rebuilding the
//!   coordinate from the base-4 digits of `d`.
//! - Both delegate the quadrant rotation/reflection to [`rotate`], a pure
//!   function of its inputs.
//!
//! Complexity
//! - O(log n) per conversion, no allocation.
use crate::error::{Result, SonifyError};
use serde::Serialize;

/// Largest supported grid dimension; keeps `n²` addressable on 64-bit targets.
pub const MAX_DIMENSION: usize = 1 << 16;

/// A cell of the curve's coordinate space (bottom-left origin).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CurvePoint {
    pub x: u64,
    pub y: u64,
}

impl CurvePoint {
    #[inline]
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: CurvePoint) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Check that `n` is a power of two within `[2, MAX_DIMENSION]`.
pub fn validate_dimension(n: usize) -> Result<()> {
    if n >= 2 && n <= MAX_DIMENSION && n.is_power_of_two() {
        Ok(())
    } else {
        Err(SonifyError::UnsupportedDimension(n))
    }
}

/// Rotate/reflect a quadrant of side `s`.
///
/// The coordinates are reduced modulo `s` first: only the bits below `s`
/// matter to later scales, and the reflection `s - 1 - x` stays in range.
/// `s` is a power of two, as produced by the scale loops of `xy2d`/`d2xy`.
#[inline]
pub(crate) fn rotate(s: u64, point: CurvePoint, rx: u64, ry: u64) -> CurvePoint {
    debug_assert!(s.is_power_of_two(), "quadrant side {s} is not a power of two");
    let mask = s - 1;
    let (mut x, mut y) = (point.x & mask, point.y & mask);
    if ry == 0 {
        if rx == 1 {
            x = mask - x;
            y = mask - y;
        }
        std::mem::swap(&mut x, &mut y);
    }
    CurvePoint { x, y }
}

/// Convert `(x, y)` to its distance along the curve of dimension `n`.
///
/// `n` must be a power of two and both coordinates must be below `n`; use
/// [`HilbertCurve::distance`] for a checked variant.
pub fn xy2d(n: u64, x: u64, y: u64) -> u64 {
    let mut d = 0u64;
    let mut p = CurvePoint::new(x, y);
    let mut s = n / 2;

    while s > 0 {
        let rx = u64::from(p.x & s != 0);
        let ry = u64::from(p.y & s != 0);
        d += s * s * ((3 * rx) ^ ry);
        p = rotate(s, p, rx, ry);
        s /= 2;
    }

    d
}

/// Convert a distance along the curve of dimension `n` back to `(x, y)`.
pub fn d2xy(n: u64, d: u64) -> (u64, u64) {
    let mut p = CurvePoint::default();
    let mut s = 1u64;
    let mut t = d;

    while s < n {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        p = rotate(s, p, rx, ry);
        p.x += s * rx;
        p.y += s * ry;
        t /= 4;
        s *= 2;
    }

    (p.x, p.y)
}

/// Hilbert curve over a validated `n × n` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HilbertCurve {
    dimension: usize,
}

impl HilbertCurve {
    pub fn new(dimension: usize) -> Result<Self> {
        validate_dimension(dimension)?;
        Ok(Self { dimension })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells visited by the curve (`n²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.dimension * self.dimension
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn distance(&self, point: CurvePoint) -> Result<u64> {
        let n = self.dimension as u64;
        if point.x >= n || point.y >= n {
            return Err(SonifyError::CoordinateOutOfRange {
                x: point.x,
                y: point.y,
                dimension: self.dimension,
            });
        }
        Ok(xy2d(n, point.x, point.y))
    }

    pub fn point(&self, distance: u64) -> Result<CurvePoint> {
        if distance >= self.len() as u64 {
            return Err(SonifyError::DistanceOutOfRange {
                distance,
                len: self.len(),
            });
        }
        let (x, y) = d2xy(self.dimension as u64, distance);
        Ok(CurvePoint { x, y })
    }

    /// Cells in traversal order, from distance `0` to `n² - 1`.
    pub fn iter(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        let n = self.dimension as u64;
        (0..self.len() as u64).map(move |d| {
            let (x, y) = d2xy(n, d);
            CurvePoint { x, y }
        })
    }
}
