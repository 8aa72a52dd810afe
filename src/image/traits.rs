use crate::curve::validate_dimension;
use crate::error::{Result, SonifyError};

/// Read-only, row-addressable view over a 2-D sample grid.
///
/// Row `0` is the top of the image, matching the decoder's storage order.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// Samples of row `y`. May be shorter than `width()` when the backing
    /// buffer is truncated.
    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }

    /// Validate the grid for curve unrolling and return its side length.
    ///
    /// Fails unless width equals height, the side is a supported power of
    /// two and every row holds at least `width()` samples.
    fn square_dimension(&self) -> Result<usize> {
        let (width, height) = (self.width(), self.height());
        if width != height {
            return Err(SonifyError::NotSquare { width, height });
        }
        validate_dimension(width)?;
        for y in 0..height {
            let len = self.row(y).len();
            if len < width {
                return Err(SonifyError::ShortRow {
                    row: y,
                    len,
                    expected: width,
                });
            }
        }
        Ok(width)
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
