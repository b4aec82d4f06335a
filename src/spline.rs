//! spline.rs
//! Trait for common abstractions over curve segments evaluated on t in [0,1]
use num_traits::{Float, NumCast};

use super::point2::Point2;

pub trait Spline<T: Float> {
    fn eval(&self, t: T) -> Point2<T>;

    /// Evaluate the curve at `t = j / n` for `j = 1..=n`.
    /// The start of the segment (t = 0) is not part of the samples.
    fn samples(&self, n: usize) -> Samples<'_, Self, T>
    where
        Self: Sized,
    {
        Samples {
            spline: self,
            n,
            j: 0,
            _scalar: core::marker::PhantomData,
        }
    }
}

/// Iterator returned by [`Spline::samples`].
pub struct Samples<'a, S, T> {
    spline: &'a S,
    n: usize,
    j: usize,
    _scalar: core::marker::PhantomData<T>,
}

impl<S, T> Iterator for Samples<'_, S, T>
where
    S: Spline<T>,
    T: Float,
{
    type Item = Point2<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.n {
            return None;
        }
        self.j += 1;
        let t = <T as NumCast>::from(self.j)? / <T as NumCast>::from(self.n)?;
        Some(self.spline.eval(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.j;
        (remaining, Some(remaining))
    }
}

impl<S, T> ExactSizeIterator for Samples<'_, S, T>
where
    S: Spline<T>,
    T: Float,
{
}
