//! Two-dimensional buffers and read-only views into them.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::iter::repeat;
use core::ops::{Deref, DerefMut};

use inner::Inner;

//
// Traits
//

/// A trait for types that can provide a view of their data as a `Slice2`
pub trait AsSlice2<T> {
    /// Returns a borrowed `Slice2` view of `Self`.
    fn as_slice2(&self) -> Slice2<'_, T>;
}

//
// Types
//

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use phongball_core::util::buf::*;
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new_default(4, 4);
/// // Indexing with a pair [x, y] yields element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// // Thus you can also do this, row first, column second:
/// assert_eq!(buf[1usize][2], 123)
/// ```
#[derive(Clone, PartialEq)]
#[repr(transparent)]
pub struct Buf2<T>(Inner<T, Vec<T>>);

/// An immutable view to a [`Buf2`]. A two-dimensional analog to `&[T]`.
///
/// Handed out to readers of a buffer that must not modify it, such as
/// the display step of the main loop.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Slice2<'a, T>(Inner<T, &'a [T]>);

//
// Inherent impls
//

impl<T> Buf2<T> {
    /// Returns a buffer with size `w` × `h`, with elements initialized
    /// with values from `init` in row-major order.
    ///
    /// # Panics
    /// If there are fewer than `w * h` elements in `init`.
    pub fn new<I>(w: usize, h: usize, init: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<_> = init.into_iter().take(w * h).collect();
        assert_eq!(data.len(), w * h);
        Self(Inner::new(w, h, data))
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `T::default()`.
    pub fn new_default(w: usize, h: usize) -> Self
    where
        T: Clone + Default,
    {
        Self::new(w, h, repeat(T::default()))
    }
    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `init_fn(x, y)` where x is the column index
    /// and y the row index of the element being initialized.
    pub fn new_with<F>(w: usize, h: usize, mut init_fn: F) -> Self
    where
        F: Copy + FnMut(usize, usize) -> T,
    {
        let init = (0..h).flat_map(move |y| {
            (0..w).map(move |x| init_fn(x, y)) //
        });
        Self::new(w, h, init)
    }
}

impl<'a, T> Slice2<'a, T> {
    /// Returns a new `Slice2` view to `data` with dimensions `w` and `h`.
    ///
    /// # Panics
    /// if `data` has fewer than `w * h` elements.
    pub fn new(w: usize, h: usize, data: &'a [T]) -> Self {
        Self(Inner::new(w, h, data))
    }
}

//
// Local trait impls
//

impl<T> AsSlice2<T> for Buf2<T> {
    #[inline]
    fn as_slice2(&self) -> Slice2<'_, T> {
        self.0.as_slice2()
    }
}
impl<T> AsSlice2<T> for Slice2<'_, T> {
    #[inline]
    fn as_slice2(&self) -> Slice2<'_, T> {
        self.0.as_slice2()
    }
}
impl<T, S: AsSlice2<T>> AsSlice2<T> for &S {
    #[inline]
    fn as_slice2(&self) -> Slice2<'_, T> {
        (*self).as_slice2()
    }
}

//
// Foreign trait impls
//

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.0.debug_fmt(f, "Buf2")
    }
}
impl<T> Debug for Slice2<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.0.debug_fmt(f, "Slice2")
    }
}

impl<T> Deref for Buf2<T> {
    type Target = Inner<T, Vec<T>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<'a, T> Deref for Slice2<'a, T> {
    type Target = Inner<T, &'a [T]>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Buf2<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

mod inner {
    use core::fmt::Formatter;
    use core::marker::PhantomData;
    use core::ops::{Deref, DerefMut, Index, IndexMut};

    use crate::util::buf::Slice2;

    /// A helper type that abstracts over owned and borrowed buffers.
    /// The types `Buf2` and `Slice2` deref to `Inner`.
    #[derive(Copy, Clone, PartialEq)]
    pub struct Inner<T, D> {
        w: usize,
        h: usize,
        data: D,
        _pd: PhantomData<T>,
    }

    impl<T, D> Inner<T, D> {
        /// Returns the width of `self`.
        #[inline]
        pub fn width(&self) -> usize {
            self.w
        }
        /// Returns the height of `self`.
        #[inline]
        pub fn height(&self) -> usize {
            self.h
        }
        /// Returns whether `self` has no elements (if its width or height is 0).
        pub fn is_empty(&self) -> bool {
            self.w == 0 || self.h == 0
        }

        #[inline]
        fn to_index_checked(&self, x: usize, y: usize) -> Option<usize> {
            (x < self.w && y < self.h).then(|| y * self.w + x)
        }

        #[cold]
        #[inline(never)]
        #[track_caller]
        fn position_out_of_bounds(&self, x: usize, y: usize) -> ! {
            panic!(
                "position (x={x}, y={y}) out of bounds (0..{}, 0..{})",
                self.w, self.h
            )
        }

        /// A helper for implementing `Debug`.
        pub(super) fn debug_fmt(
            &self,
            f: &mut Formatter,
            name: &str,
        ) -> core::fmt::Result {
            f.debug_struct(name)
                .field("w", &self.w)
                .field("h", &self.h)
                .finish()
        }
    }

    impl<T, D: Deref<Target = [T]>> Inner<T, D> {
        /// # Panics
        /// if `data` has fewer than `w * h` elements.
        pub(super) fn new(w: usize, h: usize, data: D) -> Self {
            assert!(w * h <= data.len());
            Self { w, h, data, _pd: PhantomData }
        }

        /// Returns the data of `self` as a linear slice.
        pub fn data(&self) -> &[T] {
            &self.data[..self.w * self.h]
        }

        /// Borrows `self` as a `Slice2`.
        pub fn as_slice2(&self) -> Slice2<'_, T> {
            Slice2(Inner::new(self.w, self.h, self.data()))
        }

        /// Returns a reference to the element at column `x`, row `y`,
        /// or `None` if the position is out of bounds.
        pub fn get(&self, x: usize, y: usize) -> Option<&T> {
            self.to_index_checked(x, y).map(|i| &self.data[i])
        }

        /// Returns an iterator over the rows of `self` as `&[T]` slices.
        /// The length of each slice equals [`self.width()`](Self::width).
        pub fn rows(&self) -> impl Iterator<Item = &[T]> {
            // chunks panics on zero width
            self.data().chunks(self.w.max(1)).take(self.h)
        }

        /// Returns an iterator over all the elements of `self` in row-major
        /// order: first the elements on row 0 from left to right, followed
        /// by the elements on row 1, and so on.
        pub fn iter(&self) -> impl Iterator<Item = &'_ T> {
            self.data().iter()
        }
    }

    impl<T, D: Deref<Target = [T]>> Index<usize> for Inner<T, D> {
        type Output = [T];

        /// Returns a reference to the row of `self` at index `i`.
        /// The returned slice has length `self.width()`.
        #[inline]
        fn index(&self, i: usize) -> &[T] {
            &self.data()[i * self.w..][..self.w]
        }
    }

    impl<T, D: Deref<Target = [T]>> Index<[usize; 2]> for Inner<T, D> {
        type Output = T;

        /// Returns a reference to the element of `self` at position `[x, y]`.
        /// # Panics
        /// If the position is out of bounds of `self`.
        #[inline]
        fn index(&self, [x, y]: [usize; 2]) -> &T {
            let idx = self
                .to_index_checked(x, y)
                .unwrap_or_else(|| self.position_out_of_bounds(x, y));
            &self.data[idx]
        }
    }

    impl<T, D: DerefMut<Target = [T]>> IndexMut<[usize; 2]> for Inner<T, D> {
        /// Returns a mutable reference to the element of `self`
        /// at position `[x, y]`.
        /// # Panics
        /// If the position is out of bounds of `self`.
        #[inline]
        fn index_mut(&mut self, [x, y]: [usize; 2]) -> &mut T {
            let idx = self
                .to_index_checked(x, y)
                .unwrap_or_else(|| self.position_out_of_bounds(x, y));
            &mut self.data[idx]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buf_new() {
        let buf = Buf2::new(3, 2, 1..);
        assert_eq!(buf.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn buf_new_default() {
        let buf: Buf2<i32> = Buf2::new_default(3, 2);
        assert_eq!(buf.data(), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn buf_new_with() {
        let buf = Buf2::new_with(3, 2, |x, y| x + y);
        assert_eq!(buf.data(), &[0, 1, 2, 1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn buf_new_too_few_elements_should_panic() {
        let _ = Buf2::new(3, 3, 0..8);
    }

    #[test]
    fn buf_extents() {
        let buf: Buf2<()> = Buf2::new_default(8, 10);
        assert_eq!(buf.width(), 8);
        assert_eq!(buf.height(), 10);
        assert!(!buf.is_empty());
    }

    #[test]
    fn buf_indexing() {
        let buf = Buf2::new_with(4, 5, |x, y| x * 10 + y);

        assert_eq!(buf[[0, 0]], 0);
        assert_eq!(buf[[1, 0]], 10);
        assert_eq!(buf[[3, 4]], 34);
        assert_eq!(buf[4usize][3], 34);

        assert_eq!(buf.get(2, 3), Some(&23));
        assert_eq!(buf.get(4, 4), None);
    }

    #[test]
    fn buf_mut_indexing() {
        let mut buf = Buf2::new_with(4, 5, |x, y| x * 10 + y);

        buf[[3, 4]] = 123;
        assert_eq!(buf[[3, 4]], 123);
        assert_eq!(&buf[4usize], &[4, 14, 24, 123]);
    }

    #[test]
    #[should_panic]
    fn buf_index_past_end_should_panic() {
        let buf = Buf2::new_default(4, 5);
        let () = buf[[4, 0]];
    }

    #[test]
    fn buf_rows() {
        let buf = Buf2::new_with(3, 2, |x, y| x * 10 + y);

        let mut rows = buf.rows();
        assert_eq!(rows.next(), Some(&[0, 10, 20][..]));
        assert_eq!(rows.next(), Some(&[1, 11, 21][..]));
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn slice_views_buffer() {
        let buf = Buf2::new_with(3, 2, |x, y| x * 10 + y);
        let slice = buf.as_slice2();

        assert_eq!(slice.width(), 3);
        assert_eq!(slice.height(), 2);
        assert_eq!(slice[[2, 1]], 21);
        assert_eq!(slice.get(3, 0), None);
        assert_eq!(slice.data(), buf.data());
    }

    #[test]
    #[should_panic]
    fn slice_too_short_should_panic() {
        let _ = Slice2::new(4, 4, &[0; 15]);
    }
}
