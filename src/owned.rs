//! The heap-resident regime: a unique-owning handle over a
//! heap-allocated [`Point`], with an explicit release operation.

use std::alloc::{alloc, dealloc, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use thiserror::Error;

use crate::counter::GenCounter;
use crate::point::Point;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PointError {
    #[error("the allocator returned no memory for a point")]
    AllocationFailed,
}

/// Unique-owning handle to a heap-resident point.
///
/// There is exactly one owner; [`OwnedPoint::release`] consumes the
/// handle, so use-after-release and double-release do not compile.
/// A handle that goes out of scope without being released frees its
/// storage in `Drop`.
#[derive(Debug)]
pub struct OwnedPoint {
    ptr: NonNull<Point>,
}

impl OwnedPoint {
    fn alloc(point: Point) -> Result<Self, PointError> {
        // Point is two i32s, so the layout is never zero-sized.
        let layout = Layout::new::<Point>();
        let raw = unsafe { alloc(layout) as *mut Point };
        let ptr = NonNull::new(raw).ok_or(PointError::AllocationFailed)?;
        unsafe { ptr.as_ptr().write(point) };
        Ok(OwnedPoint { ptr })
    }

    /// The storage address. Diagnostic only; never compare or store it.
    pub fn addr(&self) -> *const Point {
        self.ptr.as_ptr()
    }

    /// Print the point and free its storage.
    ///
    /// Releasing moves the handle, so a second release does not
    /// compile:
    ///
    /// ```compile_fail
    /// use point_ownership::{generate_owned, GenCounter};
    ///
    /// let counter = GenCounter::new();
    /// let owned = generate_owned(&counter).unwrap();
    /// owned.release();
    /// owned.release(); // error: use of moved value
    /// ```
    pub fn release(self) {
        println!("Freeing Point      {} at {:p}", *self, self.addr());
        // Drop performs the deallocation.
    }
}

impl Deref for OwnedPoint {
    type Target = Point;

    fn deref(&self) -> &Self::Target {
        unsafe { self.ptr.as_ref() }
    }
}

impl DerefMut for OwnedPoint {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { self.ptr.as_mut() }
    }
}

impl Drop for OwnedPoint {
    fn drop(&mut self) {
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, Layout::new::<Point>()) };
    }
}

/// Build the next point from the counter on the heap and return the
/// owning handle.
///
/// Follows the same counter rule as [`generate`](crate::point::generate):
/// `x = n`, `y = n + 1`, counter left at `n + 2`. A failed allocation
/// is reported as [`PointError::AllocationFailed`].
pub fn generate_owned(counter: &GenCounter) -> Result<OwnedPoint, PointError> {
    let (x, y) = counter.next_pair();
    let point = OwnedPoint::alloc(Point::new(x, y))?;
    println!("Returning Point    {} at {:p}", *point, point.addr());
    Ok(point)
}
