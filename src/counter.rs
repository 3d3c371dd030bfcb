//! The generation counter behind `generate` and `generate_owned`.

use std::sync::atomic::{AtomicI32, Ordering};

/// Hands out consecutive coordinate values to the point generators.
///
/// Each generated point consumes two values: `x` takes the current
/// count and `y` the one after it. `next_pair` advances by two in a
/// single atomic step, so two generators sharing a counter can never
/// interleave values.
#[derive(Debug, Default)]
pub struct GenCounter {
    count: AtomicI32,
}

impl GenCounter {
    /// A counter starting at zero.
    pub fn new() -> Self {
        Self::from_value(0)
    }

    /// A counter starting at an arbitrary value.
    pub fn from_value(start: i32) -> Self {
        GenCounter {
            count: AtomicI32::new(start),
        }
    }

    /// Takes the next two consecutive values `(n, n + 1)`, leaving the
    /// counter at `n + 2`.
    ///
    /// The count wraps at `i32::MAX`, so values repeat once the full
    /// `i32` range has been handed out.
    pub fn next_pair(&self) -> (i32, i32) {
        let n = self.count.fetch_add(2, Ordering::SeqCst);
        (n, n.wrapping_add(1))
    }

    /// The value the next generated point will use for `x`.
    pub fn current(&self) -> i32 {
        self.count.load(Ordering::SeqCst)
    }
}
