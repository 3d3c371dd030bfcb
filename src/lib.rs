//! Pass-by-value versus pass-by-reference, demonstrated on a
//! two-field integer point, plus a heap-resident point behind a
//! unique-owning handle.
//!
//! - [`point`] holds the `Copy` point type and the by-value /
//!   by-reference show and move operations.
//! - [`counter`] holds the injectable generation counter each
//!   generated point draws two consecutive values from.
//! - [`owned`] holds the heap regime: [`generate_owned`] allocates a
//!   point and returns an [`OwnedPoint`] whose `release` consumes the
//!   handle, making double-release a compile-time error.
//!
//! Run the walk-through with: cargo run --bin point_demo

pub mod counter;
pub mod owned;
pub mod point;

pub use counter::GenCounter;
pub use owned::{generate_owned, OwnedPoint, PointError};
pub use point::{generate, move_point, move_point_by_ref, show, show_by_ref, Point};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_counter_scenario() {
        let counter = GenCounter::new();

        assert_eq!(generate(&counter), Point::new(0, 1));
        assert_eq!(counter.current(), 2);

        assert_eq!(generate(&counter), Point::new(2, 3));
        assert_eq!(counter.current(), 4);

        let owned = generate_owned(&counter).expect("allocation");
        assert_eq!(*owned, Point::new(4, 5));
        assert_eq!(counter.current(), 6);

        owned.release();
    }
}
