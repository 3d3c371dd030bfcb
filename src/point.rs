//! The `Point` type and the pass-by-value / pass-by-reference
//! operations over it.

use std::fmt;

use crate::counter::GenCounter;

/// A two-field integer coordinate.
///
/// `Point` is `Copy`, so passing it by value hands the callee an
/// independent copy on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Display a point passed by value. The callee owns a copy, so the
/// caller's point cannot be affected.
pub fn show(point: Point) {
    println!("Point is {}", point);
}

/// Display a point through a shared borrow. Same output as [`show`];
/// reference access does not imply mutation.
pub fn show_by_ref(point: &Point) {
    println!("Point is {}", point);
}

/// Increment a point that was passed by value. Only the local copy
/// changes; the caller still holds the original.
pub fn move_point(mut point: Point) {
    println!("Point is {}", point);
    point.x += 1;
    point.y += 1;
    println!("Point is {}", point);
}

/// Increment a point through an exclusive borrow. The caller sees the
/// change after the call returns.
pub fn move_point_by_ref(point: &mut Point) {
    println!("Point is {}", point);
    point.x += 1;
    point.y += 1;
    println!("New point is {}", point);
}

/// Build the next point from the counter and return it by value.
///
/// Consumes two consecutive counter values: `x = n`, `y = n + 1`,
/// leaving the counter at `n + 2`.
pub fn generate(counter: &GenCounter) -> Point {
    let (x, y) = counter.next_pair();
    let point = Point::new(x, y);
    println!("Returning Point    {}", point);
    point
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_coordinates() {
        assert_eq!(Point::new(-1, 5).to_string(), "(-1, 5)");
    }

    #[test]
    fn show_variants_leave_the_caller_point_alone() {
        let point = Point::new(7, -3);
        show(point);
        show_by_ref(&point);
        assert_eq!(point, Point::new(7, -3));
    }

    #[test]
    fn move_point_only_touches_its_copy() {
        let point = Point::new(10, 20);
        move_point(point);
        assert_eq!(point, Point::new(10, 20));
    }

    #[test]
    fn move_point_by_ref_changes_the_caller_point() {
        let mut point = Point::new(10, 20);
        move_point_by_ref(&mut point);
        assert_eq!(point, Point::new(11, 21));
    }

    #[test]
    fn generate_takes_two_consecutive_counter_values() {
        let counter = GenCounter::new();
        assert_eq!(generate(&counter), Point::new(0, 1));
        assert_eq!(counter.current(), 2);
        assert_eq!(generate(&counter), Point::new(2, 3));
        assert_eq!(counter.current(), 4);
    }

    #[test]
    fn generate_respects_an_injected_counter() {
        let counter = GenCounter::from_value(40);
        assert_eq!(generate(&counter), Point::new(40, 41));
    }
}
