// Runnable walk-through of every operation, in the order the tests
// exercise them.

use colored::Colorize;

use point_ownership::{
    generate, generate_owned, move_point, move_point_by_ref, show, show_by_ref, GenCounter, Point,
};

fn main() {
    println!("{}", "=== Showing: value vs reference ===".cyan().bold());
    let point = Point::new(1, 2);
    show(point);
    show_by_ref(&point);

    println!();
    println!("{}", "=== Moving a value-passed point ===".cyan().bold());
    let original = Point::new(3, 4);
    move_point(original);
    println!("Caller still has   {}", original);

    println!();
    println!("{}", "=== Moving a reference-passed point ===".cyan().bold());
    let mut shared = Point::new(3, 4);
    move_point_by_ref(&mut shared);
    println!("Caller now has     {}", shared);

    println!();
    println!("{}", "=== Generating points from a counter ===".cyan().bold());
    let counter = GenCounter::new();
    let first = generate(&counter);
    let second = generate(&counter);
    println!("Generated {} then {}", first, second);

    match generate_owned(&counter) {
        Ok(owned) => {
            println!("Owned point holds  {}", *owned);
            owned.release();
        }
        Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
    }

    println!();
    println!("Counter finished at {}", counter.current());
}
