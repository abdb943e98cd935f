//! Test that a function position that is not a path produces a compile error.

fn main() {
    let _ = slotted::curry!("add", 2);
}
