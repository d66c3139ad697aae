//! Predicate counting over a numeric sequence.

/// The fixed sequence scanned by the counting demonstration.
pub const NUMBERS: [i32; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 25, 35, 45, 50];

/// Named predicate, passed to [`count_matching`] as a plain `fn` item.
pub fn is_greater_than_5(value: i32) -> bool {
    value > 5
}

/// Count the elements of `numbers` for which `predicate` holds.
///
/// Accepts anything callable as `Fn(i32) -> bool`: a `fn` item, a closure with
/// annotated types, or a fully inferred closure. Every call is a fresh scan.
pub fn count_matching<P>(numbers: &[i32], predicate: P) -> usize
where
    P: Fn(i32) -> bool,
{
    numbers.iter().filter(|&&value| predicate(value)).count()
}
