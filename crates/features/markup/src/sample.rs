use std::cmp::Ordering;

/// Picks `count` items spread evenly over `items`, first and last included.
///
/// A single sample is the middle item; asking for at least as many items as
/// there are returns all of them.
#[must_use]
pub fn sample_evenly<T>(items: &[T], count: usize) -> Vec<&T> {
    let len = items.len();
    match count {
        0 => Vec::new(),
        _ if len == 0 => Vec::new(),
        1 => vec![&items[len / 2]],
        _ if count >= len => items.iter().collect(),
        _ => (0..count)
            .map(|i| &items[ratio_round_ties_even(i * (len - 1), count - 1).min(len - 1)])
            .collect(),
    }
}

/// `numerator / denominator` rounded half to even, without going through floats.
fn ratio_round_ties_even(numerator: usize, denominator: usize) -> usize {
    let (quotient, remainder) = (numerator / denominator, numerator % denominator);
    match (2 * remainder).cmp(&denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    }
}
