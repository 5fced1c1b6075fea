//! Cheap lower bounds on the number of moves between two words.

/// Lower bound on the edit distance between `a` and `b`.
///
/// For equal lengths this is the Hamming distance, which is exact for
/// substitution-only play when every intermediate word exists. For different
/// lengths it is the length difference: at least that many insertions or
/// deletions are needed.
pub fn lower_bound(a: &str, b: &str) -> usize {
    if a.len() == b.len() {
        a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
    } else {
        a.len().abs_diff(b.len())
    }
}

/// Lower bound that stays admissible when insertions and deletions are allowed.
///
/// Hamming distance overestimates in that setting (`abcd` to `bcda` takes one
/// deletion and one insertion), so this compares letter multisets instead:
/// every edit removes at most one surplus letter from each side, so the larger
/// surplus is a valid bound. It is never below the length difference.
pub fn flex_lower_bound(a: &str, b: &str) -> usize {
    let mut counts = [0i32; 256];
    for byte in a.bytes() {
        counts[byte as usize] += 1;
    }
    for byte in b.bytes() {
        counts[byte as usize] -= 1;
    }

    let (surplus_a, surplus_b) = counts.iter().fold((0, 0), |(pos, neg), &c| {
        if c > 0 {
            (pos + c as usize, neg)
        } else {
            (pos, neg + c.unsigned_abs() as usize)
        }
    });
    surplus_a.max(surplus_b)
}
