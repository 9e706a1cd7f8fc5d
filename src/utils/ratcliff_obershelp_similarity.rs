/// Calculate the Ratcliff/Obershelp similarity ratio between two strings.
///
/// The ratio is `2 * M / T`, where `T` is the total number of characters in both strings and
/// `M` is the number of characters covered by matching blocks. Matching blocks are found by
/// taking the longest common substring, then recursing on the unmatched pieces to its left
/// and to its right.
///
/// When several longest blocks exist, the one starting earliest in `a` wins, then the one
/// starting earliest in `b`. Two empty strings are identical (`1.0`).
///
/// ### Example:
/// ```rust
/// use greenscreen::ratcliff_obershelp_similarity;
///
/// assert_eq!(ratcliff_obershelp_similarity("abcd", "bcde"), 0.75);
/// ```
pub fn ratcliff_obershelp_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total_length = a.len() + b.len();
    if total_length == 0 {
        return 1.0;
    }

    let matches = count_matching_characters(&a, &b);

    2.0 * matches as f64 / total_length as f64
}

/// Sums the sizes of all matching blocks between `a` and `b`.
fn count_matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matches = 0;

    // Pending (a_lo, a_hi, b_lo, b_hi) windows; an explicit stack avoids recursion depth limits
    let mut windows = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = windows.pop() {
        let (i, j, size) = find_longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }

        matches += size;

        if a_lo < i && b_lo < j {
            windows.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            windows.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matches
}

/// Finds the longest block `a[i..i + size] == b[j..j + size]` inside the given windows.
///
/// Returns `(a_lo, b_lo, 0)` if the windows share no characters.
fn find_longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

    // `previous[k]` is the length of the common suffix ending at a[i - 1] and b[b_lo + k - 1]
    let width = b_hi - b_lo;
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];

    for i in a_lo..a_hi {
        for k in 1..=width {
            let j = b_lo + k - 1;
            if a[i] == b[j] {
                let size = previous[k - 1] + 1;
                current[k] = size;
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            } else {
                current[k] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    (best_i, best_j, best_size)
}
