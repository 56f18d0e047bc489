//! Levenshtein edit distance
//!
//! Unit-cost insertion, deletion and substitution over bytes. Only the final
//! distance is needed, so the table is kept as two rolling rows.

/// Compute the edit distance between `a` and `b`
///
/// # Algorithm
/// Classic dynamic programming with two rows of length `b.len() + 1`:
/// `O(|a|·|b|)` time, `O(|b|)` space.
///
/// # Examples
/// ```
/// use word_chains::core::distance;
///
/// assert_eq!(distance("aa", "aba"), 1);
/// assert_eq!(distance("aa", "aa"), 0);
/// assert_eq!(distance("", "abc"), 3);
/// ```
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (curr[j] + 1) // insertion
                .min(prev[j + 1] + 1) // deletion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Check whether two strings are exactly one edit apart
///
/// Same result as `distance(a, b) == 1`, but skips the table when the lengths
/// alone rule it out.
#[inline]
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    if a.len().abs_diff(b.len()) > 1 {
        return false;
    }
    distance(a, b) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("aa", "aa"), 0);
        assert_eq!(distance("parola", "parola"), 0);
    }

    #[test]
    fn empty_side_is_length() {
        assert_eq!(distance("", "abcd"), 4);
        assert_eq!(distance("abcd", ""), 4);
    }

    #[test]
    fn single_edits() {
        assert_eq!(distance("aa", "aba"), 1); // insertion
        assert_eq!(distance("aba", "aa"), 1); // deletion
        assert_eq!(distance("aba", "bba"), 1); // substitution
    }

    #[test]
    fn known_distances() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("aa", "bba"), 2);
        assert_eq!(distance("abc", "xyz"), 3);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(distance("abc", "aBc"), 1);
    }

    #[test]
    fn symmetric() {
        let samples = ["", "a", "ab", "abc", "bca", "kitten", "sitting", "aaaa"];
        for a in samples {
            for b in samples {
                assert_eq!(distance(a, b), distance(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn triangle_inequality() {
        let samples = ["", "a", "ab", "ba", "abc", "cab", "abcd", "xbcd"];
        for a in samples {
            for b in samples {
                for c in samples {
                    assert!(
                        distance(a, c) <= distance(a, b) + distance(b, c),
                        "{a} {b} {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn adjacency_agrees_with_distance() {
        let samples = ["", "a", "aa", "aaa", "aba", "bba", "abcd", "b"];
        for a in samples {
            for b in samples {
                assert_eq!(is_adjacent(a, b), distance(a, b) == 1, "{a} / {b}");
            }
        }
    }
}
