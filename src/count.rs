use num_bigint::BigUint;

/// Number of distinct trees of the given height built from `alphabet_size`
/// propositions and operators with the given arities.
///
/// Counts the trees an exact-height construction produces:
///
/// ```text
/// T(0) = |alphabet|
/// T(h) = Σ_op T(h-1)^arity(op)
/// ```
///
/// A nullary operator contributes a single childless tree at every level.
/// Operators are told apart by position, so duplicates in `arities` count twice.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use randformula::count::count_trees;
///
/// // ¬ and ∧ over {p, q}: 2 + 2*2 = 6 trees of height 1.
/// assert_eq!(count_trees(1, 2, &[1, 2]), BigUint::from(6u32));
/// ```
pub fn count_trees(height: usize, alphabet_size: usize, arities: &[usize]) -> BigUint {
    let mut count = BigUint::from(alphabet_size as u64);
    for _ in 0..height {
        count = arities.iter().map(|&arity| count.pow(arity as u32)).sum();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_height_zero() {
        assert_eq!(count_trees(0, 5, &[1, 2]), BigUint::from(5u32));
        assert_eq!(count_trees(0, 5, &[]), BigUint::from(5u32));
    }

    #[test]
    fn test_count_no_operators() {
        assert_eq!(count_trees(3, 5, &[]), BigUint::ZERO);
    }

    #[test]
    fn test_count_unary_chain() {
        // A single unary operator never branches.
        assert_eq!(count_trees(10, 3, &[1]), BigUint::from(3u32));
    }

    #[test]
    fn test_count_base_connectives() {
        // ¬, ∧, ∨, → over {p, q}.
        let arities = [1, 2, 2, 2];
        assert_eq!(count_trees(1, 2, &arities), BigUint::from(14u32));
        assert_eq!(count_trees(2, 2, &arities), BigUint::from(602u32));
    }

    #[test]
    fn test_count_nullary() {
        // ⊤ and ¬ over {p}: T(1) = 1 + 1, T(2) = 1 + 2.
        assert_eq!(count_trees(1, 1, &[0, 1]), BigUint::from(2u32));
        assert_eq!(count_trees(2, 1, &[0, 1]), BigUint::from(3u32));
    }

    #[test]
    fn test_count_grows_beyond_u64() {
        let count = count_trees(7, 2, &[2]);
        // 2^(2^7)
        assert_eq!(count, BigUint::from(2u32).pow(128));
        assert!(count > BigUint::from(u64::MAX));
    }
}
