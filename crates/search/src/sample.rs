use std::ops::RangeInclusive;

use rand::Rng;

use crate::AlgorithmKind;

/// Range random values are drawn from: two-digit numbers fit a cell.
const VALUE_RANGE: RangeInclusive<i64> = 10..=99;

/// Draws a fresh input for `kind`.
///
/// Produces [`AlgorithmKind::sample_len`] values uniformly from `10..=99`,
/// sorted whenever the algorithm [requires it](AlgorithmKind::requires_sorted).
/// Duplicates are allowed.
pub fn random_values<R: Rng + ?Sized>(kind: AlgorithmKind, rng: &mut R) -> Vec<i64> {
    let mut values: Vec<i64> = (0..kind.sample_len())
        .map(|_| rng.gen_range(VALUE_RANGE))
        .collect();

    if kind.requires_sorted() {
        values.sort_unstable();
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn lengths_follow_sample_values() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_values(AlgorithmKind::Linear, &mut rng).len(), 8);
        assert_eq!(random_values(AlgorithmKind::Binary, &mut rng).len(), 8);
        assert_eq!(random_values(AlgorithmKind::Jump, &mut rng).len(), 9);
    }

    #[test]
    fn values_stay_in_range_and_sorted_when_required() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            for kind in AlgorithmKind::ALL {
                let values = random_values(kind, &mut rng);
                assert!(values.iter().all(|value| VALUE_RANGE.contains(value)));
                if kind.requires_sorted() {
                    assert!(values.is_sorted());
                }
            }
        }
    }

    #[test]
    fn same_seed_same_values() {
        let a = random_values(AlgorithmKind::Fibonacci, &mut StdRng::seed_from_u64(3));
        let b = random_values(AlgorithmKind::Fibonacci, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
