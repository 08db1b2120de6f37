//! Weighted random sampling without replacement.

use crate::ExtrasError;

/// Draw `k` distinct items from `population`, each draw picking among the remaining
/// items in proportion to their weights.
///
/// Weights need not sum to one. Items with zero weight are never drawn, so `k` may not
/// exceed the number of positive weights.
pub fn weighted_choices<T: Clone>(
    population: &[T],
    weights: &[f64],
    k: usize,
) -> Result<Vec<T>, ExtrasError> {
    weighted_choices_with(&mut fastrand::Rng::new(), population, weights, k)
}

/// [`weighted_choices`] drawing from `rng`.
pub fn weighted_choices_with<T: Clone>(
    rng: &mut fastrand::Rng,
    population: &[T],
    weights: &[f64],
    k: usize,
) -> Result<Vec<T>, ExtrasError> {
    if weights.len() != population.len() {
        return Err(ExtrasError::WeightsLength {
            population: population.len(),
            weights: weights.len(),
        });
    }
    if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(ExtrasError::InvalidWeight(bad));
    }
    if k == 0 {
        return Ok(Vec::new());
    }
    if weights.iter().all(|&w| w == 0.0) {
        return Err(ExtrasError::ZeroWeights);
    }

    let mut remaining: Vec<(usize, f64)> = weights
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, w)| w > 0.0)
        .collect();
    if k > remaining.len() {
        return Err(ExtrasError::SampleTooLarge {
            k,
            available: remaining.len(),
        });
    }

    let mut chosen = Vec::with_capacity(k);
    for _ in 0..k {
        let total: f64 = remaining.iter().map(|&(_, w)| w).sum();
        let mut target = rng.f64() * total;

        // rounding can leave target just past the last cumulative weight
        let mut pick = remaining.len() - 1;
        for (i, &(_, w)) in remaining.iter().enumerate() {
            if target < w {
                pick = i;
                break;
            }
            target -= w;
        }

        let (index, _) = remaining.remove(pick);
        chosen.push(population[index].clone());
    }

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_distinct_items() {
        let population = ["a", "b", "c", "d"];
        let weights = [0.1, 0.2, 0.3, 0.4];

        for seed in 0..50 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut picked = weighted_choices_with(&mut rng, &population, &weights, 3).unwrap();
            assert_eq!(picked.len(), 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3);
        }
    }

    #[test]
    fn whole_population() {
        let mut picked = weighted_choices(&[1, 2, 3], &[1.0, 2.0, 3.0], 3).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, [1, 2, 3]);
    }

    #[test]
    fn zero_weight_never_drawn() {
        for seed in 0..50 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let picked =
                weighted_choices_with(&mut rng, &["x", "y", "z"], &[0.0, 0.0, 5.0], 1).unwrap();
            assert_eq!(picked, ["z"]);

            let mut picked =
                weighted_choices_with(&mut rng, &["x", "y", "z"], &[1.0, 0.0, 5.0], 2).unwrap();
            picked.sort_unstable();
            assert_eq!(picked, ["x", "z"]);
        }
    }

    #[test]
    fn heavier_items_drawn_more_often() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut heavy = 0;
        for _ in 0..1000 {
            if weighted_choices_with(&mut rng, &[0, 1], &[1.0, 9.0], 1).unwrap() == [1] {
                heavy += 1;
            }
        }
        assert!(heavy > 800, "heavy item drawn {heavy} times");
    }

    #[test]
    fn same_seed_same_draw() {
        let population: Vec<u32> = (0..20).collect();
        let weights: Vec<f64> = (1..=20).map(f64::from).collect();

        let a = weighted_choices_with(&mut fastrand::Rng::with_seed(7), &population, &weights, 5);
        let b = weighted_choices_with(&mut fastrand::Rng::with_seed(7), &population, &weights, 5);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn nothing_requested() {
        assert!(weighted_choices(&["a"], &[1.0], 0).unwrap().is_empty());
        assert!(weighted_choices::<u8>(&[], &[], 0).unwrap().is_empty());
    }

    #[test]
    fn invalid_arguments() {
        assert!(matches!(
            weighted_choices(&["a", "b"], &[1.0], 1),
            Err(ExtrasError::WeightsLength {
                population: 2,
                weights: 1
            })
        ));
        assert!(matches!(
            weighted_choices(&["a", "b"], &[1.0, -1.0], 1),
            Err(ExtrasError::InvalidWeight(w)) if w == -1.0
        ));
        assert!(matches!(
            weighted_choices(&["a", "b"], &[1.0, f64::NAN], 1),
            Err(ExtrasError::InvalidWeight(_))
        ));
        assert!(matches!(
            weighted_choices(&["a", "b"], &[0.0, 0.0], 1),
            Err(ExtrasError::ZeroWeights)
        ));
        assert!(matches!(
            weighted_choices(&["a", "b"], &[1.0, 1.0], 3),
            Err(ExtrasError::SampleTooLarge { k: 3, available: 2 })
        ));
        assert!(matches!(
            weighted_choices(&["a", "b", "c"], &[1.0, 0.0, 0.0], 2),
            Err(ExtrasError::SampleTooLarge { k: 2, available: 1 })
        ));
    }
}
