//! Defines the impurity measures used to pick a splitting attribute.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Instance;
use super::attributes::AvailableAttributes;


/// Impurity of splitting a set of instances on one attribute.
/// The tree picks the attribute with the smallest score,
/// so `Score(0.0)` means both sides hold a single category
/// (or, for `Criterion::Balance`, that one side is empty).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(pub f64);


impl From<f64> for Score {
    fn from(impurity: f64) -> Self {
        Self(impurity)
    }
}


/// Splitting criteria for growing decision tree.
/// * `Criterion::Purity` weights the class impurity of each side of the
///     split by the side's share of the instances.
///     A side with `N` instances and category counts `c_0, c_1, ...`
///     has impurity `sum_{i < j} (c_i / N) (c_j / N)`,
///     i.e., `(c_0 / N) (c_1 / N)` for two categories.
/// * `Criterion::Balance` only measures how evenly the attribute splits
///     the instances, `A / (A + B) * B / (A + B)`,
///     and ignores the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Criterion {
    /// Weighted class impurity of both sides.
    #[default]
    Purity,
    /// Balance of the split sizes.
    Balance,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Purity => "Purity (weighted class impurity)",
            Self::Balance => "Balance (split sizes)",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the impurity of splitting `instances` on `attribute`.
    /// `n_category` is the size of the whole category space.
    pub fn score(
        &self,
        instances: &[&Instance],
        attribute: usize,
        n_category: usize,
    ) -> Score
    {
        match self {
            Criterion::Purity => {
                let (t, f) = category_counts(instances, attribute, n_category);
                let total = instances.len();
                Score(weighted_impurity(&t, total) + weighted_impurity(&f, total))
            },
            Criterion::Balance => {
                let a = instances.iter()
                    .filter(|instance| instance[attribute])
                    .count();
                let b = instances.len() - a;
                Score(split_balance(a, b))
            },
        }
    }


    /// Returns the available attribute with the minimal score.
    /// Ties go to the smallest attribute index.
    /// Returns `None` if no attribute is available.
    pub fn best_attribute(
        &self,
        instances: &[&Instance],
        available: &AvailableAttributes,
        n_category: usize,
    ) -> Option<(usize, Score)>
    {
        let mut best: Option<(usize, Score)> = None;
        for attribute in available.iter() {
            let score = self.score(instances, attribute, n_category);
            match best {
                Some((_, min)) if score >= min => {},
                _ => { best = Some((attribute, score)); },
            }
        }
        best
    }
}


/// Counts the categories on the true and false sides of `attribute`.
fn category_counts(
    instances: &[&Instance],
    attribute: usize,
    n_category: usize,
) -> (Vec<usize>, Vec<usize>)
{
    let mut t = vec![0_usize; n_category];
    let mut f = vec![0_usize; n_category];
    for instance in instances {
        if instance[attribute] {
            t[instance.category()] += 1;
        } else {
            f[instance.category()] += 1;
        }
    }
    (t, f)
}


/// `(n / total) * sum_{i < j} (c_i / n) (c_j / n)`.
/// An empty side contributes `0`.
fn weighted_impurity(counts: &[usize], total: usize) -> f64 {
    let n = counts.iter().sum::<usize>();
    if n == 0 || total == 0 { return 0f64; }

    // sum_{i < j} c_i c_j = (n^2 - sum_i c_i^2) / 2
    let squares = counts.iter().map(|c| c * c).sum::<usize>();
    let pairs = (n * n - squares) / 2;

    let n = n as f64;
    (pairs as f64 / (n * n)) * (n / total as f64)
}


/// `A / (A + B) * B / (A + B)`, `0` if there is nothing to split.
fn split_balance(a: usize, b: usize) -> f64 {
    let total = a + b;
    if total == 0 { return 0f64; }

    let total = total as f64;
    (a as f64 / total) * (b as f64 / total)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn refs(instances: &[Instance]) -> Vec<&Instance> {
        instances.iter().collect()
    }

    #[test]
    fn perfect_split_has_zero_impurity() {
        let instances = vec![
            Instance::new(0, [true,  true]),
            Instance::new(0, [true,  false]),
            Instance::new(1, [false, true]),
            Instance::new(1, [false, false]),
        ];
        let instances = refs(&instances);

        let score = Criterion::Purity.score(&instances, 0, 2);
        assert_eq!(score, Score(0f64));

        // Each side is half/half, weighted by 1/2: 2 * (1/2 * 1/4).
        let score = Criterion::Purity.score(&instances, 1, 2);
        assert_eq!(score, Score::from(0.25));
        assert!(Criterion::Purity.score(&instances, 0, 2) < score);
    }

    #[test]
    fn empty_side_contributes_nothing() {
        let instances = vec![
            Instance::new(0, [true]),
            Instance::new(1, [true]),
        ];
        let instances = refs(&instances);

        let score = Criterion::Purity.score(&instances, 0, 2);
        assert_eq!(score, Score(0.25));
        assert_eq!(Criterion::Balance.score(&instances, 0, 2), Score(0f64));
        assert_eq!(Criterion::Purity.score(&[], 0, 2), Score(0f64));
    }

    #[test]
    fn three_categories_generalize_pairwise() {
        let instances = vec![
            Instance::new(0, [true]),
            Instance::new(1, [true]),
            Instance::new(2, [true]),
        ];
        let instances = refs(&instances);

        // 3 pairs of (1/3)(1/3).
        let Score(score) = Criterion::Purity.score(&instances, 0, 3);
        assert!((score - 1f64 / 3f64).abs() < 1e-12);
    }

    #[test]
    fn balance_ignores_categories() {
        let instances = vec![
            Instance::new(0, [true]),
            Instance::new(0, [true]),
            Instance::new(1, [false]),
            Instance::new(1, [true]),
        ];
        let instances = refs(&instances);

        assert_eq!(Criterion::Balance.score(&instances, 0, 2), Score(0.1875));
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        // Attributes 1 and 2 are identical and both separate the classes.
        let instances = vec![
            Instance::new(0, [true,  true,  true]),
            Instance::new(0, [false, true,  true]),
            Instance::new(1, [true,  false, false]),
            Instance::new(1, [false, false, false]),
        ];
        let instances = refs(&instances);
        let available = AvailableAttributes::all(3);

        let best = Criterion::Purity.best_attribute(&instances, &available, 2);
        assert_eq!(best, Some((1, Score(0f64))));

        let available = available.without(1);
        let best = Criterion::Purity.best_attribute(&instances, &available, 2);
        assert_eq!(best, Some((2, Score(0f64))));
    }

    #[test]
    fn no_attribute_no_choice() {
        let instances = vec![Instance::new(0, [true])];
        let instances = refs(&instances);
        let available = AvailableAttributes::none(1);

        let best = Criterion::Purity.best_attribute(&instances, &available, 1);
        assert_eq!(best, None);
    }
}
