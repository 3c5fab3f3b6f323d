use log::{debug, info, warn};

use crate::{Instance, Sample};
use crate::errors::{Result, TreeError};

use super::{
    attributes::AvailableAttributes,
    criterion::Criterion,
    node::*,
    dtree_classifier::DecisionTreeClassifier,
};

use std::fmt;


/// The Decision Tree algorithm for boolean attributes.
/// Given a set of labeled training instances,
/// [`DecisionTree`] grows a binary tree that tests one attribute per
/// branch node and never tests an attribute twice on the same path.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use booltree::prelude::*;
///
/// let train = Sample::from_text("/path/to/training/file.dat").unwrap();
/// let test = Sample::from_text("/path/to/test/file.dat").unwrap();
///
/// let tree = DecisionTreeBuilder::new(&train)
///     .criterion(Criterion::Purity)
///     .build()
///     .fit()
///     .unwrap();
///
/// println!("{tree}");
/// println!("accuracy (test) is: {}", tree.evaluate_sample(&test));
/// ```
pub struct DecisionTree<'a> {
    sample: &'a Sample,
    criterion: Criterion,
}


impl<'a> DecisionTree<'a> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(sample: &'a Sample, criterion: Criterion) -> Self {
        Self { sample, criterion, }
    }


    /// Returns the training sample.
    #[inline]
    pub fn sample(&self) -> &'a Sample {
        self.sample
    }


    /// Returns the splitting criterion.
    #[inline]
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }


    /// Grows a tree over the whole training sample
    /// with every attribute available.
    pub fn fit(&self) -> Result<DecisionTreeClassifier> {
        let (n_sample, n_attribute) = self.sample.shape();
        let instances = self.sample.instances()
            .iter()
            .collect::<Vec<_>>();
        let available = AvailableAttributes::all(n_attribute);

        let root = self.induce(&instances[..], &available)?;

        info!(
            "grew a tree with {} leaves (depth {}) over {n_sample} instances",
            root.leaves(),
            root.depth(),
        );

        Ok(DecisionTreeClassifier::new(
            root, self.sample.categories().to_vec()
        ))
    }


    /// Grows the sub-tree that covers `instances`
    /// when only the attributes in `available` may be tested.
    ///
    /// The rules, in order:
    /// 1. no instance: the majority leaf of the whole training sample,
    /// 2. a single category: a leaf of that category with probability `1`,
    /// 3. no attribute left: the majority leaf of `instances`,
    /// 4. otherwise: split on the attribute of minimal impurity
    ///    and grow both children without that attribute.
    ///
    /// Returns `TreeError::InvalidInput` if an instance or `available`
    /// does not match the shape of the training sample,
    /// or if rule 1 fires on an empty training sample.
    pub fn induce(
        &self,
        instances: &[&Instance],
        available: &AvailableAttributes,
    ) -> Result<Node>
    {
        self.check_shape(instances, available)?;
        let fallback = self.global_majority()?;
        self.grow(instances, available, fallback.as_ref())
    }


    /// Returns the leaf predicting the most frequent category of
    /// `instances`. Ties go to the smallest category index.
    /// The probability is the frequency of that category.
    ///
    /// Returns `TreeError::InvalidInput` if `instances` is empty
    /// or holds a category index out of range.
    pub fn majority_leaf(&self, instances: &[&Instance]) -> Result<LeafNode> {
        if instances.is_empty() {
            return Err(TreeError::InvalidInput(
                "cannot compute the majority category \
                 over an empty instance set".into()
            ));
        }

        let categories = self.sample.categories();
        let mut counts = vec![0_usize; categories.len()];
        for instance in instances {
            let count = counts.get_mut(instance.category())
                .ok_or_else(|| TreeError::InvalidInput(format!(
                    "an instance has category index {}, \
                     but there are only {} categories",
                    instance.category(),
                    categories.len(),
                )))?;
            *count += 1;
        }

        let mut category = 0;
        for (k, &count) in counts.iter().enumerate() {
            if count > counts[category] { category = k; }
        }

        let probability = counts[category] as f64 / instances.len() as f64;
        Ok(LeafNode::from_raw(
            category, categories[category].clone(), probability
        ))
    }


    /// The majority leaf of the whole training sample,
    /// or `None` if the sample has no instance.
    fn global_majority(&self) -> Result<Option<LeafNode>> {
        if self.sample.instances().is_empty() { return Ok(None); }

        let all = self.sample.instances().iter().collect::<Vec<_>>();
        self.majority_leaf(&all[..]).map(Some)
    }


    fn grow(
        &self,
        instances: &[&Instance],
        available: &AvailableAttributes,
        fallback: Option<&LeafNode>,
    ) -> Result<Node>
    {
        // Nothing reached this branch in training,
        // so fall back to the whole sample.
        if instances.is_empty() {
            warn!("empty branch; using the majority of the training sample");
            let leaf = fallback.ok_or_else(|| TreeError::InvalidInput(
                "cannot compute the majority category \
                 over an empty training sample".into()
            ))?;
            return Ok(Node::Leaf(leaf.clone()));
        }

        if let Some(category) = pure_category(instances) {
            let name = self.sample.categories()[category].clone();
            return Ok(Node::Leaf(LeafNode::from_raw(category, name, 1f64)));
        }

        let n_category = self.sample.categories().len();
        let best = self.criterion
            .best_attribute(instances, available, n_category);
        let Some((attribute, score)) = best else {
            debug!(
                "no attribute left for {} instances; majority leaf",
                instances.len()
            );
            return self.majority_leaf(instances).map(Node::Leaf);
        };

        let name = self.sample.attributes()[attribute].clone();
        debug!(
            "split {} instances on `{name}` (impurity {})",
            instances.len(),
            score.0,
        );

        let (t_instances, f_instances) = partition(instances, attribute);
        let available = available.without(attribute);

        let true_branch = self.grow(&t_instances[..], &available, fallback)?;
        let false_branch = self.grow(&f_instances[..], &available, fallback)?;

        Ok(Node::Branch(BranchNode::from_raw(
            attribute,
            name,
            Box::new(true_branch),
            Box::new(false_branch),
        )))
    }


    fn check_shape(
        &self,
        instances: &[&Instance],
        available: &AvailableAttributes,
    ) -> Result<()>
    {
        let (_, n_attribute) = self.sample.shape();
        let n_category = self.sample.categories().len();

        if available.len() != n_attribute {
            return Err(TreeError::InvalidInput(format!(
                "the availability set spans {} attributes, expected {n_attribute}",
                available.len(),
            )));
        }

        for instance in instances {
            if instance.len() != n_attribute {
                return Err(TreeError::InvalidInput(format!(
                    "an instance has {} values, expected {n_attribute}",
                    instance.len(),
                )));
            }
            if instance.category() >= n_category {
                return Err(TreeError::InvalidInput(format!(
                    "an instance has category index {}, \
                     but there are only {n_category} categories",
                    instance.category(),
                )));
            }
        }
        Ok(())
    }
}


/// Returns the category shared by every instance,
/// or `None` if there are two or more.
fn pure_category(instances: &[&Instance]) -> Option<usize> {
    let category = instances.first()?.category();
    instances.iter()
        .all(|instance| instance.category() == category)
        .then_some(category)
}


/// Splits `instances` into the ones whose `attribute` is `true`
/// and the rest. Both keep the input order.
fn partition<'a>(instances: &[&'a Instance], attribute: usize)
    -> (Vec<&'a Instance>, Vec<&'a Instance>)
{
    instances.iter()
        .copied()
        .partition(|instance| instance[attribute])
}


impl fmt::Display for DecisionTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_sample, n_attribute) = self.sample.shape();
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Criterion: {}\n\
            - Instances: {n_sample}\n\
            - Attributes: {n_attribute}\n\
            - Categories: {}\n\
            ----------\
            ",
            self.criterion,
            self.sample.categories().len(),
        )
    }
}
