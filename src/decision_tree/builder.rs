use crate::Sample;
use super::criterion::*;
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use booltree::prelude::*;
///
/// # let sample = Sample::from_text("train.dat").unwrap();
/// let tree = DecisionTreeBuilder::new(&sample)
///     .criterion(Criterion::Purity)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    criterion: Criterion,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// criterion: Criterion::Purity,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        let criterion = Criterion::default();

        Self { sample, criterion, }
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Purity`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<'a> {
        DecisionTree::new(self.sample, self.criterion)
    }
}
