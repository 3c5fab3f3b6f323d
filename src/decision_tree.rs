//! Decision tree induction over boolean attributes.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the nodes of `DecisionTreeClassifier`.
pub mod node;
mod criterion;
mod attributes;


pub use dtree_classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use criterion::{Criterion, Score};
pub use attributes::AvailableAttributes;
pub use node::{Node, BranchNode, LeafNode};
