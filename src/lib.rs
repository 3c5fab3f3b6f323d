#![warn(missing_docs)]

//!
//! A crate that grows binary decision trees over boolean attributes.
//!
//! Given a [`Sample`] of instances, each of which has a category and
//! one boolean value per attribute,
//! [`DecisionTree`] recursively splits the instances on the attribute
//! of minimal impurity until a branch is pure,
//! runs out of attributes, or runs out of instances.
//! The resulting [`DecisionTreeClassifier`] routes an instance
//! down the `true`/`false` branches to a leaf
//! that predicts a category with a probability.
//!
//! ```no_run
//! use booltree::prelude::*;
//!
//! let train = Sample::from_text("hepatitis-training.dat").unwrap();
//! let test = Sample::from_text("hepatitis-test.dat").unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&train)
//!     .build()
//!     .fit()
//!     .unwrap();
//!
//! println!("{tree}");
//! println!("accuracy: {:.2}", tree.evaluate_sample(&test));
//! ```

pub mod errors;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod research;
pub mod prelude;


pub use errors::{Result, TreeError};

pub use sample::{
    Instance,
    Sample,
    SampleReader,
};

pub use classifier::Classifier;

pub use decision_tree::{
    AvailableAttributes,
    BranchNode,
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafNode,
    Node,
    Score,
};

pub use research::Report;
