//! Exports the standard learner, classifier, and traits.
//!
pub use crate::sample::{
    Instance,
    Sample,
    SampleReader,
};


pub use crate::decision_tree::{
    // Learner
    DecisionTree,
    DecisionTreeBuilder,
    Criterion,


    // Classifier
    DecisionTreeClassifier,
    Node,
    BranchNode,
    LeafNode,
};


pub use crate::classifier::Classifier;


pub use crate::research::{
    Report,
    run,
};


pub use crate::errors::TreeError;
