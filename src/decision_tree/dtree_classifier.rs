//! Defines the decision tree classifier.
use crate::{Classifier, Instance, Sample};
use crate::errors::{Result, TreeError};

use super::node::*;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};


/// Decision tree classifier.
/// This struct is a wrapper of the root `Node`
/// together with the category names it predicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    categories: Vec<String>,
}


impl DecisionTreeClassifier {
    /// Construct a new instance of [`DecisionTreeClassifier`].
    #[inline]
    pub(crate) fn new(root: Node, categories: Vec<String>) -> Self {
        Self { root, categories }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the category names.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories[..]
    }


    /// Returns the leaf `instance` falls into.
    ///
    /// Returns `TreeError::InvalidInput` if `instance` has no value for
    /// an attribute tested on its path.
    pub fn try_classify(&self, instance: &Instance) -> Result<&LeafNode> {
        self.root.route(instance.values())
            .ok_or_else(|| TreeError::InvalidInput(format!(
                "the instance has {} values, \
                 but the tree tests an attribute beyond them",
                instance.len(),
            )))
    }


    /// Predicts the category index of `instance`.
    ///
    /// # Panics
    /// Panics if `instance` is shorter than the attributes the tree tests.
    pub fn classify(&self, instance: &Instance) -> usize {
        match self.try_classify(instance) {
            Ok(leaf) => leaf.category(),
            Err(err) => panic!("{err}"),
        }
    }


    /// Predicts the category name of `instance`.
    ///
    /// # Panics
    /// Panics if `instance` is shorter than the attributes the tree tests.
    pub fn classify_name(&self, instance: &Instance) -> &str {
        match self.try_classify(instance) {
            Ok(leaf) => leaf.name(),
            Err(err) => panic!("{err}"),
        }
    }


    /// Returns the fraction of `instances` whose predicted category name
    /// equals their own category name.
    /// The category indices of `instances` are read against
    /// the category list the tree was trained on;
    /// use [`DecisionTreeClassifier::evaluate_sample`]
    /// for a sample that carries its own list.
    /// Returns `0.0` for an empty slice.
    pub fn evaluate(&self, instances: &[Instance]) -> f64 {
        self.evaluate_named(instances, &self.categories[..])
    }


    /// Same as [`DecisionTreeClassifier::evaluate`] over a whole sample,
    /// but reads the true category names from `sample.categories()`.
    /// The sample may list its categories in any order.
    #[inline]
    pub fn evaluate_sample(&self, sample: &Sample) -> f64 {
        self.evaluate_named(sample.instances(), sample.categories())
    }


    fn evaluate_named(&self, instances: &[Instance], categories: &[String])
        -> f64
    {
        if instances.is_empty() { return 0f64; }

        let hits = instances.iter()
            .filter(|instance| {
                let truth = categories.get(instance.category())
                    .map(String::as_str);
                truth == Some(self.classify_name(instance))
            })
            .count();

        hits as f64 / instances.len() as f64
    }


    /// Number of branch nodes on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Write the text rendering of the tree to `path`.
    pub fn to_text_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        write!(f, "{self}")?;
        f.flush()?;
        Ok(())
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()?;

        Ok(())
    }


    /// Save the tree as JSON.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let f = BufWriter::new(File::create(path)?);
        serde_json::to_writer(f, self)?;
        Ok(())
    }


    /// Load a tree saved by [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let f = BufReader::new(File::open(path)?);
        let tree = serde_json::from_reader(f)?;
        Ok(tree)
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, instance: &Instance) -> usize {
        self.classify(instance)
    }
}


impl fmt::Display for DecisionTreeClassifier {
    /// Each branch node emits `<attribute> = True:` and
    /// `<attribute> = False:` followed by the matching child one tab deeper;
    /// each leaf emits `Class <category>, prob = <probability>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_text(f, 0)
    }
}
