//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use std::fmt;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` tests one attribute and has two childrens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) attribute: usize,
    pub(super) name: String,
    pub(super) true_branch: Box<Node>,
    pub(super) false_branch: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        attribute: usize,
        name: String,
        true_branch: Box<Node>,
        false_branch: Box<Node>,
    ) -> Self
    {
        Self { attribute, name, true_branch, false_branch, }
    }


    /// Index of the tested attribute.
    #[inline]
    pub fn attribute(&self) -> usize {
        self.attribute
    }


    /// Name of the tested attribute.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// The child for instances whose attribute is `true`.
    #[inline]
    pub fn true_branch(&self) -> &Node {
        &self.true_branch
    }


    /// The child for instances whose attribute is `false`.
    #[inline]
    pub fn false_branch(&self) -> &Node {
        &self.false_branch
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) category: usize,
    pub(super) name: String,
    pub(super) probability: f64,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts `category`.
    #[inline]
    pub(crate) fn from_raw(
        category: usize,
        name: String,
        probability: f64,
    ) -> Self
    {
        Self { category, name, probability, }
    }


    /// Index of the predicted category.
    #[inline]
    pub fn category(&self) -> usize {
        self.category
    }


    /// Name of the predicted category.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Fraction of the training instances at this leaf
    /// that belong to the predicted category.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}


impl Node {
    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Routes `values` down to a leaf.
    /// `true` goes to the true branch, `false` to the false one,
    /// and the walk continues from the reached node.
    ///
    /// Returns `None` if a tested attribute index is out of range
    /// for `values`.
    pub fn route(&self, values: &[bool]) -> Option<&LeafNode> {
        let mut node = self;
        loop {
            match node {
                Node::Branch(branch) => {
                    node = if *values.get(branch.attribute)? {
                        &branch.true_branch
                    } else {
                        &branch.false_branch
                    };
                },
                Node::Leaf(leaf) => { return Some(leaf); },
            }
        }
    }


    /// Number of branch nodes on the longest root-to-leaf path.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => {
                1 + b.true_branch.depth().max(b.false_branch.depth())
            },
            Node::Leaf(_) => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.true_branch.leaves() + b.false_branch.leaves(),
            Node::Leaf(_) => 1,
        }
    }


    /// Writes the indented text rendering of this sub-tree.
    pub(super) fn write_text(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: usize,
    ) -> fmt::Result
    {
        let tabs = "\t".repeat(indent);
        match self {
            Node::Branch(b) => {
                writeln!(f, "{tabs}{} = True:", b.name)?;
                b.true_branch.write_text(f, indent + 1)?;
                writeln!(f, "{tabs}{} = False:", b.name)?;
                b.false_branch.write_text(f, indent + 1)
            },
            Node::Leaf(l) => {
                writeln!(f, "{tabs}Class {}, prob = {}", l.name, l.probability)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{name} ?\" ];\n",
                    name = b.name,
                );

                let true_id = id + 1;
                let (t_info, false_id) = b.true_branch.to_dot_info(true_id);
                let (mut f_info, ret_id) = b.false_branch.to_dot_info(false_id);

                let mut info = t_info;
                info.push(b_info);
                info.append(&mut f_info);

                let t_edge = format!(
                    "\tnode_{id} -- node_{true_id} [ label = \"True\" ];\n",
                );
                let f_edge = format!(
                    "\tnode_{id} -- node_{false_id} [ label = \"False\" ];\n",
                );

                info.push(t_edge);
                info.push(f_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{name} ({p:.3})\", \
                     shape = box, \
                     ];\n",
                    name = l.name,
                    p = l.probability,
                );

                (vec![info], id + 1)
            }
        }
    }
}
