//! Defines a single labeled example.
use serde::{Serialize, Deserialize};

use std::ops::Index;


/// An example with a category index and
/// one boolean value per attribute.
/// The `i`-th value belongs to the `i`-th attribute of the owning
/// [`Sample`](crate::Sample).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    category: usize,
    values: Vec<bool>,
}


impl Instance {
    /// Construct a new instance of [`Instance`].
    /// No validation is performed here;
    /// [`Sample::new`](crate::Sample::new) checks the shape.
    #[inline]
    pub fn new<T>(category: usize, values: T) -> Self
        where T: Into<Vec<bool>>
    {
        let values = values.into();
        Self { category, values, }
    }


    /// Returns the category index of this instance.
    #[inline]
    pub fn category(&self) -> usize {
        self.category
    }


    /// Returns the value of the `attribute`-th attribute.
    /// Returns `None` if the index is out of range.
    #[inline]
    pub fn value(&self, attribute: usize) -> Option<bool> {
        self.values.get(attribute).copied()
    }


    /// Returns the attribute values.
    #[inline]
    pub fn values(&self) -> &[bool] {
        &self.values[..]
    }


    /// Returns the number of attribute values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this instance has no attribute value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl Index<usize> for Instance {
    type Output = bool;

    fn index(&self, attribute: usize) -> &Self::Output {
        &self.values[attribute]
    }
}
