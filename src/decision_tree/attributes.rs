//! The set of attributes still available on a branch.
use fixedbitset::FixedBitSet;


/// Attributes that can still be tested below a node.
///
/// The set always spans the whole attribute index space,
/// so a consumed attribute is cleared rather than removed
/// and the indices of the remaining attributes never shift.
/// Each branch owns its own copy; see [`AvailableAttributes::without`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableAttributes {
    bits: FixedBitSet,
}


impl AvailableAttributes {
    /// Every one of the `n_attribute` attributes is available.
    pub fn all(n_attribute: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(n_attribute);
        bits.insert_range(..);
        Self { bits }
    }


    /// No attribute is available.
    pub fn none(n_attribute: usize) -> Self {
        Self { bits: FixedBitSet::with_capacity(n_attribute) }
    }


    /// Returns a copy of `self` with `attribute` consumed.
    #[must_use]
    pub fn without(&self, attribute: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.set(attribute, false);
        Self { bits }
    }


    /// Returns `true` if `attribute` has not been consumed on this branch.
    #[inline]
    pub fn is_available(&self, attribute: usize) -> bool {
        self.bits.contains(attribute)
    }


    /// Returns `true` if every attribute has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.count_ones(..) == 0
    }


    /// Number of available attributes.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }


    /// Length of the whole attribute index space.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }


    /// Iterates the available attribute indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}


impl FromIterator<usize> for AvailableAttributes {
    /// Collects attribute indices into an availability set
    /// just large enough to hold the largest index.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let bits = iter.into_iter().collect::<FixedBitSet>();
        Self { bits }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_keeps_indices_stable() {
        let all = AvailableAttributes::all(4);
        let rest = all.without(1);

        assert_eq!(all.count(), 4);
        assert_eq!(rest.count(), 3);
        assert_eq!(rest.len(), 4);
        assert!(!rest.is_available(1));
        assert!(rest.is_available(3));
        assert_eq!(rest.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn empty_after_consuming_everything() {
        let rest = AvailableAttributes::all(2).without(0).without(1);
        assert!(rest.is_empty());
        assert!(AvailableAttributes::none(3).is_empty());
        assert!(AvailableAttributes::all(0).is_empty());
    }

    #[test]
    fn collects_from_indices() {
        let set = [0, 3].into_iter().collect::<AvailableAttributes>();
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(set, AvailableAttributes::all(4).without(1).without(2));
    }
}
