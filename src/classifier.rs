//! The core library for the `Classifier` trait.
use crate::{Instance, Sample};


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the category index of `instance`.
    fn predict(&self, instance: &Instance) -> usize;


    /// Predicts the category indices of all instances in `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<usize> {
        sample.instances()
            .iter()
            .map(|instance| self.predict(instance))
            .collect::<Vec<_>>()
    }


    /// Returns the fraction of `instances` whose category index is
    /// predicted correctly. Returns `0.0` for an empty slice.
    ///
    /// Indices are compared directly, so `instances` must number
    /// their categories the same way as the training sample did.
    fn accuracy(&self, instances: &[Instance]) -> f64 {
        if instances.is_empty() { return 0f64; }

        let hits = instances.iter()
            .filter(|instance| self.predict(instance) == instance.category())
            .count();

        hits as f64 / instances.len() as f64
    }
}
