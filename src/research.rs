//! This directory provides some features for research
//! Measure the followings of a fitted tree
//! - Running time
//! - Depth and number of leaves
//! - Training accuracy
//! - Test accuracy

/// Provides a function that fits a tree and summarizes it.
pub mod report;

pub use report::{
    Report,
    run,
};
