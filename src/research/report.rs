use colored::Colorize;
use log::info;

use crate::{
    Sample,
    Criterion,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};
use crate::errors::Result;

use std::fmt;
use std::time::Instant;

const PREC_WIDTH: usize = 4;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Struct `Report` summarizes a fitted tree:
/// its shape, how long it took to grow, and its accuracy
/// on the training sample and (optionally) a test sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub(super) criterion: Criterion,
    pub(super) n_train: usize,
    pub(super) n_test: Option<usize>,
    pub(super) depth: usize,
    pub(super) leaves: usize,
    pub(super) train_accuracy: f64,
    pub(super) test_accuracy: Option<f64>,
    pub(super) time: u128,
}


impl Report {
    /// Accuracy on the training sample.
    #[inline]
    pub fn train_accuracy(&self) -> f64 {
        self.train_accuracy
    }


    /// Accuracy on the test sample, if one was given.
    #[inline]
    pub fn test_accuracy(&self) -> Option<f64> {
        self.test_accuracy
    }


    /// Depth of the fitted tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }


    /// Number of leaves of the fitted tree.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.leaves
    }


    /// Print the report with colors to the standard output.
    pub fn print(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!("\n{header}");
        for (key, val) in self.rows() {
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                val.bold().green(),
            );
        }
        println!("{:=^FULL_WIDTH$}", "".bold());
    }


    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Criterion", format!("{}", self.criterion)),
            ("Train size", format!("{}", self.n_train)),
            ("Depth", format!("{}", self.depth)),
            ("Leaves", format!("{}", self.leaves)),
            ("Time", time_format(self.time).trim().to_string()),
            ("Train accuracy", format!("{:.PREC_WIDTH$}", self.train_accuracy)),
        ];
        if let (Some(n_test), Some(acc)) = (self.n_test, self.test_accuracy) {
            rows.push(("Test size", format!("{n_test}")));
            rows.push(("Test accuracy", format!("{acc:.PREC_WIDTH$}")));
        }
        rows
    }
}


impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, val) in self.rows() {
            writeln!(f, "{key}: {val}")?;
        }
        Ok(())
    }
}


/// Grow a tree on `train` with `criterion`,
/// then evaluate it on `train` and, if given, on `test`.
pub fn run(train: &Sample, test: Option<&Sample>, criterion: Criterion)
    -> Result<(DecisionTreeClassifier, Report)>
{
    let now = Instant::now();
    let tree = DecisionTreeBuilder::new(train)
        .criterion(criterion)
        .build()
        .fit()?;
    let time = now.elapsed().as_millis();

    let train_accuracy = tree.evaluate_sample(train);
    let test_accuracy = test.map(|test| tree.evaluate_sample(test));
    info!("train accuracy {train_accuracy:.4}, test accuracy {test_accuracy:?}");

    let report = Report {
        criterion,
        n_train: train.shape().0,
        n_test: test.map(|test| test.shape().0),
        depth: tree.depth(),
        leaves: tree.leaves(),
        train_accuracy,
        test_accuracy,
        time,
    };
    Ok((tree, report))
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
