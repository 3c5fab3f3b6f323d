use polars::prelude::*;
use log::info;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use crate::errors::{Result, TreeError};
use super::instance::Instance;


/// Struct `Sample` holds a batch of instances
/// together with the attribute and category names.
/// A `Sample` is read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) attributes: Vec<String>,
    pub(super) categories: Vec<String>,
    pub(super) instances: Vec<Instance>,
}


impl Sample {
    /// Construct a new [`Sample`] from its components.
    ///
    /// Returns `TreeError::InvalidInput` if
    /// - `categories` is empty,
    /// - an instance has a category index out of range, or
    /// - an instance has a value vector whose length differs from
    ///   `attributes.len()`.
    pub fn new(
        attributes: Vec<String>,
        categories: Vec<String>,
        instances: Vec<Instance>,
    ) -> Result<Self>
    {
        if categories.is_empty() {
            return Err(TreeError::InvalidInput(
                "a sample needs at least one category".into()
            ));
        }

        let n_attribute = attributes.len();
        let n_category = categories.len();
        for (k, instance) in instances.iter().enumerate() {
            if instance.len() != n_attribute {
                return Err(TreeError::InvalidInput(format!(
                    "instance {k} has {} values, expected {n_attribute}",
                    instance.len(),
                )));
            }
            if instance.category() >= n_category {
                return Err(TreeError::InvalidInput(format!(
                    "instance {k} has category index {}, \
                     but there are only {n_category} categories",
                    instance.category(),
                )));
            }
        }

        Ok(Self { attributes, categories, instances, })
    }


    /// Read a file in the plain text format to [`Sample`].
    ///
    /// The file has the following form:
    /// ```txt
    /// live die
    /// fever cough
    /// live true true
    /// die false true
    /// ```
    /// The first line lists the category names,
    /// the second one lists the attribute names, and
    /// each remaining line is a category name followed by
    /// one `true`/`false` per attribute.
    pub fn from_text<P>(file: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let file = file.as_ref();
        let sample = Self::from_text_reader(BufReader::new(File::open(file)?))?;
        info!(
            "read {} instances ({} attributes, {} categories) from {}",
            sample.instances.len(),
            sample.attributes.len(),
            sample.categories.len(),
            file.display(),
        );
        Ok(sample)
    }


    /// Same as [`Sample::from_text`], but reads from any buffered reader.
    pub fn from_text_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let categories = match lines.next() {
            Some((_, line)) => words(&line?),
            None => {
                return Err(TreeError::Parse {
                    line: 1,
                    message: "missing the line of category names".into(),
                });
            },
        };
        let attributes = match lines.next() {
            Some((_, line)) => words(&line?),
            None => {
                return Err(TreeError::Parse {
                    line: 2,
                    message: "missing the line of attribute names".into(),
                });
            },
        };

        let name_to_category = index_map(&categories);
        let n_attribute = attributes.len();

        let mut instances = Vec::new();
        for (number, line) in lines {
            let line = line?;
            let mut tokens = line.split_whitespace();

            // Blank lines are skipped.
            let Some(name) = tokens.next() else { continue; };

            let category = *name_to_category.get(name)
                .ok_or_else(|| TreeError::Parse {
                    line: number,
                    message: format!("unknown category `{name}`"),
                })?;

            let values = tokens.map(|token| {
                    parse_bool(token).ok_or_else(|| TreeError::Parse {
                        line: number,
                        message: format!("`{token}` is not a boolean"),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if values.len() != n_attribute {
                return Err(TreeError::Parse {
                    line: number,
                    message: format!(
                        "expected {n_attribute} values, got {}",
                        values.len()
                    ),
                });
            }

            instances.push(Instance::new(category, values));
        }

        Self::new(attributes, categories, instances)
    }


    /// Read a CSV format file to [`Sample`].
    /// The column named `target` holds the category names;
    /// every other column is a boolean attribute.
    /// If `has_header` is `false`,
    /// the columns are named `Attr. [1]`, `Attr. [2]`, ... .
    /// Categories are indexed in order of first appearance.
    pub fn from_csv<P, S>(file: P, has_header: bool, target: S)
        -> Result<Self>
        where P: AsRef<Path>,
              S: AsRef<str>,
    {
        let file = file.as_ref();
        let target = target.as_ref();
        let mut lines = BufReader::new(File::open(file)?)
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .peekable();

        let names = if has_header {
            match lines.next() {
                Some((_, line)) => {
                    line?.split(',')
                        .map(|name| name.trim().to_string())
                        .collect::<Vec<_>>()
                },
                None => {
                    return Err(TreeError::Parse {
                        line: 1,
                        message: "missing the header row".into(),
                    });
                },
            }
        } else {
            let n_column = match lines.peek() {
                Some((_, Ok(line))) => line.split(',').count(),
                _ => 0,
            };
            (1..=n_column).map(|k| format!("Attr. [{k}]"))
                .collect::<Vec<_>>()
        };

        let pos = names.iter()
            .position(|name| name == target)
            .ok_or_else(|| TreeError::InvalidInput(format!(
                "the target column `{target}` does not exist"
            )))?;

        let attributes = names.iter()
            .enumerate()
            .filter_map(|(i, name)| (i != pos).then(|| name.clone()))
            .collect::<Vec<_>>();

        let mut categories = Vec::new();
        let mut name_to_category = HashMap::new();
        let mut instances = Vec::new();
        for (number, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',').map(str::trim).collect::<Vec<_>>();
            if cells.len() != names.len() {
                return Err(TreeError::Parse {
                    line: number,
                    message: format!(
                        "expected {} columns, got {}",
                        names.len(),
                        cells.len()
                    ),
                });
            }

            let label = cells[pos];
            let category = *name_to_category.entry(label.to_string())
                .or_insert_with(|| {
                    categories.push(label.to_string());
                    categories.len() - 1
                });

            let values = cells.iter()
                .enumerate()
                .filter(|(i, _)| *i != pos)
                .map(|(_, cell)| {
                    parse_bool(cell).ok_or_else(|| TreeError::Parse {
                        line: number,
                        message: format!("`{cell}` is not a boolean"),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            instances.push(Instance::new(category, values));
        }

        let sample = Self::new(attributes, categories, instances)?;
        info!(
            "read {} instances ({} attributes, {} categories) from {}",
            sample.instances.len(),
            sample.attributes.len(),
            sample.categories.len(),
            file.display(),
        );
        Ok(sample)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Every column of `data` must be of dtype `bool`.
    /// The `target` is cast to strings;
    /// categories are indexed in order of first appearance.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, _) = data.shape();
        if target.len() != n_sample {
            return Err(TreeError::InvalidInput(format!(
                "the target has {} rows, but the data has {n_sample} rows",
                target.len(),
            )));
        }

        let target = target.cast(&DataType::Utf8)?;
        let mut categories = Vec::new();
        let mut name_to_category = HashMap::new();
        let labels = target.utf8()?
            .into_iter()
            .map(|label| -> Result<usize> {
                let label = label.ok_or_else(|| TreeError::InvalidInput(
                    "the target has a missing value".into()
                ))?;
                let category = *name_to_category.entry(label.to_string())
                    .or_insert_with(|| {
                        categories.push(label.to_string());
                        categories.len() - 1
                    });
                Ok(category)
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut attributes = Vec::new();
        let mut rows = vec![Vec::new(); n_sample];
        for series in data.get_columns() {
            let name = series.name().to_string();
            let column = series.bool()?;
            for (row, value) in rows.iter_mut().zip(column.into_iter()) {
                let value = value.ok_or_else(|| TreeError::InvalidInput(
                    format!("the column `{name}` has a missing value")
                ))?;
                row.push(value);
            }
            attributes.push(name);
        }

        let instances = labels.into_iter()
            .zip(rows)
            .map(|(category, values)| Instance::new(category, values))
            .collect::<Vec<_>>();

        Self::new(attributes, categories, instances)
    }


    /// Returns the attribute names.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the category names.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories[..]
    }


    /// Returns the instances.
    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Returns the pair of the number of instances and
    /// the number of attributes
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.attributes.len())
    }


    /// Returns the name of the `category`-th category.
    #[inline]
    pub fn category_name(&self, category: usize) -> Option<&str> {
        self.categories.get(category).map(String::as_str)
    }


    /// Returns the position of the attribute named `name`.
    pub fn attribute_index<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        let name = name.as_ref();
        self.attributes.iter().position(|attr| attr == name)
    }


    /// Returns the `idx`-th instance.
    #[inline]
    pub fn at(&self, idx: usize) -> &Instance {
        &self.instances[idx]
    }
}


impl Index<usize> for Sample {
    type Output = Instance;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.instances[idx]
    }
}


/// Parse a boolean token.
/// Accepts `true/false`, `t/f`, `yes/no`, and `1/0` in any case.
pub(crate) fn parse_bool(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "true"  | "t" | "yes" | "1" => Some(true),
        "false" | "f" | "no"  | "0" => Some(false),
        _ => None,
    }
}


fn words(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(str::to_string)
        .collect()
}


fn index_map(names: &[String]) -> HashMap<&str, usize> {
    names.iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect()
}
