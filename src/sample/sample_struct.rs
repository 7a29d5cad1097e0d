use polars::prelude::*;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::common::checker;


/// Struct `Sample` holds a batch sample in the dense, row-major format.
/// The `i`-th row of the feature matrix is paired with
/// the `i`-th entry of the target vector.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) names: Vec<String>,
    pub(super) rows: Vec<Vec<f64>>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from the rows of a feature matrix `x`
    /// and the target vector `y`.
    ///
    /// Returns [`Error::DimensionMismatch`] if
    /// `y.len() != x.len()` or the rows of `x` have different lengths.
    pub fn from_rows(x: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        let n_sample = x.len();
        if y.len() != n_sample {
            return Err(Error::dimension("rows of X vs. len(y)", n_sample, y.len()));
        }

        let n_feature = x.first().map(|row| row.len()).unwrap_or(0);
        checker::check_rows(&x, n_feature)?;

        let names = default_names(n_feature);
        let sample = Self {
            names, rows: x, target: y, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column must be numeric and is cast to `f64`.
    /// Non-numeric columns and null values are rejected.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let (n_sample, n_feature) = data.shape();
        if target.len() != n_sample {
            return Err(Error::dimension(
                "rows of DataFrame vs. len(target)", n_sample, target.len()
            ));
        }

        let target = series_to_vec(&target)?;

        let names = data.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();

        let columns = data.get_columns()
            .par_iter()
            .map(series_to_vec)
            .collect::<Result<Vec<_>>>()?;

        // Transpose the columns into rows.
        let rows = (0..n_sample).into_par_iter()
            .map(|i| columns.iter().map(|col| col[i]).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let sample = Self {
            names, rows, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the feature matrix as a slice of rows.
    #[inline(always)]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows[..]
    }


    /// Returns the target vector.
    #[inline(always)]
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the feature (column) names.
    /// Samples built by [`Sample::from_rows`] get the names
    /// `Feat. [1]`, `Feat. [2]`, ...
    #[inline(always)]
    pub fn feature_names(&self) -> &[String] {
        &self.names[..]
    }


    /// Set the feature (column) names.
    /// Returns the old names.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();
        if names.len() != self.n_feature {
            return Err(Error::dimension(
                "number of names vs. number of features",
                self.n_feature,
                names.len(),
            ));
        }

        let names = names.iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        Ok(std::mem::replace(&mut self.names, names))
    }


    /// Returns the `idx`-th instance `(x, y)`.
    #[inline(always)]
    pub fn at(&self, idx: usize) -> (&[f64], f64) {
        (&self.rows[idx][..], self.target[idx])
    }


    /// Returns an iterator over the pairs `(x, y)` in the row order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        self.rows.iter()
            .map(|row| &row[..])
            .zip(self.target.iter().copied())
    }


    /// Check whether `self` is
    /// a training set for binary classification with `{0, 1}` labels.
    pub fn is_valid_binary_instance(&self) -> Result<()> {
        checker::check_sample(self)?;

        match self.target.iter().find(|&&y| y != 0.0 && y != 1.0) {
            Some(&y) => Err(Error::InvalidLabel(y)),
            None => Ok(()),
        }
    }
}


fn default_names(n_feature: usize) -> Vec<String> {
    (1..=n_feature).map(|i| format!("Feat. [{i}]"))
        .collect()
}


fn series_to_vec(series: &Series) -> Result<Vec<f64>> {
    let name = series.name().to_string();
    let dtype = series.dtype();
    if !dtype.is_numeric() {
        return Err(Error::InvalidData(
            format!("column `{name}` is not numeric (found {dtype})")
        ));
    }
    let values = series.cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            Error::InvalidData(format!("column `{name}` has a null value"))
        })?;
    Ok(values)
}
