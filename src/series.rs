// Ordered numeric series with window extraction
use crate::model::AnalysisError;

/// Immutable, time-ordered sequence of observations (index 0 is the oldest).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesBuffer {
    values: Vec<f64>,
}

impl SeriesBuffer {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// All contiguous windows of `size` values, oldest first.
    pub fn window(&self, size: usize) -> Result<std::slice::Windows<'_, f64>, AnalysisError> {
        self.require(size)?;
        Ok(self.values.windows(size))
    }

    /// The newest `n` values.
    pub fn tail(&self, n: usize) -> Result<&[f64], AnalysisError> {
        self.require(n)?;
        Ok(&self.values[self.values.len() - n..])
    }

    pub fn last(&self) -> Result<f64, AnalysisError> {
        self.values.last().copied().ok_or(AnalysisError::EmptyInput)
    }

    /// Fails unless at least `size` values are available.
    pub(crate) fn require(&self, size: usize) -> Result<(), AnalysisError> {
        if size == 0 {
            return Err(AnalysisError::InvalidParameter(
                "window size must be at least 1".into(),
            ));
        }
        if size > self.values.len() {
            return Err(AnalysisError::InsufficientData {
                required: size,
                available: self.values.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for SeriesBuffer {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for SeriesBuffer {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}
