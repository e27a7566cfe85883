use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Discrete scale placing named categories at evenly spaced points.
///
/// `padding` is a fraction of one step reserved before the first and after the
/// last point. A reversed range (`start > end`) assigns the first category to
/// the end nearest `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    align: f64,
    positions: Vec<f64>,
    step: f64,
}

impl PointScale {
    pub fn new(range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "point scale range must be finite".to_owned(),
            ));
        }
        let mut scale = Self {
            domain: IndexSet::new(),
            range_start,
            range_end,
            padding: 0.0,
            align: 0.5,
            positions: Vec::new(),
            step: 0.0,
        };
        scale.rescale();
        Ok(scale)
    }

    pub fn with_padding(mut self, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "point scale padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.padding = padding;
        self.rescale();
        Ok(self)
    }

    /// Replaces the category domain. Repeated names keep their first position.
    #[must_use]
    pub fn with_domain<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain = names.into_iter().map(Into::into).collect();
        self.rescale();
        self
    }

    #[must_use]
    pub fn domain(&self) -> impl ExactSizeIterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between adjacent points.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Always zero: points have no width.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        0.0
    }

    /// Pixel position of `name`, or `None` for names outside the domain.
    #[must_use]
    pub fn map(&self, name: &str) -> Option<f64> {
        self.domain
            .get_index_of(name)
            .and_then(|index| self.positions.get(index).copied())
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let reverse = self.range_end < self.range_start;
        let (start, stop) = if reverse {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };

        // Points are a band scale with full inner padding.
        let padding_inner = 1.0;
        let padding_outer = self.padding;
        let step = (stop - start) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let first = start + (stop - start - step * (n - padding_inner)) * self.align;

        self.step = step;
        self.positions = (0..self.domain.len())
            .map(|index| first + step * index as f64)
            .collect();
        if reverse {
            self.positions.reverse();
        }
    }
}
