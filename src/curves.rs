use crate::error::{Error, Result};
use crate::model::Mark;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transformation of marks through their bonus.
///
/// A curve computes a new value for every mark and moves the mark to that
/// value by changing its bonus only. A curved mark never exceeds its scale.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// `slope * value + intercept`.
    Linear {
        slope: f64,
        #[serde(default)]
        intercept: f64,
    },
    /// Stretch the marks so that the best one reaches the scale.
    TopLinear,
}

impl Curve {
    /// Curve `marks` in place. With [`Curve::TopLinear`], the best mark is
    /// stretched to its scale and every other mark to the same fraction of
    /// its own scale.
    pub fn apply(&self, marks: &mut [Mark]) -> Result<()> {
        if marks.is_empty() {
            return Err(Error::EmptyDataset);
        }
        match *self {
            Curve::Linear { slope, intercept } => {
                debug!(curve = ?self, marks = marks.len(), "applying curve");
                for mark in marks.iter_mut() {
                    mark.adjust_to(slope * mark.value() + intercept);
                }
            }
            Curve::TopLinear => {
                let maximum = marks
                    .iter()
                    .map(Mark::value)
                    .fold(f64::NEG_INFINITY, f64::max);
                if maximum <= 0.0 {
                    debug!(maximum, "no positive mark, top linear curve left marks alone");
                    return Ok(());
                }
                debug!(curve = ?self, maximum, marks = marks.len(), "applying curve");
                for mark in marks.iter_mut() {
                    mark.adjust_to(mark.scale() / maximum * mark.value());
                }
            }
        }
        Ok(())
    }
}
