use super::{Group, Mark, StudentId};
use crate::curves::Curve;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Add;
use tracing::{debug, trace};

pub const DEFAULT_PRECISION: u32 = 3;

/// Evaluation of students knowledge.
///
/// An assessment owns at most one mark per student, and all its marks share
/// the assessment scale. The precision is the number of decimals to use when
/// displaying marks; stored values are never rounded.
#[derive(Clone, Debug)]
pub struct Assessment {
    title: String,
    scale: f64,
    precision: u32,
    results: Vec<Mark>,
}

impl Assessment {
    pub fn new(title: impl Into<String>, scale: f64, precision: u32) -> Result<Self> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(Error::InvalidScale(scale));
        }
        Ok(Self {
            title: title.into(),
            scale,
            precision,
            results: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn results(&self) -> &[Mark] {
        &self.results
    }

    /// Students that have taken the assessment.
    pub fn attendees(&self) -> BTreeSet<StudentId> {
        self.results.iter().map(Mark::student).collect()
    }

    pub fn has_attended(&self, student: StudentId) -> bool {
        self.results.iter().any(|m| m.student() == student)
    }

    /// Marks of the students belonging to `group`.
    pub fn get_results(&self, group: &Group) -> Vec<&Mark> {
        self.results
            .iter()
            .filter(|m| group.contains(m.student()))
            .collect()
    }

    /// Add a result, rescaling it to the assessment scale if needed.
    pub fn add_result(&mut self, mark: Mark) -> Result<()> {
        self.add_results(vec![mark])
    }

    /// Add a collection of results, rescaling them to the assessment scale if
    /// needed. Either all marks are added or none is.
    pub fn add_results(&mut self, marks: Vec<Mark>) -> Result<()> {
        let mut attendees = self.attendees();
        for mark in &marks {
            if !attendees.insert(mark.student()) {
                return Err(Error::DuplicateAttendee(mark.student()));
            }
        }
        let count = marks.len();
        for mut mark in marks {
            if mark.scale() != self.scale {
                mark.rescale(self.scale)?;
            }
            self.results.push(mark);
        }
        trace!(assessment = %self.title, count, "results added");
        Ok(())
    }

    /// Change the assessment scale and recompute every mark accordingly.
    pub fn rescale(&mut self, scale: f64) -> Result<()> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(Error::InvalidScale(scale));
        }
        for mark in &mut self.results {
            mark.rescale(scale)?;
        }
        self.scale = scale;
        Ok(())
    }

    pub fn curve(&mut self, curve: &Curve) -> Result<()> {
        curve.apply(&mut self.results)
    }

    /// Merge assessments into a new one named `title`.
    ///
    /// The scale of the new assessment is the sum of the scales, and its
    /// precision the lowest one. Only students having a mark in every
    /// assessment get a result, which is the sum of their marks. Merged
    /// assessments are left untouched.
    pub fn merge(title: impl Into<String>, assessments: &[&Assessment]) -> Result<Assessment> {
        let Some(precision) = assessments.iter().map(|a| a.precision).min() else {
            return Err(Error::EmptyMergeSet);
        };
        let scale: f64 = assessments.iter().map(|a| a.scale).sum();
        let mut by_student: BTreeMap<StudentId, Vec<&Mark>> = BTreeMap::new();
        for assessment in assessments {
            for mark in &assessment.results {
                by_student.entry(mark.student()).or_default().push(mark);
            }
        }
        let mut merged = Assessment::new(title, scale, precision)?;
        let total = by_student.len();
        let results = by_student
            .into_values()
            .filter(|marks| marks.len() == assessments.len())
            .filter_map(|marks| Mark::total(marks).transpose())
            .collect::<Result<Vec<_>>>()?;
        debug!(
            assessment = %merged.title,
            sources = assessments.len(),
            kept = results.len(),
            dropped = total - results.len(),
            "assessments merged"
        );
        merged.add_results(results)?;
        Ok(merged)
    }
}

impl Add for &Assessment {
    type Output = Result<Assessment>;

    fn add(self, other: Self) -> Result<Assessment> {
        Assessment::merge(format!("{} & {}", self.title, other.title), &[self, other])
    }
}
