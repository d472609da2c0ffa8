use super::StudentId;
use crate::error::{Error, Result};
use crate::ranking::Scored;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Performance of a student to an assessment.
///
/// A mark is composed of a `score`, the raw performance, and a `scale`, the
/// maximal performance achievable. Bonus points given by curving are kept
/// apart from the score so that the raw performance can always be recovered.
///
/// Marks compare by [`value`](Mark::value) only: two marks of different
/// students with the same value are equal.
#[derive(Clone, Debug)]
pub struct Mark {
    student: StudentId,
    score: f64,
    bonus: f64,
    scale: f64,
}

fn check_scale(scale: f64) -> Result<f64> {
    if scale > 0.0 && scale.is_finite() {
        Ok(scale)
    } else {
        Err(Error::InvalidScale(scale))
    }
}

impl Mark {
    pub fn new(student: StudentId, score: f64, scale: f64) -> Result<Self> {
        Self::with_bonus(student, score, scale, 0.0)
    }

    pub fn with_bonus(student: StudentId, score: f64, scale: f64, bonus: f64) -> Result<Self> {
        Ok(Self {
            student,
            score,
            bonus,
            scale: check_scale(scale)?,
        })
    }

    pub fn student(&self) -> StudentId {
        self.student
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The processed mark, including bonus points.
    pub fn value(&self) -> f64 {
        self.score + self.bonus
    }

    /// Change the scale of the mark, keeping score and bonus proportional.
    pub fn rescale(&mut self, scale: f64) -> Result<()> {
        let scale = check_scale(scale)?;
        let ratio = scale / self.scale;
        self.score *= ratio;
        self.bonus *= ratio;
        self.scale = scale;
        Ok(())
    }

    /// Sum two marks of the same student. Scores, bonuses and scales are
    /// added separately.
    pub fn merge(&self, other: &Mark) -> Result<Mark> {
        if self.student != other.student {
            return Err(Error::UnsupportedComparison {
                left: self.student,
                right: other.student,
            });
        }
        Ok(Mark {
            student: self.student,
            score: self.score + other.score,
            bonus: self.bonus + other.bonus,
            scale: self.scale + other.scale,
        })
    }

    /// Like [`merge`](Mark::merge), with `None` acting as the neutral element.
    pub fn merge_with(&self, other: Option<&Mark>) -> Result<Mark> {
        match other {
            Some(other) => self.merge(other),
            None => Ok(self.clone()),
        }
    }

    /// Sum all the marks, which must belong to the same student. Returns
    /// `None` when there is nothing to sum.
    pub fn total<'a, I>(marks: I) -> Result<Option<Mark>>
    where
        I: IntoIterator<Item = &'a Mark>,
    {
        marks.into_iter().try_fold(None, |acc: Option<Mark>, mark| {
            mark.merge_with(acc.as_ref()).map(Some)
        })
    }

    /// Move the value of the mark to `target` by adjusting its bonus, without
    /// ever exceeding the scale.
    pub(crate) fn adjust_to(&mut self, target: f64) {
        if target > self.scale {
            self.bonus = self.scale - self.score;
        } else {
            self.bonus += target - self.value();
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value(), self.scale)
    }
}

impl PartialEq for Mark {
    fn eq(&self, other: &Mark) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for Mark {
    fn partial_cmp(&self, other: &Mark) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl Add for &Mark {
    type Output = Result<Mark>;

    fn add(self, other: Self) -> Result<Mark> {
        self.merge(other)
    }
}

impl Scored for Mark {
    fn rank_score(&self) -> f64 {
        self.value()
    }
}
