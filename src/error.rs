use crate::model::StudentId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid scale {0}: a scale must be strictly positive")]
    InvalidScale(f64),

    #[error("cannot combine a mark of student {left} with a mark of student {right}")]
    UnsupportedComparison { left: StudentId, right: StudentId },

    #[error("cannot curve an empty set of marks")]
    EmptyDataset,

    #[error("at least one assessment is needed for a merge")]
    EmptyMergeSet,

    #[error("a result is already known for student {0}")]
    DuplicateAttendee(StudentId),
}

pub type Result<T> = std::result::Result<T, Error>;
