//! Rank students on graded assessments.
//!
//! Raw scores are loaded into [`Mark`]s, gathered in an [`Assessment`] at a
//! common scale, optionally curved, merged into composite assessments, then
//! ranked with a [`Ranking`] and summarized with [`Statistics`].

pub mod curves;
pub mod error;
pub mod model;
pub mod ranking;
pub mod report;
pub mod stats;

pub use crate::curves::Curve;
pub use crate::error::{Error, Result};
pub use crate::model::{Assessment, Group, Mark, StudentId};
pub use crate::ranking::{Rank, Ranking, RankingOptions, Scored, TiePolicy};
pub use crate::report::Report;
pub use crate::stats::{Statistics, histogram, statistics};
