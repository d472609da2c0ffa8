use crate::model::{Assessment, Group, Mark, StudentId};
use crate::ranking::{Ranking, RankingOptions};
use crate::stats::{Statistics, histogram};
use serde::Serialize;
use tracing::debug;

pub const GENERAL_SECTION: &str = "General";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankEntry {
    pub student: StudentId,
    pub score: f64,
    pub position: f64,
}

/// Analysis of the marks of a set of students.
#[derive(Clone, Debug, Serialize)]
pub struct Section {
    pub group: String,
    pub statistics: Statistics,
    pub histogram: Vec<usize>,
    pub ranking: Vec<RankEntry>,
}

/// Results of an assessment, for all attendees then for each group.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub title: String,
    pub scale: f64,
    pub precision: u32,
    pub sections: Vec<Section>,
}

impl Section {
    fn build(group: &str, marks: &[&Mark], scale: f64, options: RankingOptions) -> Self {
        let values = marks.iter().map(|m| m.value()).collect::<Vec<_>>();
        let ranking = Ranking::new(marks.iter().copied(), |m: &&Mark| m.value(), options)
            .into_iter()
            .map(|rank| RankEntry {
                student: rank.item.student(),
                score: rank.score,
                position: rank.position,
            })
            .collect();
        Self {
            group: group.to_owned(),
            statistics: Statistics::from_values(&values),
            histogram: histogram(&values, scale),
            ranking,
        }
    }
}

impl Report {
    pub fn build(assessment: &Assessment, groups: &[Group], options: RankingOptions) -> Self {
        let all = assessment.results().iter().collect::<Vec<_>>();
        let mut sections = vec![Section::build(
            GENERAL_SECTION,
            &all,
            assessment.scale(),
            options,
        )];
        for group in groups {
            let marks = assessment.get_results(group);
            debug!(
                group = %group.name,
                members = group.len(),
                marks = marks.len(),
                "building section"
            );
            sections.push(Section::build(
                &group.name,
                &marks,
                assessment.scale(),
                options,
            ));
        }
        Self {
            title: assessment.title().to_owned(),
            scale: assessment.scale(),
            precision: assessment.precision(),
            sections,
        }
    }

    /// Format a value with the assessment precision.
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision as usize, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::TiePolicy;

    fn sample() -> Assessment {
        let mut a = Assessment::new("Anatomy", 20.0, 2).unwrap();
        a.add_results(
            [(1, 12.0), (2, 18.0), (3, 12.0), (4, 5.0)]
                .into_iter()
                .map(|(s, score)| Mark::new(StudentId(s), score, 20.0).unwrap())
                .collect(),
        )
        .unwrap();
        a
    }

    #[test]
    fn test_general_section() {
        let report = Report::build(&sample(), &[], RankingOptions::default());
        assert_eq!(report.title, "Anatomy");
        assert_eq!(report.sections.len(), 1);
        let general = &report.sections[0];
        assert_eq!(general.group, GENERAL_SECTION);
        assert_eq!(general.statistics.size, 4);
        assert_eq!(general.statistics.median, 12.0);
        assert_eq!(general.histogram.len(), 20);
        assert_eq!(general.histogram.iter().sum::<usize>(), 4);
        assert_eq!(
            general.ranking,
            vec![
                RankEntry {
                    student: StudentId(2),
                    score: 18.0,
                    position: 1.0,
                },
                RankEntry {
                    student: StudentId(1),
                    score: 12.0,
                    position: 2.0,
                },
                RankEntry {
                    student: StudentId(3),
                    score: 12.0,
                    position: 2.0,
                },
                RankEntry {
                    student: StudentId(4),
                    score: 5.0,
                    position: 4.0,
                },
            ]
        );
    }

    #[test]
    fn test_group_sections() {
        let groups = [
            Group::new("A", [StudentId(1), StudentId(4)]),
            Group::new("Nobody", [StudentId(99)]),
        ];
        let options = RankingOptions {
            policy: TiePolicy::Sequential,
            ..RankingOptions::default()
        };
        let report = Report::build(&sample(), &groups, options);
        assert_eq!(report.sections.len(), 3);
        let a = &report.sections[1];
        assert_eq!(a.group, "A");
        assert_eq!(
            a.ranking.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1.0, 2.0]
        );
        let nobody = &report.sections[2];
        assert!(nobody.ranking.is_empty());
        assert_eq!(nobody.statistics, Statistics::default());
    }

    #[test]
    fn test_huge_scale() {
        let mut a = Assessment::new("Big", 1e300, 2).unwrap();
        a.add_result(Mark::new(StudentId(1), 12.0, 1e300).unwrap())
            .unwrap();
        let report = Report::build(&a, &[], RankingOptions::default());
        let general = &report.sections[0];
        assert_eq!(general.histogram.len(), crate::stats::MAX_BINS);
        assert_eq!(general.histogram[0], 1);
        assert_eq!(general.ranking.len(), 1);
    }

    #[test]
    fn test_format_value() {
        let report = Report::build(&sample(), &[], RankingOptions::default());
        assert_eq!(report.format_value(12.3456), "12.35");
        assert_eq!(report.format_value(5.0), "5.00");
    }

    #[test]
    fn test_serialize() {
        let report = Report::build(&sample(), &[], RankingOptions::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sections"][0]["ranking"][0]["student"], 2);
        assert_eq!(json["sections"][0]["statistics"]["size"], 4);
    }
}
