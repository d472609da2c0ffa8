use rranker::{Assessment, Group, Mark};
use tracing::warn;

/// Warn about loaded scores lying outside of `[0, scale]`.
pub fn check_scores_within_scale(title: &str, marks: &[Mark]) -> usize {
    let mut outliers = 0;
    for m in marks {
        if !(0.0..=m.scale()).contains(&m.score()) {
            warn!(
                "student {} has a score of {} out of {} in {}",
                m.student(),
                m.score(),
                m.scale(),
                title
            );
            outliers += 1;
        }
    }
    outliers
}

/// Warn about group members without a result.
pub fn check_group_attendance(a: &Assessment, group: &Group) -> usize {
    let absent = group.iter().filter(|&s| !a.has_attended(s)).count();
    if absent > 0 {
        warn!(
            "{} out of {} students of group {} have no result for {}",
            absent,
            group.len(),
            group.name,
            a.title()
        );
    }
    absent
}
