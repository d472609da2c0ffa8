use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named set of students, used to restrict results to a subgroup.
#[derive(Clone, Debug, Default)]
pub struct Group {
    pub name: String,
    students: BTreeSet<StudentId>,
}

impl Group {
    pub fn new(name: impl Into<String>, students: impl IntoIterator<Item = StudentId>) -> Self {
        Self {
            name: name.into(),
            students: students.into_iter().collect(),
        }
    }

    pub fn contains(&self, student: StudentId) -> bool {
        self.students.contains(&student)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.students.iter().copied()
    }
}

impl FromIterator<StudentId> for Group {
    fn from_iter<I: IntoIterator<Item = StudentId>>(iter: I) -> Self {
        Self::new(String::new(), iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_membership() {
        let group = Group::new("A", [StudentId(3), StudentId(1), StudentId(3)]);
        assert_eq!(group.len(), 2);
        assert!(group.contains(StudentId(1)));
        assert!(!group.contains(StudentId(2)));
        assert_eq!(group.iter().collect::<Vec<_>>(), vec![StudentId(1), StudentId(3)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(StudentId(42).to_string(), "#42");
    }
}
