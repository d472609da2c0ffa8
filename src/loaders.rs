use eyre::{Result, WrapErr, eyre};
use rranker::{Group, Mark, StudentId};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn parse_student(field: &str) -> Result<StudentId> {
    Ok(StudentId(field.parse::<u64>().wrap_err_with(|| {
        format!("invalid student identifier {field:?}")
    })?))
}

/// Read `(student, score)` rows. The first row is a header when neither its
/// student nor its score is numeric. Columns after the score are ignored, and
/// rows without a score are dropped.
pub fn read_results<R: Read>(input: R, scale: f64) -> Result<Vec<Mark>> {
    let mut marks = Vec::new();
    for (line, record) in reader(input).records().enumerate() {
        let record = record?;
        let student = record.get(0).unwrap_or_default();
        let score = record.get(1).unwrap_or_default();
        if line == 0 && student.parse::<u64>().is_err() && score.parse::<f64>().is_err() {
            trace!(?record, "skipping header");
            continue;
        }
        let student = parse_student(student).wrap_err_with(|| format!("line {}", line + 1))?;
        if score.is_empty() {
            trace!(%student, "no score, skipping");
            continue;
        }
        let score = score
            .parse::<f64>()
            .wrap_err_with(|| format!("line {}: invalid score {score:?}", line + 1))?;
        marks.push(Mark::new(student, score, scale)?);
    }
    Ok(marks)
}

/// Read a list of student identifiers, one per row.
pub fn read_group<R: Read>(input: R, name: &str) -> Result<Group> {
    let mut students = Vec::new();
    for (line, record) in reader(input).records().enumerate() {
        let record = record?;
        let field = record
            .get(0)
            .ok_or_else(|| eyre!("line {}: empty record", line + 1))?;
        match parse_student(field) {
            Ok(student) => students.push(student),
            Err(_) if line == 0 => trace!(?record, "skipping header"),
            Err(e) => return Err(e.wrap_err(format!("line {}", line + 1))),
        }
    }
    Ok(Group::new(name, students))
}

pub fn load_results(path: &Path, scale: f64) -> Result<Vec<Mark>> {
    let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
    let marks = read_results(file, scale)
        .wrap_err_with(|| format!("cannot load results from {}", path.display()))?;
    debug!(path = %path.display(), marks = marks.len(), "results loaded");
    Ok(marks)
}

pub fn load_group(path: &Path, name: &str) -> Result<Group> {
    let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
    let group = read_group(file, name)
        .wrap_err_with(|| format!("cannot load group from {}", path.display()))?;
    debug!(group = name, members = group.len(), "group loaded");
    Ok(group)
}
