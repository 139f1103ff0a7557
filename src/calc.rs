use crate::store::{AttendanceRecord, ClassRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTally {
    pub present_count: usize,
    pub total_days: usize,
}

impl AttendanceTally {
    pub fn absent_count(&self) -> usize {
        self.total_days - self.present_count
    }
}

pub fn attendance_tally<'a, I>(records: I) -> AttendanceTally
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut tally = AttendanceTally::default();
    for rec in records {
        tally.total_days += 1;
        if rec.present {
            tally.present_count += 1;
        }
    }
    tally
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentTally {
    pub student_id: String,
    pub name: String,
    pub tally: AttendanceTally,
}

/// One tally per student, in student-id order.
pub fn class_tallies(class: &ClassRecord) -> Vec<StudentTally> {
    class
        .students
        .iter()
        .map(|(sid, s)| StudentTally {
            student_id: sid.clone(),
            name: s.name.clone(),
            tally: attendance_tally(s.days.values()),
        })
        .collect()
}

pub fn report_line(name: &str, tally: &AttendanceTally) -> String {
    format!(
        "{} حضر {} من {} أيام",
        name, tally.present_count, tally.total_days
    )
}

pub fn report_lines(tallies: &[StudentTally]) -> Vec<String> {
    tallies
        .iter()
        .map(|t| report_line(&t.name, &t.tally))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReport {
    pub tallies: Vec<StudentTally>,
    pub lines: Vec<String>,
}

impl ClassReport {
    /// Plain text handed to the analysis service.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn build_report(class: &ClassRecord) -> ClassReport {
    let tallies = class_tallies(class);
    let lines = report_lines(&tallies);
    ClassReport { tallies, lines }
}
