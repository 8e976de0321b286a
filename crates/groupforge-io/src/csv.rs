//! Plain comma-separated import and export.

use std::fmt::Write;

use groupforge_core::{ConstraintKind, GroupingProblem, Person, PersonId};
use groupforge_solver::Assignment;
use tracing::debug;

use crate::error::IoError;

/// Matrix cell for a must-pair constraint.
const MUST_PAIR_CELL: &str = "100";
/// Matrix cell for a cannot-pair constraint.
const CANNOT_PAIR_CELL: &str = "-1";
/// Matrix cell for an unrated pair and the diagonal.
const UNSET_CELL: &str = "N/A";

/// Parses a `Name,Description` list into people.
///
/// The first line is a header and is skipped. Each later line is split on
/// commas; fields are trimmed and stripped of `"` characters. Rows with a
/// blank name are skipped. The person on line `i` (header is line 0) gets
/// the id `person-<i>`.
///
/// # Errors
///
/// Returns [`IoError::MissingHeader`] for blank input.
///
/// # Examples
///
/// ```
/// use groupforge_io::parse_people_csv;
///
/// let people = parse_people_csv("Name,Description\nAda,\"backend\"\n,\nBob\n").unwrap();
/// assert_eq!(people.len(), 2);
/// assert_eq!(people[0].description.as_deref(), Some("backend"));
/// assert_eq!(people[1].id.as_str(), "person-3");
/// ```
pub fn parse_people_csv(text: &str) -> Result<Vec<Person>, IoError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(IoError::MissingHeader);
    }

    let mut people = Vec::new();
    for (line_number, line) in text.lines().enumerate().skip(1) {
        let mut fields = line.split(',').map(|field| field.trim().replace('"', ""));
        let name = fields.next().unwrap_or_default();
        if name.is_empty() {
            debug!(event = "row_skipped", line = line_number);
            continue;
        }

        let person = Person::new(PersonId::new(format!("person-{line_number}")), name);
        people.push(match fields.next() {
            Some(description) => person.with_description(description),
            None => person,
        });
    }
    Ok(people)
}

/// Writes one `Group <n>,<name>` row per member under a `Group,Person` header.
///
/// Groups are numbered from 1 in assignment order.
pub fn write_assignment_csv(assignment: &Assignment) -> String {
    let mut out = String::from("Group,Person\n");
    for (n, group) in assignment.groups().iter().enumerate() {
        for member in &group.members {
            let _ = writeln!(out, "Group {},{}", n + 1, escape(&member.name));
        }
    }
    out
}

/// Writes the full pairwise matrix of a problem.
///
/// Cells hold the rating, `100` for must-pair, `-1` for cannot-pair and
/// `N/A` for unrated pairs and the diagonal.
pub fn write_rating_matrix_csv(problem: &GroupingProblem) -> String {
    let mut out = String::from("Person");
    for person in problem.people() {
        out.push(',');
        out.push_str(&escape(&person.name));
    }
    out.push('\n');

    for row in problem.people() {
        out.push_str(&escape(&row.name));
        for column in problem.people() {
            out.push(',');
            out.push_str(&matrix_cell(problem, row, column));
        }
        out.push('\n');
    }
    out
}

fn matrix_cell(problem: &GroupingProblem, row: &Person, column: &Person) -> String {
    if row.id == column.id {
        return UNSET_CELL.to_string();
    }
    if let Some(constraint) = problem.constraint(&row.id, &column.id) {
        return match constraint.kind {
            ConstraintKind::MustPair => MUST_PAIR_CELL.to_string(),
            ConstraintKind::CannotPair => CANNOT_PAIR_CELL.to_string(),
        };
    }
    problem
        .rating(&row.id, &column.id)
        .map_or_else(|| UNSET_CELL.to_string(), |rating| rating.to_string())
}

// Quotes a field holding a separator, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupforge_core::{Group, GroupId, RatingScale};
    use groupforge_test::{id, people, rated_problem};

    #[test]
    fn test_parse_skips_header_and_blank_names() {
        let text = "Name,Description\n  Ada , Backend \n\"\",ignored\nBob\n";
        let parsed = parse_people_csv(text).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Ada");
        assert_eq!(parsed[0].id.as_str(), "person-1");
        assert_eq!(parsed[0].description.as_deref(), Some("Backend"));
        assert_eq!(parsed[1].name, "Bob");
        assert_eq!(parsed[1].id.as_str(), "person-3");
        assert_eq!(parsed[1].description, None);
    }

    #[test]
    fn test_parse_handles_crlf_and_header_only() {
        let parsed = parse_people_csv("Name,Description\r\nAda,Lead\r\n").unwrap();
        assert_eq!(parsed[0].description.as_deref(), Some("Lead"));

        assert!(parse_people_csv("Name,Description\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(matches!(
            parse_people_csv("  \n "),
            Err(IoError::MissingHeader)
        ));
    }

    #[test]
    fn test_assignment_export() {
        let groups = vec![
            Group {
                id: GroupId(0),
                members: people(&["Ada", "Bob"]),
                total_score: 5,
            },
            Group {
                id: GroupId(2),
                members: people(&["Cy, Jr."]),
                total_score: 0,
            },
        ];
        let assignment = Assignment::new(groups, Vec::new(), 2, RatingScale::default());

        assert_eq!(
            write_assignment_csv(&assignment),
            "Group,Person\nGroup 1,Ada\nGroup 1,Bob\nGroup 2,\"Cy, Jr.\"\n"
        );
    }

    #[test]
    fn test_rating_matrix() {
        let problem = rated_problem(
            &["A", "B", "C", "D"],
            &[("A", "B", 4)],
            &[
                ("A", "C", ConstraintKind::MustPair),
                ("B", "C", ConstraintKind::CannotPair),
            ],
        );
        assert_eq!(problem.rating(&id("A"), &id("B")), Some(4));

        assert_eq!(
            write_rating_matrix_csv(&problem),
            "Person,A,B,C,D\n\
             A,N/A,4,100,N/A\n\
             B,4,N/A,-1,N/A\n\
             C,100,-1,N/A,N/A\n\
             D,N/A,N/A,N/A,N/A\n"
        );
    }
}
