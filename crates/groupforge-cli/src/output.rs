//! Output formatting for the CLI.

use std::fmt::Write;

use groupforge::{Assignment, Group};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Renders an assignment in the requested format.
    pub fn format_assignment(&self, assignment: &Assignment, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.format_assignment_text(assignment)),
            OutputFormat::Json => Ok(groupforge_io::write_assignment_json(assignment)?),
            OutputFormat::Csv => Ok(groupforge_io::write_assignment_csv(assignment)),
        }
    }

    fn format_assignment_text(&self, assignment: &Assignment) -> String {
        let mut out = String::new();

        if assignment.is_empty() {
            let _ = writeln!(out, "No people to group.");
            return out;
        }

        for (n, group) in assignment.groups().iter().enumerate() {
            let _ = writeln!(out, "{}", self.group_header(n + 1, group));
            for member in &group.members {
                match &member.description {
                    Some(description) => {
                        let _ = writeln!(out, "  - {} ({})", member.name, self.dim(description));
                    }
                    None => {
                        let _ = writeln!(out, "  - {}", member.name);
                    }
                }
            }
            out.push('\n');
        }

        let max = assignment.max_possible_score(assignment.scale().max);
        let _ = writeln!(
            out,
            "Total score: {} / {} ({:.1}% efficiency)",
            self.highlight(&assignment.total_score().to_formatted_string(&Locale::en)),
            max.to_formatted_string(&Locale::en),
            assignment.efficiency() * 100.0
        );
        let _ = writeln!(
            out,
            "{} people in {} groups of up to {}",
            assignment.person_count(),
            assignment.len(),
            assignment.group_size()
        );

        if !assignment.warnings().is_empty() {
            let _ = writeln!(out, "\n{}", self.warn("Warnings:"));
            for warning in assignment.warnings() {
                let _ = writeln!(out, "  ! {warning}");
            }
        }
        out
    }

    fn group_header(&self, number: usize, group: &Group) -> String {
        let average = group
            .average_rating()
            .map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.2}"));
        let title = format!("Group {number}");
        format!(
            "{} - score {}, average rating {}",
            self.bold(&title),
            group.total_score,
            average
        )
    }

    fn bold(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.color_enabled {
            text.bright_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color_enabled {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.color_enabled {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupforge::AssignmentEngine;
    use groupforge_test::{cannot_pair, people, rating};

    fn sample() -> Assignment {
        let mut all = people(&["Ada", "Bob", "Cy", "Dee"]);
        all[2] = all[2].clone().with_description("design");
        AssignmentEngine::new(2)
            .unwrap()
            .assign(&all, &[rating("Ada", "Bob", 5)], &[])
    }

    #[test]
    fn test_text_output() {
        let text = Formatter::new(false)
            .format_assignment(&sample(), OutputFormat::Text)
            .unwrap();

        assert!(text.contains("Group 1 - score 5, average rating 5.00"));
        assert!(text.contains("  - Cy (design)"));
        assert!(text.contains("Total score: 8 / 10 (80.0% efficiency)"));
        assert!(text.contains("4 people in 2 groups of up to 2"));
        assert!(!text.contains("Warnings"));
    }

    #[test]
    fn test_text_output_lists_warnings() {
        let all = people(&["A", "B", "C"]);
        let constraints = vec![
            cannot_pair("A", "B"),
            cannot_pair("A", "C"),
            cannot_pair("B", "C"),
        ];
        let assignment = AssignmentEngine::new(2).unwrap().assign(&all, &[], &constraints);

        let text = Formatter::new(false)
            .format_assignment(&assignment, OutputFormat::Text)
            .unwrap();
        assert!(text.contains("Warnings:"));
        assert!(text.contains("! C placed in group-0 by fallback"));
    }

    #[test]
    fn test_csv_and_json_output() {
        let formatter = Formatter::new(true);
        let csv = formatter
            .format_assignment(&sample(), OutputFormat::Csv)
            .unwrap();
        assert!(csv.starts_with("Group,Person\nGroup 1,Ada\n"));

        let json = formatter
            .format_assignment(&sample(), OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"][0]["total_score"], 5);
    }

    #[test]
    fn test_empty_assignment() {
        let empty = AssignmentEngine::new(3).unwrap().assign(&[], &[], &[]);
        let text = Formatter::new(false)
            .format_assignment(&empty, OutputFormat::Text)
            .unwrap();
        assert_eq!(text, "No people to group.\n");
    }
}
