//! End-to-end grouping scenarios.

use groupforge::prelude::*;
use groupforge_test::{cannot_pair, id, must_pair, people, rating};

fn names(group: &Group) -> Vec<&str> {
    group.members.iter().map(|m| m.name.as_str()).collect()
}

fn same_group(assignment: &Assignment, a: &str, b: &str) -> bool {
    match (assignment.group_of(&id(a)), assignment.group_of(&id(b))) {
        (Some(x), Some(y)) => x.id == y.id,
        _ => false,
    }
}

#[test]
fn test_strong_pair_is_grouped_together() {
    let all = people(&["A", "B", "C", "D"]);
    let ratings = vec![
        rating("A", "B", 5),
        rating("A", "C", 3),
        rating("A", "D", 3),
        rating("B", "C", 3),
        rating("B", "D", 3),
        rating("C", "D", 3),
    ];

    let assignment = groupforge::assign(&all, &ratings, &[], 2).unwrap();

    assert_eq!(assignment.len(), 2);
    assert_eq!(names(&assignment.groups()[0]), vec!["A", "B"]);
    assert_eq!(names(&assignment.groups()[1]), vec!["C", "D"]);
    assert_eq!(assignment.groups()[0].total_score, 5);
    assert_eq!(assignment.groups()[1].total_score, 3);
    assert_eq!(assignment.total_score(), 8);
}

#[test]
fn test_cannot_pair_separates() {
    let all = people(&["A", "B", "C", "D"]);
    let constraints = vec![cannot_pair("A", "B")];

    let assignment = groupforge::assign(&all, &[], &constraints, 2).unwrap();

    assert!(!same_group(&assignment, "A", "B"));
    assert!(assignment.warnings().is_empty());
}

#[test]
fn test_must_pair_is_seeded_first() {
    let all = people(&["A", "B", "C", "D", "E", "F"]);
    let constraints = vec![must_pair("A", "B")];

    let assignment = groupforge::assign(&all, &[], &constraints, 3).unwrap();

    assert!(same_group(&assignment, "A", "B"));
    let sizes: Vec<usize> = assignment.groups().iter().map(Group::len).collect();
    assert_eq!(sizes, vec![3, 3]);
}

#[test]
fn test_remainder_leaves_single_member_group() {
    let all = people(&["A", "B", "C", "D", "E"]);

    let assignment = groupforge::assign(&all, &[], &[], 2).unwrap();

    assert_eq!(assignment.len(), 3);
    let single = &assignment.groups()[2];
    assert_eq!(single.len(), 1);
    assert_eq!(single.total_score, 0);
    assert_eq!(single.average_rating(), None);
}

#[test]
fn test_empty_input() {
    let assignment = groupforge::assign(&[], &[], &[], 4).unwrap();
    assert!(assignment.is_empty());
    assert!(assignment.warnings().is_empty());
    assert_eq!(assignment.efficiency(), 0.0);
}

#[test]
fn test_zero_group_size_is_a_config_error() {
    let all = people(&["A", "B"]);
    let err = groupforge::assign(&all, &[], &[], 0).unwrap_err();
    assert!(matches!(err, GroupForgeError::Config(_)));
}

#[test]
fn test_group_count_sizing() {
    let mut problem = GroupingProblem::new();
    for name in ["A", "B", "C", "D", "E", "F", "G"] {
        problem.add_person(name, None).unwrap();
    }
    let config = GroupingConfig::new().with_group_count(2);

    let assignment = groupforge::solve(&problem, &config).unwrap();

    assert_eq!(assignment.group_size(), 4);
    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment.person_count(), 7);
}

#[test]
fn test_local_search_from_toml_config() {
    let config = GroupingConfig::from_toml_str(
        r#"
        group_size = 2
        random_seed = 7

        [[phases]]
        type = "local_search"

        [phases.acceptor]
        type = "hill_climbing"

        [phases.termination]
        step_count_limit = 300
        "#,
    )
    .unwrap();

    let mut problem = GroupingProblem::new();
    for person in people(&["A", "B", "C", "D"]) {
        problem.insert_person(person).unwrap();
    }
    for (a, b, value) in [
        ("A", "B", 1),
        ("A", "C", 5),
        ("B", "D", 5),
        ("C", "D", 1),
        ("A", "D", 1),
        ("B", "C", 1),
    ] {
        problem.set_rating(&id(a), &id(b), value).unwrap();
    }

    let greedy = groupforge::solve(&problem, &GroupingConfig::new().with_group_size(2)).unwrap();
    let improved = groupforge::solve(&problem, &config).unwrap();

    assert_eq!(greedy.total_score(), 2);
    assert_eq!(improved.total_score(), 10);
    assert!(same_group(&improved, "A", "C"));
    assert!(same_group(&improved, "B", "D"));
}

#[test]
fn test_exhausted_capacity_is_reported_not_failed() {
    let all = people(&["A", "B", "C"]);
    let constraints = vec![
        cannot_pair("A", "B"),
        cannot_pair("A", "C"),
        cannot_pair("B", "C"),
    ];

    let assignment = groupforge::assign(&all, &[], &constraints, 2).unwrap();

    assert_eq!(assignment.person_count(), 3);
    assert!(!assignment.is_feasible());
    assert_eq!(assignment.score().hard(), -1);
    assert!(assignment
        .warnings()
        .iter()
        .any(|w| matches!(w, AssignmentWarning::FallbackPlacement { .. })));
}
