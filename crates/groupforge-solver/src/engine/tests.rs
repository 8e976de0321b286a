use super::*;
use groupforge_config::TerminationConfig;
use groupforge_core::{ConstraintKind, ConstraintId};
use groupforge_test::{cannot_pair, id, must_pair, people, rating, rated_problem};

fn member_names(assignment: &Assignment) -> Vec<Vec<String>> {
    assignment
        .groups()
        .iter()
        .map(|g| g.members.iter().map(|m| m.name.clone()).collect())
        .collect()
}

fn hill_climbing(steps: u64) -> LocalSearchConfig {
    LocalSearchConfig {
        acceptor: Some(AcceptorConfig::HillClimbing),
        termination: Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..TerminationConfig::default()
        }),
    }
}

#[test]
fn test_zero_group_size_is_rejected() {
    let err = AssignmentEngine::new(0).unwrap_err();
    assert!(matches!(err, GroupForgeError::Config(_)));
}

#[test]
fn test_default_engine() {
    let engine = AssignmentEngine::default();
    assert_eq!(engine.group_size(), DEFAULT_GROUP_SIZE);
    assert_eq!(engine.scale(), RatingScale::default());
}

#[test]
fn test_from_config_resolves_group_count() {
    let config = GroupingConfig::new().with_group_count(3);
    let engine = AssignmentEngine::from_config(&config, 10).unwrap();
    assert_eq!(engine.group_size(), 4);
}

#[test]
fn test_from_config_rejects_invalid_sizing() {
    let config = GroupingConfig::new().with_group_size(0);
    let err = AssignmentEngine::from_config(&config, 10).unwrap_err();
    assert!(matches!(err, GroupForgeError::Config(_)));
}

#[test]
fn test_empty_input_gives_empty_assignment() {
    let engine = AssignmentEngine::new(3).unwrap();
    let assignment = engine.assign(&[], &[], &[]);

    assert!(assignment.is_empty());
    assert!(assignment.warnings().is_empty());
    assert_eq!(assignment.total_score(), 0);
}

#[test]
fn test_remainder_group_scores_zero() {
    let engine = AssignmentEngine::new(2).unwrap();
    let all = people(&["A", "B", "C", "D", "E"]);
    let assignment = engine.assign(&all, &[], &[]);

    let sizes: Vec<usize> = assignment.groups().iter().map(|g| g.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);
    assert_eq!(assignment.groups()[2].total_score, 0);
    assert_eq!(assignment.total_score(), 6);
    assert!(assignment.is_feasible());
}

#[test]
fn test_group_ids_follow_creation_order() {
    let engine = AssignmentEngine::new(2).unwrap();
    let all = people(&["A", "B", "C", "D"]);
    let assignment = engine.assign(&all, &[], &[]);

    let ids: Vec<GroupId> = assignment.groups().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![GroupId(0), GroupId(1)]);
}

#[test]
fn test_fallback_is_reported() {
    let engine = AssignmentEngine::new(2).unwrap();
    let all = people(&["A", "B", "C"]);
    let constraints = vec![
        cannot_pair("A", "B"),
        cannot_pair("A", "C"),
        cannot_pair("B", "C"),
    ];
    let assignment = engine.assign(&all, &[], &constraints);

    assert_eq!(member_names(&assignment), vec![vec!["A", "C"], vec!["B"]]);
    assert_eq!(
        assignment.warnings(),
        &[
            AssignmentWarning::FallbackPlacement {
                person: id("C"),
                group: GroupId(0),
            },
            AssignmentWarning::CannotPairViolated {
                constraint: ConstraintId::from("cannot-A-C"),
                group: GroupId(0),
                first: id("A"),
                second: id("C"),
            },
        ]
    );
    assert_eq!(assignment.score(), HardSoftScore::of(-1, 3));
    assert!(!assignment.is_feasible());
}

#[test]
fn test_fallback_warning_follows_local_search_moves() {
    let all = people(&["A", "B", "C", "D"]);
    let constraints = vec![cannot_pair("C", "D")];
    let engine = AssignmentEngine::new(2)
        .unwrap()
        .with_seed(1)
        .with_local_search(hill_climbing(200));

    let assignment = engine.assign(&all, &[], &constraints);

    // Greedy puts D next to C by fallback; any swap then splits them
    assert!(assignment.is_feasible());
    let fallbacks: Vec<GroupId> = assignment
        .warnings()
        .iter()
        .filter_map(|w| match w {
            AssignmentWarning::FallbackPlacement { person, group } if person == &id("D") => {
                Some(*group)
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        fallbacks,
        vec![assignment.group_of(&id("D")).map(|g| g.id).unwrap()]
    );
}

#[test]
fn test_unhonored_must_pair_is_reported() {
    let engine = AssignmentEngine::new(2).unwrap();
    let all = people(&["A", "B", "C", "D"]);
    let constraints = vec![must_pair("A", "B"), must_pair("A", "C")];
    let assignment = engine.assign(&all, &[], &constraints);

    assert_eq!(member_names(&assignment), vec![vec!["A", "B"], vec!["C", "D"]]);
    assert_eq!(
        assignment.warnings(),
        &[AssignmentWarning::MustPairNotHonored {
            constraint: ConstraintId::from("must-A-C"),
            first: id("A"),
            second: id("C"),
        }]
    );
}

#[test]
fn test_unknown_ids_are_inert() {
    let engine = AssignmentEngine::new(2).unwrap();
    let all = people(&["A", "B"]);
    let constraints = vec![must_pair("A", "ghost"), cannot_pair("ghost", "B")];
    let ratings = vec![rating("A", "ghost", 1)];
    let assignment = engine.assign(&all, &ratings, &constraints);

    assert_eq!(member_names(&assignment), vec![vec!["A", "B"]]);
    assert!(assignment.warnings().is_empty());
}

#[test]
fn test_assign_problem_uses_problem_scale() {
    let mut problem = GroupingProblem::with_scale(RatingScale::new(0, 10, 5));
    for person in people(&["A", "B"]) {
        problem.insert_person(person).unwrap();
    }

    let assignment = AssignmentEngine::new(2).unwrap().assign_problem(&problem);
    assert_eq!(assignment.total_score(), 5);
    assert_eq!(assignment.scale().max, 10);
}

#[test]
fn test_local_search_improves_greedy_result() {
    let all = people(&["A", "B", "C", "D"]);
    let ratings = vec![
        rating("A", "B", 1),
        rating("A", "C", 5),
        rating("B", "D", 5),
        rating("C", "D", 1),
        rating("A", "D", 1),
        rating("B", "C", 1),
    ];

    let greedy = AssignmentEngine::new(2).unwrap().assign(&all, &ratings, &[]);
    assert_eq!(greedy.total_score(), 2);

    let improved = AssignmentEngine::new(2)
        .unwrap()
        .with_local_search(hill_climbing(200))
        .assign(&all, &ratings, &[]);
    assert_eq!(improved.total_score(), 10);
    assert!(improved.is_feasible());
}

#[test]
fn test_local_search_is_deterministic() {
    let all = people(&["A", "B", "C", "D", "E", "F", "G"]);
    let ratings = vec![rating("A", "G", 5), rating("B", "F", 5), rating("C", "D", 1)];
    let constraints = vec![cannot_pair("A", "B"), must_pair("E", "F")];
    let engine = AssignmentEngine::new(3)
        .unwrap()
        .with_seed(11)
        .with_local_search(LocalSearchConfig::default());

    let first = engine.assign(&all, &ratings, &constraints);
    let second = engine.assign(&all, &ratings, &constraints);
    assert_eq!(first, second);
}

#[test]
fn test_local_search_keeps_feasibility() {
    let problem = rated_problem(
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B", 5), ("C", "D", 5)],
        &[("A", "B", ConstraintKind::CannotPair), ("E", "F", ConstraintKind::MustPair)],
    );
    let config = GroupingConfig::new()
        .with_group_size(3)
        .with_phase(PhaseConfig::LocalSearch(hill_climbing(500)));

    let assignment = AssignmentEngine::from_config(&config, problem.len())
        .unwrap()
        .assign_problem(&problem);

    assert!(assignment.is_feasible());
    assert_ne!(
        assignment.group_of(&id("A")).map(|g| g.id),
        assignment.group_of(&id("B")).map(|g| g.id)
    );
    assert_eq!(
        assignment.group_of(&id("E")).map(|g| g.id),
        assignment.group_of(&id("F")).map(|g| g.id)
    );
}
