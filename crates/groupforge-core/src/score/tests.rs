use std::cmp::Ordering;

use crate::score::*;

#[test]
fn test_creation() {
    let score = HardSoftScore::of(-2, 17);
    assert_eq!(score.hard(), -2);
    assert_eq!(score.soft(), 17);
    assert_eq!(HardSoftScore::of_hard(-1), HardSoftScore::of(-1, 0));
    assert_eq!(HardSoftScore::of_soft(9), HardSoftScore::of(0, 9));
}

#[test]
fn test_feasibility() {
    assert!(HardSoftScore::of(0, 0).is_feasible());
    assert!(HardSoftScore::of(0, -3).is_feasible());
    assert!(!HardSoftScore::of(-1, 100).is_feasible());
}

#[test]
fn test_comparison() {
    let infeasible = HardSoftScore::of(-1, 100);
    let feasible = HardSoftScore::of(0, 3);
    assert!(feasible > infeasible);
    assert!(feasible.is_better_than(&infeasible));
    assert!(infeasible.is_worse_than(&feasible));

    let s1 = HardSoftScore::of(0, 8);
    let s2 = HardSoftScore::of(0, 11);
    assert_eq!(s2.compare(&s1), Ordering::Greater);
}

#[test]
fn test_arithmetic() {
    let s1 = HardSoftScore::of(-1, 10);
    let s2 = HardSoftScore::of(-1, 4);

    assert_eq!(s1 + s2, HardSoftScore::of(-2, 14));
    assert_eq!(s1 - s2, HardSoftScore::of(0, 6));
    assert_eq!(-s1, HardSoftScore::of(1, -10));
}

#[test]
fn test_display() {
    assert_eq!(HardSoftScore::of(-1, 42).to_string(), "-1hard/42soft");
    assert_eq!(format!("{:?}", HardSoftScore::of(0, 7)), "HardSoftScore(0, 7)");
}

#[test]
fn test_level_numbers() {
    let score = HardSoftScore::of(-2, 50);
    assert_eq!(score.to_level_numbers(), vec![-2, 50]);
    assert_eq!(HardSoftScore::levels_count(), 2);
    assert_eq!(HardSoftScore::zero(), HardSoftScore::ZERO);
}
