//! Tests for candidate pickers.

use super::{Picker, UniformPicker};

#[test]
fn seeded_pickers_are_deterministic() {
    let mut first = UniformPicker::seeded(42);
    let mut second = UniformPicker::seeded(42);

    for _ in 0..32 {
        assert_eq!(first.pick(10), second.pick(10));
    }
}

#[test]
fn different_seeds_diverge() {
    let mut first = UniformPicker::seeded(1);
    let mut second = UniformPicker::seeded(2);

    let a: Vec<usize> = (0..32).map(|_| first.pick(1000)).collect();
    let b: Vec<usize> = (0..32).map(|_| second.pick(1000)).collect();
    assert_ne!(a, b);
}

#[test]
fn single_candidate_always_picks_index_zero() {
    let mut picker = UniformPicker::from_entropy();
    for _ in 0..8 {
        assert_eq!(picker.pick(1), 0);
    }
}

#[test]
fn picks_stay_in_range() {
    let mut picker = UniformPicker::seeded(7);
    for _ in 0..256 {
        assert!(picker.pick(3) < 3);
    }
}
