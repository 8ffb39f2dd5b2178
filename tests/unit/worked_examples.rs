//! Hand-traced ranking passes.

use super::common::{cand, keys, words};
use suggestset::{Candidate, Insertion, RankedResultSet, SuggestionKind};

#[test]
fn test_capacity_three_trace() {
    // After three inserts the set is full: {(10,4), (20,3), (15,5)}.
    // (20,2) beats the weakest (10,4), which is evicted.
    let mut set = RankedResultSet::new(3);
    for (score, len) in [(10, 4), (20, 3), (15, 5)] {
        assert_eq!(set.insert(cand(score, len)), Insertion::Added);
    }
    assert_eq!(set.weakest(), Some(&cand(10, 4)));

    assert_eq!(
        set.insert(cand(20, 2)),
        Insertion::Replaced {
            evicted: cand(10, 4)
        }
    );
    assert_eq!(set.weakest(), Some(&cand(15, 5)));

    let output = set.drain();
    assert_eq!(keys(&output), vec![(20, 2), (20, 3), (15, 5)]);
}

#[test]
fn test_insert_order_does_not_change_result() {
    let inputs = [(10, 4), (20, 3), (15, 5), (20, 2), (3, 1), (15, 4)];
    let mut forward = RankedResultSet::new(3);
    forward.extend(inputs.iter().map(|&(s, l)| cand(s, l)));
    let mut backward = RankedResultSet::new(3);
    backward.extend(inputs.iter().rev().map(|&(s, l)| cand(s, l)));

    assert_eq!(keys(&forward.drain()), keys(&backward.drain()));
}

#[test]
fn test_keyboard_session() {
    // A typed word, a couple of corrections and a prediction competing for two slots
    let mut set = RankedResultSet::with_weight(2, 0.62);
    set.insert(Candidate::from_word("teh", 50, SuggestionKind::Typed));
    set.insert(Candidate::from_word("the", 180, SuggestionKind::Correction));
    set.insert(Candidate::from_word("ten", 90, SuggestionKind::Correction));
    set.add_prediction("then".chars().map(u32::from).collect::<Vec<_>>(), Some(90));

    // "then" ties "ten" on score but is longer, so "ten" keeps its slot
    let output = set.drain();
    assert_eq!(words(&output), ["the", "ten"]);
    assert_eq!(output.weight, Some(0.62));
}

#[test]
fn test_drain_then_reuse() {
    let mut set = RankedResultSet::new(2);
    set.extend([cand(1, 1), cand(2, 1), cand(3, 1)]);
    assert_eq!(set.drain().scores(), vec![3, 2]);

    // Empty after drain, full capacity available again
    assert!(set.is_empty());
    set.extend([cand(-5, 1), cand(-9, 1)]);
    assert_eq!(set.extract_scores(), vec![-5, -9]);
}

#[test]
fn test_extreme_scores() {
    let mut set = RankedResultSet::new(2);
    set.extend([cand(i32::MIN, 1), cand(i32::MAX, 48), cand(0, 1)]);
    assert_eq!(set.extract_scores(), vec![i32::MAX, 0]);
}
