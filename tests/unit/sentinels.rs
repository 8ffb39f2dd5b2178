//! Raw sentinel values at the boundary.

use suggestset::{
    confidence_from_raw, index_from_raw, probability_from_raw, split_wire_type, write_output,
    Candidate, Insertion, KindFlags, OutputBuffers, RankedResultSet, SuggestionKind,
    NOT_AN_INDEX, NOT_A_CONFIDENCE, NOT_A_PROBABILITY, NOT_A_WEIGHT,
};

#[test]
fn test_not_a_probability_is_skipped_silently() {
    let mut set = RankedResultSet::new(3);
    assert_eq!(
        set.add_prediction_raw(vec![97u32], NOT_A_PROBABILITY),
        Insertion::Skipped
    );
    assert!(set.is_empty());

    // Zero is a real probability
    assert_eq!(set.add_prediction_raw(vec![97u32], 0), Insertion::Added);
}

#[test]
fn test_invalid_prediction_length_still_rejected() {
    let mut set = RankedResultSet::new(3);
    assert!(matches!(
        set.add_prediction(Vec::<u32>::new(), Some(10)),
        Insertion::Invalid(_)
    ));
}

#[test]
fn test_raw_round_trip_through_buffers() {
    let mut set = RankedResultSet::new(1);
    set.insert(
        Candidate::from_word("ok", 1, SuggestionKind::Shortcut)
            .with_partial_commit_index(index_from_raw(NOT_AN_INDEX))
            .with_auto_commit_confidence(confidence_from_raw(NOT_A_CONFIDENCE))
            .with_flags(KindFlags::POSSIBLY_OFFENSIVE | KindFlags::EXACT_MATCH),
    );

    let mut buffers = OutputBuffers::for_capacity(1).unwrap();
    buffers.auto_commit_confidence = [0];
    write_output(&mut set, &mut buffers).unwrap();

    assert_eq!(buffers.partial_commit_indices[0], NOT_AN_INDEX);
    assert_eq!(buffers.auto_commit_confidence, [NOT_A_CONFIDENCE]);
    assert_eq!(buffers.weight, NOT_A_WEIGHT);

    let (kind, flags) = split_wire_type(buffers.types[0]).unwrap();
    assert_eq!(kind, SuggestionKind::Shortcut);
    assert!(flags.contains(KindFlags::POSSIBLY_OFFENSIVE));
    assert!(flags.contains(KindFlags::EXACT_MATCH));
    assert!(!flags.contains(KindFlags::EXACT_MATCH_WITH_INTENTIONAL_OMISSION));
}

#[test]
fn test_probability_sentinel_only_minus_one() {
    assert_eq!(probability_from_raw(-1), None);
    assert_eq!(probability_from_raw(-2), Some(-2));
}
