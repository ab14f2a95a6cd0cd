//! Integration tests for LazySequence.
//!
//! Covers the generators, memoization, laziness of each combinator and the
//! conversions to and from PersistentList.

use std::cell::Cell;
use std::rc::Rc;

use funseq::config::SequenceConfig;
use funseq::error::SequenceError;
use funseq::persistent::PersistentList;
use funseq::stream::LazySequence;
use rstest::rstest;

/// A sequence `0, 1, 2, ...` that counts how many heads were evaluated.
fn counted_naturals(evaluations: &Rc<Cell<usize>>) -> LazySequence<u32> {
    fn from(value: u32, evaluations: Rc<Cell<usize>>) -> LazySequence<u32> {
        let counter = Rc::clone(&evaluations);
        LazySequence::cons(
            move || {
                counter.set(counter.get() + 1);
                value
            },
            move || from(value + 1, evaluations),
        )
    }
    from(0, Rc::clone(evaluations))
}

/// `1, 2` followed by a tail that panics when forced.
fn two_then_panic() -> LazySequence<i32> {
    LazySequence::cons(
        || 1,
        || LazySequence::cons(|| 2, || -> LazySequence<i32> { panic!("third cell forced") }),
    )
}

// =============================================================================
// Generators
// =============================================================================

#[rstest]
fn test_from_take_five() {
    assert_eq!(
        LazySequence::from(0).take(5).to_strict_list(),
        Ok(PersistentList::of([0, 1, 2, 3, 4]))
    );
}

#[rstest]
fn test_constant_take_three() {
    assert_eq!(
        LazySequence::constant(7).take(3).to_strict_list(),
        Ok(PersistentList::of([7, 7, 7]))
    );
}

#[rstest]
fn test_fibs_first_terms() {
    assert_eq!(
        LazySequence::fibs().take(6).to_strict_list(),
        Ok(PersistentList::of([1, 1, 2, 3, 5, 8]))
    );
}

#[rstest]
fn test_of_and_empty() {
    assert_eq!(
        LazySequence::of(vec!['x', 'y']).to_strict_list(),
        Ok(PersistentList::of(['x', 'y']))
    );
    assert!(LazySequence::<i32>::empty().to_strict_list().is_ok_and(|list| list.is_empty()));
}

#[rstest]
fn test_unfold_stops_on_none() {
    let countdown = LazySequence::unfold(3_u8, |n| n.checked_sub(1).map(|next| (n, next)));
    assert_eq!(countdown.to_strict_list(), Ok(PersistentList::of([3, 2, 1])));
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn test_cell_head_evaluated_once() {
    let evaluations = Rc::new(Cell::new(0));
    let naturals = counted_naturals(&evaluations);
    let LazySequence::Cons(cell) = &naturals else {
        panic!("expected a cell");
    };

    assert_eq!(*cell.head(), 0);
    assert_eq!(*cell.head(), 0);
    assert_eq!(evaluations.get(), 1);
}

#[rstest]
fn test_shared_prefix_evaluated_once() {
    let evaluations = Rc::new(Cell::new(0));
    let naturals = counted_naturals(&evaluations);

    let first = naturals.take(10).to_strict_list();
    let second = naturals.take(10).to_strict_list();

    assert_eq!(first, second);
    assert_eq!(evaluations.get(), 10);
}

#[rstest]
fn test_take_forces_only_consumed_heads() {
    let evaluations = Rc::new(Cell::new(0));
    let naturals = counted_naturals(&evaluations);

    let prefix = naturals.take(3);
    assert_eq!(evaluations.get(), 1);
    assert_eq!(prefix.head_option(), Some(0));
    assert_eq!(evaluations.get(), 1);
    assert_eq!(
        prefix.drop(1).ok().and_then(|rest| rest.head_option()),
        Some(1)
    );
    assert_eq!(evaluations.get(), 2);
}

// =============================================================================
// Combinator Laziness
// =============================================================================

#[rstest]
fn test_chained_map_evaluates_only_consumed_elements() {
    let evaluations = Rc::new(Cell::new(0));
    let counter = Rc::clone(&evaluations);
    let mapped = LazySequence::from(0)
        .map(move |n| {
            counter.set(counter.get() + 1);
            n * 2
        })
        .map(|n| n + 1);

    assert_eq!(mapped.take(2).to_strict_list(), Ok(PersistentList::of([1, 3])));
    assert_eq!(evaluations.get(), 2);
}

#[rstest]
fn test_map_over_counted_source_forces_only_consumed_heads() {
    let evaluations = Rc::new(Cell::new(0));
    let doubled = counted_naturals(&evaluations).map(|n| n * 2);

    assert_eq!(doubled.take(3).to_strict_list(), Ok(PersistentList::of([0, 2, 4])));
    assert_eq!(evaluations.get(), 3);
}

#[rstest]
fn test_map_does_not_force_past_consumed_cells() {
    assert_eq!(
        two_then_panic().map(|n| *n).take(2).to_strict_list(),
        Ok(PersistentList::of([1, 2]))
    );
}

#[rstest]
fn test_filter_does_not_force_past_consumed_cells() {
    assert_eq!(
        two_then_panic().filter(|n| *n > 0).take(2).to_strict_list(),
        Ok(PersistentList::of([1, 2]))
    );
}

#[rstest]
fn test_take_while_does_not_force_past_consumed_cells() {
    assert_eq!(
        two_then_panic().take_while(|n| *n < 10).take(2).to_strict_list(),
        Ok(PersistentList::of([1, 2]))
    );
}

#[rstest]
fn test_zip_with_does_not_force_past_consumed_cells() {
    let sums = two_then_panic().zip_with(&LazySequence::from(10), |a, b| i64::from(*a) + b);
    assert_eq!(sums.take(2).to_strict_list(), Ok(PersistentList::of([11, 13])));
}

#[rstest]
fn test_zip_all_does_not_force_past_consumed_cells() {
    assert_eq!(
        two_then_panic().zip_all(&two_then_panic()).take(2).to_strict_list(),
        Ok(PersistentList::of([(Some(1), Some(1)), (Some(2), Some(2))]))
    );
}

#[rstest]
fn test_flat_map_does_not_force_past_consumed_cells() {
    let repeated = two_then_panic().flat_map(|n| LazySequence::constant(*n).take(2));
    assert_eq!(repeated.take(3).to_strict_list(), Ok(PersistentList::of([1, 1, 2])));
}

#[rstest]
fn test_tails_does_not_force_past_consumed_cells() {
    let heads: Vec<Option<i32>> = two_then_panic()
        .tails()
        .take(2)
        .iter()
        .map(|suffix| suffix.head_option())
        .collect();
    assert_eq!(heads, vec![Some(1), Some(2)]);
}

#[rstest]
fn test_flat_map_over_long_run_of_empty_results() {
    let flattened = LazySequence::from(0)
        .take(200_000)
        .flat_map(|_| LazySequence::<i64>::empty());
    assert!(flattened.is_empty());
}

#[rstest]
fn test_flat_map_over_long_sequence() {
    let doubled = LazySequence::from(0)
        .take(100_000)
        .flat_map(|n| LazySequence::of([*n, *n]));
    assert_eq!(doubled.iter().count(), 200_000);

    let sparse = LazySequence::from(0)
        .take(200_000)
        .flat_map(|n| {
            if n % 50_000 == 49_999 {
                LazySequence::of([*n])
            } else {
                LazySequence::empty()
            }
        });
    assert_eq!(
        sparse.to_strict_list(),
        Ok(PersistentList::of([49_999, 99_999, 149_999, 199_999]))
    );
}

// =============================================================================
// Partial and Total Operations
// =============================================================================

#[rstest]
#[case::all(3, Ok(0))]
#[case::too_many(4, Err(SequenceError::InsufficientLength { requested: 4, available: 3 }))]
fn test_drop_on_three_elements(#[case] count: usize, #[case] expected: Result<usize, SequenceError>) {
    let remaining = LazySequence::of([1, 2, 3])
        .drop(count)
        .map(|rest| rest.iter().count());
    assert_eq!(remaining, expected);
}

#[rstest]
fn test_drop_on_infinite_sequence() {
    let rest = LazySequence::from(0).drop(1_000).unwrap();
    assert_eq!(rest.head_option(), Some(1_000));
}

#[rstest]
fn test_take_while_is_total() {
    let empty: LazySequence<i32> = LazySequence::empty();
    assert!(empty.take_while(|_| true).is_empty());
    assert_eq!(
        LazySequence::of([1, 2, 3]).take_while(|n| *n < 10).to_strict_list(),
        Ok(PersistentList::of([1, 2, 3]))
    );
}

#[rstest]
fn test_zip_with_and_zip_all_differ_on_length_mismatch() {
    let short = LazySequence::of([1, 2]);
    let long = LazySequence::of([10, 20, 30]);

    assert_eq!(
        short.zip_with(&long, |a, b| a + b).to_strict_list(),
        Ok(PersistentList::of([11, 22]))
    );
    assert_eq!(
        short.zip_all(&long).to_strict_list(),
        Ok(PersistentList::of([
            (Some(1), Some(10)),
            (Some(2), Some(20)),
            (None, Some(30)),
        ]))
    );
}

#[rstest]
fn test_zip_all_on_infinite_sequences() {
    let pairs = LazySequence::from(0).zip_all(&LazySequence::constant("tick"));
    assert_eq!(
        pairs.take(2).to_strict_list(),
        Ok(PersistentList::of([(Some(0), Some("tick")), (Some(1), Some("tick"))]))
    );
}

// =============================================================================
// Searching
// =============================================================================

#[rstest]
#[case::contiguous(vec![2, 3], true)]
#[case::out_of_order(vec![3, 2], false)]
#[case::empty(vec![], true)]
fn test_has_subsequence(#[case] needle: Vec<i32>, #[case] expected: bool) {
    let haystack = LazySequence::of([1, 2, 3]);
    assert_eq!(haystack.has_subsequence(&LazySequence::of(needle)), expected);
}

#[rstest]
fn test_empty_has_only_empty_subsequence() {
    let empty: LazySequence<i32> = LazySequence::empty();
    assert!(empty.has_subsequence(&LazySequence::empty()));
    assert!(!empty.has_subsequence(&LazySequence::of([1])));
}

#[rstest]
fn test_has_subsequence_finite_needle_in_infinite_receiver() {
    let needle = LazySequence::from(5).take(3);
    assert!(LazySequence::from(0).has_subsequence(&needle));
    assert!(LazySequence::from(0).has_subsequence(&LazySequence::of([5, 6, 7])));
}

#[rstest]
fn test_scan_right_is_eager() {
    let evaluations = Rc::new(Cell::new(0));
    let sums = counted_naturals(&evaluations)
        .take(4)
        .scan_right(0, |element, sum| element + sum);
    assert_eq!(evaluations.get(), 4);
    assert_eq!(sums.to_strict_list(), Ok(PersistentList::of([6, 6, 5, 3, 0])));
    assert_eq!(evaluations.get(), 4);
}

#[rstest]
fn test_starts_with_infinite_receiver() {
    assert!(LazySequence::from(5).starts_with(&LazySequence::of([5, 6, 7])));
    assert!(!LazySequence::from(5).starts_with(&LazySequence::of([5, 7])));
}

#[rstest]
fn test_fold_right_short_circuits_on_infinite_sequence() {
    let first_large = LazySequence::fibs().fold_right(
        || None,
        |n, rest| if n > 1_000 { Some(n) } else { rest() },
    );
    assert_eq!(first_large, Some(1_597));
}

// =============================================================================
// Materialization
// =============================================================================

#[rstest]
fn test_to_strict_list_of_infinite_sequence_fails() {
    let config = SequenceConfig::default().with_materialize_limit(1_000);
    assert_eq!(
        LazySequence::constant(1).to_strict_list_with(&config),
        Err(SequenceError::MaterializationLimitExceeded { limit: 1_000 })
    );
}

#[rstest]
fn test_to_strict_list_long_finite_sequence() {
    let list = LazySequence::from(0).take(300_000).to_strict_list().unwrap();
    assert_eq!(list.length(), 300_000);
    assert_eq!(list.drop(299_999).ok().and_then(|rest| rest.head().copied()), Some(299_999));
}

#[rstest]
fn test_round_trip_through_persistent_list() {
    let list = PersistentList::of([3, 1, 4, 1, 5]);
    assert_eq!(LazySequence::from_list(&list).to_strict_list(), Ok(list));
}
