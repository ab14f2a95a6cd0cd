//! Tests for traverse and sequence over PersistentList.

use funseq::persistent::PersistentList;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    NotANumber(String),
}

fn parse(text: &&str) -> Result<i32, ParseError> {
    text.parse()
        .map_err(|_| ParseError::NotANumber((*text).to_string()))
}

// =============================================================================
// Option
// =============================================================================

#[rstest]
#[case::all_present(vec![Some(1), Some(2), Some(3)], Some(vec![1, 2, 3]))]
#[case::one_missing(vec![Some(1), None, Some(3)], None)]
#[case::empty(vec![], Some(vec![]))]
fn test_sequence_option(#[case] input: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
    let sequenced = PersistentList::of(input).sequence_option();
    assert_eq!(sequenced, expected.map(PersistentList::of));
}

#[rstest]
fn test_traverse_option_checked_arithmetic() {
    let list = PersistentList::of([1_u8, 100, 200]);
    assert_eq!(list.traverse_option(|x| x.checked_add(50)), None);
    assert_eq!(
        list.traverse_option(|x| x.checked_sub(1)),
        Some(PersistentList::of([0, 99, 199]))
    );
}

// =============================================================================
// Result
// =============================================================================

#[rstest]
fn test_traverse_result_all_ok() {
    let inputs = PersistentList::of(["4", "8", "15"]);
    assert_eq!(inputs.traverse_result(parse), Ok(PersistentList::of([4, 8, 15])));
}

#[rstest]
fn test_traverse_result_first_error_wins() {
    let inputs = PersistentList::of(["4", "x", "15", "y"]);
    assert_eq!(
        inputs.traverse_result(parse),
        Err(ParseError::NotANumber("x".to_string()))
    );
}

#[rstest]
fn test_sequence_result() {
    let failed: PersistentList<Result<i32, ParseError>> = PersistentList::of([
        Ok(1),
        Err(ParseError::NotANumber("a".to_string())),
        Err(ParseError::NotANumber("b".to_string())),
    ]);
    assert_eq!(
        failed.sequence_result(),
        Err(ParseError::NotANumber("a".to_string()))
    );

    let empty: PersistentList<Result<i32, ParseError>> = PersistentList::empty();
    assert_eq!(empty.sequence_result(), Ok(PersistentList::empty()));
}

#[rstest]
fn test_traverse_long_list_is_stack_safe() {
    let inputs: PersistentList<i64> = (0..300_000).collect();
    let doubled = inputs.traverse_result(|x| Ok::<_, ParseError>(x * 2)).unwrap();
    assert_eq!(doubled.length(), 300_000);
}
