use crate::utils::{UtilsError, all_arrangements, validate_range, validate_values};

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[test]
fn test_all_distinct_values_give_24_arrangements() {
    let arrangements = all_arrangements(&[1, 2, 3, 4]);
    assert_eq!(arrangements.len(), 24);
    assert_eq!(arrangements.first(), Some(&[1, 2, 3, 4]));
    assert_eq!(arrangements.last(), Some(&[4, 3, 2, 1]));
}

#[test]
fn test_repeated_values_are_deduplicated() {
    assert_eq!(all_arrangements(&[5, 5, 7, 9]).len(), 12);
    assert_eq!(all_arrangements(&[5, 5, 7, 7]).len(), 6);
    assert_eq!(all_arrangements(&[5, 5, 5, 9]).len(), 4);
    assert_eq!(all_arrangements(&[5, 5, 5, 5]), vec![[5, 5, 5, 5]]);
}

#[test]
fn test_arrangement_counts_match_multiset_permutations() {
    for a in 1..=4 {
        for b in a..=4 {
            for c in b..=4 {
                for d in c..=4 {
                    let tuple = [a, b, c, d];
                    let arrangements = all_arrangements(&tuple);

                    let mut denominator = 1;
                    let mut i = 0;
                    while i < tuple.len() {
                        let run = tuple[i..].iter().take_while(|&&v| v == tuple[i]).count();
                        denominator *= factorial(run);
                        i += run;
                    }
                    assert_eq!(arrangements.len(), 24 / denominator, "{:?}", tuple);

                    let mut sorted_input = tuple;
                    sorted_input.sort_unstable();
                    for (idx, arrangement) in arrangements.iter().enumerate() {
                        let mut sorted = *arrangement;
                        sorted.sort_unstable();
                        assert_eq!(sorted, sorted_input);
                        assert!(!arrangements[..idx].contains(arrangement));
                    }
                }
            }
        }
    }
}

#[test]
fn test_validate_values_valid() {
    assert_eq!(validate_values(&[1, 2, 3, 31]), Ok([1, 2, 3, 31]));
}

#[test]
fn test_validate_values_invalid() {
    assert_eq!(
        validate_values(&[1, 2, 3]),
        Err(UtilsError::WrongArity {
            expected: 4,
            actual: 3
        })
    );
    assert!(validate_values(&[1, 2, 3, 4, 5]).is_err());
    assert!(validate_values(&[0, 2, 3, 4]).is_err());
    assert_eq!(
        validate_values(&[1, 2, 32, 4]),
        Err(UtilsError::ValueOutOfRange {
            value: 32,
            min: 1,
            max: 31
        })
    );
}

#[test]
fn test_validate_range() {
    assert!(validate_range(1, 31).is_ok());
    assert!(validate_range(7, 7).is_ok());
    assert!(validate_range(0, 31).is_err());
    assert!(validate_range(1, 32).is_err());
    assert!(validate_range(9, 8).is_err());
}
