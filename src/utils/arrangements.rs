use log::debug;

use crate::utils::{ARITY, Tuple};

/// Every distinct ordering of `values`.
///
/// Index permutations are walked in lexicographic order and mapped to values;
/// when the tuple contains repeats the later duplicates are dropped, so the
/// result holds `24 / (k1! * k2! * ...)` arrangements.
pub fn all_arrangements(values: &Tuple) -> Vec<Tuple> {
    let mut result: Vec<Tuple> = Vec::with_capacity(24);

    for i0 in 0..ARITY {
        for i1 in (0..ARITY).filter(|&i| i != i0) {
            for i2 in (0..ARITY).filter(|&i| i != i0 && i != i1) {
                for i3 in (0..ARITY).filter(|&i| i != i0 && i != i1 && i != i2) {
                    let arrangement = [values[i0], values[i1], values[i2], values[i3]];
                    if !result.contains(&arrangement) {
                        result.push(arrangement);
                    }
                }
            }
        }
    }

    debug!("{:?} has {} distinct arrangements", values, result.len());
    result
}
