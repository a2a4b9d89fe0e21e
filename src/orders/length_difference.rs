use std::cmp::Ordering;

use crate::compare;

order_impl!("length_difference");

/// Same ordering as [`super::length::compare`], expressed as `len(a) - len(b)`.
#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    compare::from_difference(compare::len_difference(a, b))
}
