use std::cmp::Ordering;

use crate::compare;

order_impl!("length_then_reverse_alpha");

#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    compare::then(
        compare::comparing(compare::utf16_len),
        compare::reverse(compare::natural::<str>),
    )(a, b)
}
