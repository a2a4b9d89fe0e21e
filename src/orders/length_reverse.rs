use std::cmp::Ordering;

use crate::compare;

order_impl!("length_reverse");

#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    compare::reverse(super::length::compare)(a, b)
}
