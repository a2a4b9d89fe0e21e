use std::cmp::Ordering;

use crate::compare;

order_impl!("alpha");

#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    compare::natural(a, b)
}
