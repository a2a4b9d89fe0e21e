use std::cmp::Ordering;

use crate::compare;

order_impl!("length");

#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    compare::utf16_len(a).cmp(&compare::utf16_len(b))
}
