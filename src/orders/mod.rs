use crate::Order;

// Ascending natural order.
pub mod alpha;

// Ascending by length, via a three-way comparison of the lengths.
pub mod length;

// Ascending by length, via the signed length difference.
pub mod length_difference;

// Descending by length.
pub mod length_reverse;

// Ascending by length, ties ascending natural order.
pub mod length_then_alpha;

// Ascending by length, ties descending natural order.
pub mod length_then_reverse_alpha;

/// Names of every rule in this module.
pub fn all_names() -> Vec<String> {
    vec![
        alpha::OrderImpl::name(),
        length::OrderImpl::name(),
        length_difference::OrderImpl::name(),
        length_reverse::OrderImpl::name(),
        length_then_alpha::OrderImpl::name(),
        length_then_reverse_alpha::OrderImpl::name(),
    ]
}
