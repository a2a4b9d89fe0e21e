//! The sortable string collection.
//!
//! Operations taking `&mut self` sort the held strings in place and return a view of them, so
//! later calls observe the new order. Operations taking `&self` leave the held strings untouched
//! and return a freshly sorted copy.
//!
//! All sorts are stable.

use std::cmp::Ordering;

use crate::compare;
use crate::orders::{
    alpha, length, length_difference, length_reverse, length_then_alpha, length_then_reverse_alpha,
};
use crate::Order;

const DEFAULT_SAMPLES: [&str; 6] = ["this", "is", "a", "list", "of", "strings"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleStrings {
    strings: Vec<String>,
}

impl Default for SampleStrings {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}

impl From<Vec<String>> for SampleStrings {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}

impl SampleStrings {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces the held strings. Any sequence is accepted, including an empty one.
    pub fn set_samples<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings = values.into_iter().map(Into::into).collect();
    }

    pub fn samples(&self) -> &[String] {
        &self.strings
    }

    pub fn into_samples(self) -> Vec<String> {
        self.strings
    }

    /// Sorts the held strings with the rule `O`.
    pub fn sort_with<O: Order>(&mut self) -> &[String] {
        self.strings.sort_by(|a, b| O::compare(a, b));
        &self.strings
    }

    /// Returns a copy of the held strings sorted with the rule `O`.
    pub fn sorted_with<O: Order>(&self) -> Vec<String> {
        let mut sorted = self.strings.clone();
        sorted.sort_by(|a, b| O::compare(a, b));
        sorted
    }

    /// Ascending natural order, in place.
    pub fn alpha_sort(&mut self) -> &[String] {
        self.strings.sort_by(|a, b| alpha::compare(a, b));
        &self.strings
    }

    /// Ascending natural order, as a new list.
    pub fn alpha_sorted(&self) -> Vec<String> {
        let mut sorted: Vec<String> = self.strings.iter().cloned().collect();
        sorted.sort();
        sorted
    }

    /// Longest first, in place. Strings of equal length keep their relative order.
    pub fn length_reverse_sort(&mut self) -> &[String] {
        self.strings.sort_by(|a, b| length_reverse::compare(a, b));
        &self.strings
    }

    /// Shortest first, in place, comparing the lengths as a signed difference.
    pub fn length_sort_by_difference(&mut self) -> &[String] {
        self.strings
            .sort_by(|a, b| compare::from_difference(compare::len_difference(a, b)));
        &self.strings
    }

    /// Shortest first, in place.
    pub fn length_sort(&mut self) -> &[String] {
        self.strings.sort_by(|a, b| length::compare(a, b));
        &self.strings
    }

    /// Shortest first, in place, spelled out.
    pub fn length_sort_verbose(&mut self) -> &[String] {
        self.strings.sort_by(|a: &String, b: &String| -> Ordering {
            let a_len = compare::utf16_len(a);
            let b_len = compare::utf16_len(b);
            a_len.cmp(&b_len)
        });
        &self.strings
    }

    /// Shortest first, as a new list.
    pub fn length_sorted(&self) -> Vec<String> {
        let mut sorted: Vec<String> = self.strings.iter().cloned().collect();
        sorted.sort_by(|a, b| length_difference::compare(a, b));
        sorted
    }

    /// Shortest first, as a new list. Each length is computed once per string.
    pub fn length_sorted_by_key(&self) -> Vec<String> {
        let mut sorted = self.strings.clone();
        sorted.sort_by_cached_key(|s| compare::utf16_len(s));
        sorted
    }

    /// Shortest first with ties in ascending natural order, in place.
    pub fn length_then_alpha_sort(&mut self) -> &[String] {
        self.strings.sort_by(|a, b| length_then_alpha::compare(a, b));
        &self.strings
    }

    /// Shortest first with ties in ascending natural order, as a new list.
    pub fn length_then_alpha_sorted(&self) -> Vec<String> {
        self.sorted_with::<length_then_alpha::OrderImpl>()
    }

    /// Shortest first with ties in descending natural order, as a new list.
    pub fn length_then_reverse_alpha_sorted(&self) -> Vec<String> {
        self.sorted_with::<length_then_reverse_alpha::OrderImpl>()
    }
}
