//! Comparator building blocks.
//!
//! Every comparator is a plain `Fn(&T, &T) -> Ordering`, so they compose with each other and plug
//! straight into [`slice::sort_by`].

use std::cmp::Ordering;

/// The natural ordering of `T`. For `str` this compares bytes, which for UTF-8 is the same as
/// comparing code points. No locale-aware collation.
#[inline]
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Flips `compare`, so the largest element sorts first.
#[inline]
pub fn reverse<T: ?Sized, F>(compare: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(b, a)
}

/// Compares by the key `key` extracts from each element.
#[inline]
pub fn comparing<T: ?Sized, K: Ord, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Lexicographic composition: `secondary` only decides when `primary` reports `Equal`.
#[inline]
pub fn then<T: ?Sized, P, S>(primary: P, secondary: S) -> impl Fn(&T, &T) -> Ordering
where
    P: Fn(&T, &T) -> Ordering,
    S: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| primary(a, b).then_with(|| secondary(a, b))
}

/// Length of `s` in UTF-16 code units. Characters outside the BMP count twice.
#[inline]
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// `utf16_len(a) - utf16_len(b)`.
///
/// Cannot overflow: a `str` never holds more than `isize::MAX` bytes and every UTF-16 unit takes
/// at least one byte, so both lengths fit in `isize` and their difference does too.
#[inline]
pub fn len_difference(a: &str, b: &str) -> isize {
    utf16_len(a) as isize - utf16_len(b) as isize
}

/// Maps a signed difference to the ordering it encodes.
#[inline]
pub fn from_difference(diff: isize) -> Ordering {
    diff.cmp(&0)
}
