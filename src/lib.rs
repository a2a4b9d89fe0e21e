use std::cmp::Ordering;

/// A named ordering rule over strings.
pub trait Order {
    fn name() -> String;

    fn compare(a: &str, b: &str) -> Ordering;
}

// Expects a `compare` function in the invoking module.
macro_rules! order_impl {
    ($name:expr) => {
        pub struct OrderImpl {}

        impl $crate::Order for OrderImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn compare(a: &str, b: &str) -> std::cmp::Ordering {
                compare(a, b)
            }
        }
    };
}

pub mod compare;
pub mod orders;
pub mod samples;

pub use samples::SampleStrings;
