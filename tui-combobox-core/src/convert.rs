//! Value-to-string conversion and container-supplied predicates

use std::fmt::Display;
use std::rc::Rc;

use crate::error::Result;

/// Maps an item value to the string used for display and default search
///
/// Closures of the shape `Fn(Option<&T>) -> Result<String>` implement this
/// trait, so most callers never name it.
pub trait Converter<T> {
    fn to_display(&self, value: Option<&T>) -> Result<String>;
}

impl<T, F> Converter<T> for F
where
    F: Fn(Option<&T>) -> Result<String>,
{
    fn to_display(&self, value: Option<&T>) -> Result<String> {
        self(value)
    }
}

/// Converter that uses the value's `Display` form
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayConverter;

impl<T: Display> Converter<T> for DisplayConverter {
    fn to_display(&self, value: Option<&T>) -> Result<String> {
        Ok(display_or_empty(value))
    }
}

/// `Display` form of a value, or the empty string when absent
pub fn display_or_empty<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Shared converter handle
pub type SharedConverter<T> = Rc<dyn Converter<T>>;

/// Custom search predicate: `(value, text, normalized search) -> visible`
pub type SearchFn<T> = Rc<dyn Fn(Option<&T>, Option<&str>, &str) -> bool>;

/// Per-value disable predicate
pub type ItemDisabledFn<T> = Rc<dyn Fn(Option<&T>) -> bool>;
