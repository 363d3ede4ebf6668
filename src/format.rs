//! Rendering helpers shared by `Either` and `Option`.
//!
//! Both sum types render as `Case[Type](value)`, where `Type` is the type of
//! the held value with module paths removed and `value` is its `Debug` form:
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::option::OptionExt;
//!
//! let parsed: Either<String, Vec<String>> = Either::Right(vec!["a".to_string()]);
//! assert_eq!(parsed.to_string(), r#"Right[Vec<String>](["a"])"#);
//!
//! assert_eq!(Some(3).display().to_string(), "Some[i32](3)");
//! assert_eq!(None::<u8>.display().to_string(), "None[u8]");
//! ```
//!
//! [`LogAttr`] is the structured counterpart used by the `log_attr`/`log`
//! helpers.

use std::fmt;

/// Returns the name of `T` with every module path stripped.
///
/// ```rust
/// use fpkit::format::type_label;
///
/// assert_eq!(type_label::<Vec<String>>(), "Vec<String>");
/// assert_eq!(type_label::<Option<(i32, &str)>>(), "Option<(i32, &str)>");
/// ```
pub fn type_label<T: ?Sized>() -> String {
    strip_paths(std::any::type_name::<T>())
}

fn strip_paths(full: &str) -> String {
    let mut label = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (index, character) in full.char_indices() {
        let is_path_character = character.is_alphanumeric() || character == '_' || character == ':';
        if !is_path_character {
            label.push_str(last_segment(&full[segment_start..index]));
            label.push(character);
            segment_start = index + character.len_utf8();
        }
    }
    label.push_str(last_segment(&full[segment_start..]));
    label
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// `Display` adapter for `Option`, returned by `OptionExt::display`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOption<'a, A>(pub(crate) &'a Option<A>);

impl<A: fmt::Debug> fmt::Display for DisplayOption<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(formatter, "Some[{}]({value:?})", type_label::<A>()),
            None => write!(formatter, "None[{}]", type_label::<A>()),
        }
    }
}

/// The field name of a [`LogAttr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKey {
    /// `Right` or `Some`.
    Value,
    /// `Left`.
    Error,
    /// `None`.
    None,
}

impl LogKey {
    /// The field name as written in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Error => "error",
            Self::None => "none",
        }
    }
}

impl fmt::Display for LogKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single structured-logging field describing a sum type value.
///
/// The key is `value` for `Right`/`Some`, `error` for `Left` and `none`
/// for `None`.
///
/// ```rust
/// use fpkit::either::Either;
/// use fpkit::format::LogKey;
///
/// let failed: Either<&str, i32> = Either::Left("timeout");
/// let attr = failed.log_attr();
/// assert_eq!(attr.key, LogKey::Error);
/// assert_eq!(attr.to_string(), r#"error="timeout""#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogAttr<'a> {
    /// Field name.
    pub key: LogKey,
    /// Field value, rendered with `Debug`.
    pub value: &'a dyn fmt::Debug,
}

impl<'a> LogAttr<'a> {
    pub(crate) const fn value(value: &'a dyn fmt::Debug) -> Self {
        Self { key: LogKey::Value, value }
    }

    pub(crate) const fn error(error: &'a dyn fmt::Debug) -> Self {
        Self { key: LogKey::Error, value: error }
    }

    pub(crate) const fn none() -> LogAttr<'static> {
        LogAttr { key: LogKey::None, value: &true }
    }

    /// Emits this field as a `DEBUG` event with target `fpkit::log` and `prefix` as the message.
    #[cfg(feature = "logging")]
    pub(crate) fn emit(self, prefix: &str) {
        match self.key {
            LogKey::Value => tracing::debug!(target: "fpkit::log", value = ?self.value, "{prefix}"),
            LogKey::Error => tracing::debug!(target: "fpkit::log", error = ?self.value, "{prefix}"),
            LogKey::None => tracing::debug!(target: "fpkit::log", none = true, "{prefix}"),
        }
    }
}

impl fmt::Display for LogAttr<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}={:?}", self.key, self.value)
    }
}
