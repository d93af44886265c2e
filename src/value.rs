//! Validation of dynamically typed values handed to the set.
//!
//! Statically typed callers go through `AsRef<str>` and never reach this module.
//! Values that arrive as `&dyn Any` (plugin hosts, scripting bridges, decoded
//! configuration) are checked here before the set is touched.
use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::{Error, Result};

/// A borrowed string-like value, or a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrLike<'a> {
    /// A string slice
    Str(&'a str),
    /// A lone `char`, treated as a one-unit string
    Unit(char),
}

impl<'a> StrLike<'a> {
    /// Calls `f` with the value viewed as a `&str`.
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        match self {
            StrLike::Str(s) => f(s),
            StrLike::Unit(c) => {
                let mut buf = [0u8; 4];
                f(c.encode_utf8(&mut buf))
            }
        }
    }
}

/// Views `value` as a string if it is one of the string-like types.
///
/// Accepted: `String`, `&str`, `Box<str>`, `Cow<str>`, `Rc<str>`, `Arc<str>`
/// and `char`. A `Box<dyn Any>` (or `Box<dyn Any + Send>`) is looked through to
/// its contents. Anything else yields [`Error::TypeMismatch`] carrying the
/// `TypeId` of the rejected value.
///
/// ```rust
/// use prefix_set::value::{as_str_like, StrLike};
///
/// let owned = String::from("hello");
/// assert_eq!(as_str_like(&owned).unwrap(), StrLike::Str("hello"));
/// assert!(as_str_like(&42u32).is_err());
/// ```
pub fn as_str_like(value: &dyn Any) -> Result<StrLike<'_>> {
    if let Some(inner) = value.downcast_ref::<Box<dyn Any>>() {
        return as_str_like(&**inner);
    }
    if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send>>() {
        return as_str_like(&**inner);
    }
    if let Some(s) = value.downcast_ref::<String>() {
        return Ok(StrLike::Str(s.as_str()));
    }
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Ok(StrLike::Str(s));
    }
    if let Some(s) = value.downcast_ref::<Box<str>>() {
        return Ok(StrLike::Str(s));
    }
    if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        return Ok(StrLike::Str(s.as_ref()));
    }
    if let Some(s) = value.downcast_ref::<Rc<str>>() {
        return Ok(StrLike::Str(s));
    }
    if let Some(s) = value.downcast_ref::<Arc<str>>() {
        return Ok(StrLike::Str(s));
    }
    if let Some(c) = value.downcast_ref::<char>() {
        return Ok(StrLike::Unit(*c));
    }

    Err(Error::TypeMismatch {
        found: Any::type_id(value),
    })
}

/// Validates every value up front, returning the first mismatch.
pub(crate) fn all_str_like<'a>(values: &[&'a dyn Any]) -> Result<Vec<StrLike<'a>>> {
    values.iter().map(|value| as_str_like(*value)).collect()
}
