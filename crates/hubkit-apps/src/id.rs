//! Identifier arguments and path segment encoding.

use std::fmt;

use crate::error::{AppsError, Result};

/// Opaque installation or repository identifier.
///
/// GitHub hands out numeric ids, but string ids are accepted so callers can
/// pass through whatever they stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// The identifier as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for ResourceId {
            fn from(id: $t) -> Self {
                Self(id.to_string())
            }
        })*
    };
}

impl_from_int!(u32, u64, i32, i64);

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}

/// Percent-encode `value` as one URL path segment.
///
/// Everything outside the RFC 3986 unreserved set is escaped, so `/`, `?`,
/// `#` and `%` can never change the shape of the path.
pub(crate) fn segment(name: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(AppsError::InvalidArgument { name });
    }
    Ok(urlencoding::encode(value).into_owned())
}
