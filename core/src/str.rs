// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The [`Str`] type.
//!
//! A string that can hold borrowed, static, or shared data. Shared data is
//! reference counted so cloning an owned payload never copies the text.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A string value in a log record.
#[derive(Clone)]
pub enum Str<'a> {
    /// Borrowed for the record's lifetime.
    Borrowed(&'a str),
    /// Borrowed for `'static`.
    Static(&'static str),
    /// Shared ownership.
    Shared(Arc<str>),
}

impl Default for Str<'_> {
    fn default() -> Self {
        Str::Static("")
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get(), f)
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl Str<'static> {
    /// Create a string from a value borrowed for `'static`.
    pub const fn new(s: &'static str) -> Self {
        Str::Static(s)
    }

    /// Create a string with shared ownership of the given value.
    pub fn new_shared(s: impl Into<Arc<str>>) -> Self {
        Str::Shared(s.into())
    }
}

impl<'a> Str<'a> {
    /// Create a string from a value borrowed for `'a`.
    pub const fn new_ref(s: &'a str) -> Self {
        Str::Borrowed(s)
    }

    /// Get the inner string slice.
    pub fn get(&self) -> &str {
        match self {
            Str::Borrowed(s) => s,
            Str::Static(s) => s,
            Str::Shared(s) => s,
        }
    }

    /// Get the inner string slice, if it is borrowed for `'static`.
    pub const fn get_static(&self) -> Option<&'static str> {
        match self {
            Str::Static(s) => Some(s),
            _ => None,
        }
    }

    /// Create a new string borrowing from this one.
    pub fn by_ref(&self) -> Str<'_> {
        match self {
            Str::Borrowed(s) => Str::Borrowed(s),
            Str::Static(s) => Str::Static(s),
            Str::Shared(s) => Str::Shared(s.clone()),
        }
    }

    /// Extend the lifetime to `'static`, sharing the data if needed.
    pub fn to_static(&self) -> Str<'static> {
        match self {
            Str::Borrowed(s) => Str::Shared(Arc::from(*s)),
            Str::Static(s) => Str::Static(s),
            Str::Shared(s) => Str::Shared(s.clone()),
        }
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Str::Borrowed(s)
    }
}

impl From<String> for Str<'static> {
    fn from(s: String) -> Self {
        Str::Shared(Arc::from(s))
    }
}

impl PartialEq for Str<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for Str<'_> {}

impl PartialOrd for Str<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Str<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.get(), other.get())
    }
}

impl Hash for Str<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(self.get(), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_data_survives_to_static() {
        let s = Str::new("payload");
        assert_eq!(s.get_static(), Some("payload"));
        assert_eq!(s.to_static().get(), "payload");
    }

    #[test]
    fn shared_data_clones_cheaply() {
        let s = Str::new_shared(String::from("hello"));
        let t = s.clone();
        assert_eq!(s, t);
        assert_eq!(t.get(), "hello");
        assert_eq!(t.get_static(), None);
    }
}
