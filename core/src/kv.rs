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

//! Key-value pairs carried by log records.

use value_bag::OwnedValueBag;
use value_bag::ValueBag;

use crate::Error;
use crate::str::Str;

/// Represents a value in a key-value pair.
pub type Value<'a> = ValueBag<'a>;

pub(crate) type ValueOwned = OwnedValueBag;

/// Represents a key in a key-value pair.
#[derive(Debug, Clone)]
pub struct Key<'a>(Str<'a>);

impl<'a> Key<'a> {
    /// Get the key string.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    pub(crate) fn to_owned(&self) -> KeyOwned {
        KeyOwned(self.0.to_static())
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(key: &'a str) -> Self {
        Key(Str::new_ref(key))
    }
}

impl PartialEq for Key<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Key<'_> {}

#[derive(Debug, Clone)]
pub(crate) struct KeyOwned(Str<'static>);

impl KeyOwned {
    pub(crate) fn by_ref(&self) -> Key<'_> {
        Key(self.0.by_ref())
    }
}

/// A visitor to walk through key-value pairs.
pub trait Visitor {
    /// Visit a key-value pair.
    fn visit(&mut self, key: Key<'_>, value: Value<'_>) -> Result<(), Error>;
}

/// The key-value pairs attached to a log record.
#[derive(Debug, Clone, Default)]
pub struct KeyValues<'a> {
    inner: Inner<'a>,
}

#[derive(Debug, Clone, Default)]
enum Inner<'a> {
    #[default]
    Empty,
    Borrowed(&'a [(Key<'a>, Value<'a>)]),
    Owned(&'a [(KeyOwned, ValueOwned)]),
}

impl<'a> KeyValues<'a> {
    /// The number of pairs.
    pub fn len(&self) -> usize {
        match self.inner {
            Inner::Empty => 0,
            Inner::Borrowed(kvs) => kvs.len(),
            Inner::Owned(kvs) => kvs.len(),
        }
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk all pairs with the given visitor.
    pub fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), Error> {
        match self.inner {
            Inner::Empty => Ok(()),
            Inner::Borrowed(kvs) => {
                for (k, v) in kvs {
                    visitor.visit(k.clone(), v.clone())?;
                }
                Ok(())
            }
            Inner::Owned(kvs) => {
                for (k, v) in kvs {
                    visitor.visit(k.by_ref(), v.by_ref())?;
                }
                Ok(())
            }
        }
    }

    pub(crate) fn to_vec(&self) -> Vec<(KeyOwned, ValueOwned)> {
        struct Collect(Vec<(KeyOwned, ValueOwned)>);

        impl Visitor for Collect {
            fn visit(&mut self, key: Key<'_>, value: Value<'_>) -> Result<(), Error> {
                self.0.push((key.to_owned(), value.to_owned()));
                Ok(())
            }
        }

        let mut collect = Collect(Vec::with_capacity(self.len()));
        // SAFETY: the collecting visitor never fails
        self.visit(&mut collect).unwrap();
        collect.0
    }
}

impl<'a> From<&'a [(Key<'a>, Value<'a>)]> for KeyValues<'a> {
    fn from(kvs: &'a [(Key<'a>, Value<'a>)]) -> Self {
        KeyValues {
            inner: Inner::Borrowed(kvs),
        }
    }
}

impl<'a> From<&'a [(KeyOwned, ValueOwned)]> for KeyValues<'a> {
    fn from(kvs: &'a [(KeyOwned, ValueOwned)]) -> Self {
        KeyValues {
            inner: Inner::Owned(kvs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Render(String);

    impl Visitor for Render {
        fn visit(&mut self, key: Key<'_>, value: Value<'_>) -> Result<(), Error> {
            use std::fmt::Write;

            write!(&mut self.0, " {}={}", key.as_str(), value).unwrap();
            Ok(())
        }
    }

    #[test]
    fn visit_borrowed_pairs() {
        let kvs = [(Key::from("vin"), Value::from("WVW123")), (Key::from("ecu"), Value::from(7))];
        let kvs = KeyValues::from(kvs.as_slice());
        assert_eq!(kvs.len(), 2);

        let mut render = Render(String::new());
        kvs.visit(&mut render).unwrap();
        assert_eq!(render.0, " vin=WVW123 ecu=7");
    }

    #[test]
    fn owned_pairs_round_trip() {
        let kvs = [(Key::from("gear"), Value::from("R"))];
        let owned = KeyValues::from(kvs.as_slice()).to_vec();
        let kvs = KeyValues::from(owned.as_slice());

        let mut render = Render(String::new());
        kvs.visit(&mut render).unwrap();
        assert_eq!(render.0, " gear=R");
    }
}
