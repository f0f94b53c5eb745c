// Copyright 2026 foyer Project Authors
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

use std::{
    any::{type_name, Any},
    fmt::Display,
    panic::{panic_any, Location},
};

use crate::error::{Error, Result};

/// A value that is either present or absent.
///
/// The state of an [`Optional`] is decided when it is constructed and never changes afterwards: no method takes
/// `&mut self`, and the held value is never replaced. Build a new [`Optional`] to represent a different state.
///
/// Absence is stored as an explicit tag rather than as a null value, so an [`Optional`] can never be confused
/// between "holds nothing" and "holds a null". Wrap a reference by choosing `T = &U`.
///
/// The container is [`Clone`] but never [`Copy`], so the held value is only duplicated on request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> Optional<T> {
    /// Create an [`Optional`] without a value.
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Create an [`Optional`] holding the given value.
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create an [`Optional`] from a std [`Option`]. `None` becomes an empty optional.
    pub const fn from_option(value: Option<T>) -> Self {
        Self { value }
    }

    /// Return `true` if the optional holds no value.
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Return `true` if the optional holds a value.
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Get a reference to the held value.
    ///
    /// Check [`Optional::is_present`] before calling, or use [`Optional::try_get`] instead.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::EmptyValue`] as the payload if the optional is empty.
    #[track_caller]
    pub fn get(&self) -> &T {
        match self.value.as_ref() {
            Some(value) => value,
            None => raise(Error::EmptyValue),
        }
    }

    /// Get a reference to the held value, or [`Error::EmptyValue`] if the optional is empty.
    pub fn try_get(&self) -> Result<&T> {
        self.value.as_ref().ok_or(Error::EmptyValue)
    }

    /// Call `f` with the held value if there is one.
    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.value.as_ref() {
            f(value)
        }
    }

    /// Call `f` with the held value if there is one, otherwise call `g`.
    ///
    /// Exactly one of the two closures is called.
    pub fn if_present_or_else<F, G>(&self, f: F, g: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self.value.as_ref() {
            Some(value) => f(value),
            None => g(),
        }
    }

    /// Return the held value, or the result of `f` if the optional is empty.
    ///
    /// `f` is only called when there is no value.
    pub fn or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.value {
            Some(value) => value,
            None => f(),
        }
    }

    /// Return the held value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `err` as the payload if the optional is empty. The text of `err` is logged as an
    /// error event before unwinding.
    #[track_caller]
    pub fn or_else_panic<E>(self, err: E) -> T
    where
        E: Display + Any + Send + 'static,
    {
        match self.value {
            Some(value) => value,
            None => raise(err),
        }
    }

    /// Borrow the held value as `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Convert into a std [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

#[track_caller]
fn raise<E>(payload: E) -> !
where
    E: Display + Any + Send + 'static,
{
    let location = Location::caller();
    tracing::error!(
        error = %payload,
        payload = type_name::<E>(),
        %location,
        "[optional]: value accessed on empty optional"
    );
    panic_any(payload)
}
