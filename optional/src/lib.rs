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

//! A value container that is either present or absent.
//!
//! [`Optional`] wraps a value of type `T` or nothing, and exposes combinators that consume the value without a
//! null-checking burden on the caller.
//!
//! ```rust
//! use optional::prelude::*;
//!
//! let present = Optional::of("wow-string".to_string());
//! assert!(present.is_present());
//! assert_eq!(present.get(), "wow-string");
//!
//! let absent = Optional::<String>::empty();
//! assert_eq!(absent.try_get(), Err(Error::EmptyValue));
//! assert_eq!(absent.or_else_get(|| "super-wow-string".to_string()), "super-wow-string");
//! ```
//!
//! Accessing the value of an empty [`Optional`] through [`Optional::get`] panics with the sentinel
//! [`Error::EmptyValue`]. Use [`Optional::try_get`] where the absence must be handled.

/// Sentinel error for absent values.
pub mod error;
/// Bridging std [`Option`] into [`Optional`].
pub mod ext;
/// The [`Optional`] container.
pub mod optional;
/// The public surface of the crate.
pub mod prelude;

pub use error::{Error, Result};
pub use ext::OptionExt;
pub use optional::Optional;
