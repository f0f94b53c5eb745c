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

/// Error raised when an absent [`Optional`](crate::Optional) is asked for its value.
///
/// `Error` is a sentinel: every absent-value failure reuses the same variant, whether it is returned by
/// [`Optional::try_get`](crate::Optional::try_get) or carried as the panic payload of
/// [`Optional::get`](crate::Optional::get).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The optional holds no value.
    #[error("tried to get empty value")]
    EmptyValue,
}

/// Optional result.
pub type Result<T> = std::result::Result<T, Error>;
