// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by draw entry points.

use merkle_layout::TreeError;
use thiserror::Error;

/// A draw request could not be carried out.
///
/// An oversize tree is not an error: it produces
/// [`DrawOutcome::Overflow`](crate::DrawOutcome::Overflow).
#[derive(Debug, Error)]
pub enum DrawError {
    /// No container is registered under the requested key.
    #[error("no graph container registered under `{key}`; create it before drawing")]
    MissingContainer {
        /// The key that was looked up.
        key: String,
    },
    /// The tree document was rejected at the entry boundary.
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] TreeError),
}
