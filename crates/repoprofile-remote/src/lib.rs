//! # repoprofile-remote
//!
//! Everything that touches the remote side of a profiling run:
//!
//! - [`RepoReference`]: owner/name extraction from a repository URL string
//!   (pure, no I/O)
//! - [`fetch`]: shallow clone of the repository into an ephemeral
//!   [`WorkingCopy`] that is removed when dropped
//!
//! The two error conditions here ([`RemoteError::InvalidReference`] and the
//! clone failures) are the only fatal errors in the whole pipeline; every
//! scanner downstream degrades gracefully instead.

pub mod error;
pub mod fetch;
pub mod reference;

pub use error::{RemoteError, Result};
pub use fetch::{fetch, WorkingCopy};
pub use reference::RepoReference;
