//! Core building blocks for ChainStream sessions.
//!
//! Everything here is network-free: resolving the bearer credential from the
//! environment, loading a compiled module package from disk, assembling the
//! streaming request, and the sink trait the consumer delivers into. The
//! authenticated channel and the consumption loop live in
//! `chainstream-client`.
//!
//! - [`Credential`]: bearer token resolution, fail-fast when absent
//! - [`ModulePackage`]: whole-file load + decode of an `.spkg` artifact
//! - [`BlockRange`] / [`FinalityFilter`] / [`OutputSelector`] /
//!   [`build_stream_request`]: pure request assembly
//! - [`BlockSink`]: the injected per-block side effect, [`StdoutSink`]
//!   being the reference implementation
//! - [`SessionError`]: one error enum for the whole session lifecycle

pub mod config;
pub mod credential;
pub mod error;
pub mod package;
pub mod request;
pub mod sink;

pub use config::{StreamConfig, DEFAULT_ENDPOINT, DEFAULT_TOKEN_ENV};
pub use credential::Credential;
pub use error::{ErrorKind, SessionError};
pub use package::ModulePackage;
pub use request::{build_stream_request, BlockRange, FinalityFilter, OutputSelector};
pub use sink::{BlockSink, StdoutSink};
