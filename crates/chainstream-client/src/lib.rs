//! Authenticated session building and stream consumption for the
//! `sf.substreams.v1` service.
//!
//! The crate splits the network path into three small pieces:
//!
//! - [`AuthInterceptor`] attaches the bearer credential to every call.
//! - [`SessionBuilder`] assembles a TLS channel descriptor and binds the
//!   typed service handle without touching the network.
//! - [`StreamConsumer`] drains one server stream into a
//!   [`BlockSink`](chainstream_core::BlockSink), tracking the session
//!   lifecycle and the number of delivered blocks.
//!
//! ```no_run
//! use chainstream_client::{SessionBuilder, StreamConsumer};
//! use chainstream_core::{
//!     build_stream_request, BlockRange, Credential, FinalityFilter, ModulePackage,
//!     OutputSelector, StdoutSink,
//! };
//!
//! # async fn run() -> Result<(), chainstream_core::SessionError> {
//! let credential = Credential::resolve("SUBSTREAMS_API_TOKEN")?;
//! let package = ModulePackage::load("uniswap-v3-v0.1.0-beta.spkg")?;
//!
//! let selector = OutputSelector::new(vec!["graph_out".into()])?;
//! let request = build_stream_request(
//!     &package,
//!     BlockRange::new(12_369_621, 12_369_800),
//!     FinalityFilter::IrreversibleOnly,
//!     &selector,
//! )?;
//!
//! let mut session = SessionBuilder::new("api.streamingfast.io:443")
//!     .credential(credential)
//!     .build()?;
//! let stream = session.open(request).await?;
//!
//! let mut sink = StdoutSink::new();
//! let delivered = StreamConsumer::new().consume(stream, &mut sink).await?;
//! println!("stream completed after {delivered} blocks");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod connect;
pub mod consumer;

pub use auth::AuthInterceptor;
pub use connect::{SessionBuilder, StreamSession};
pub use consumer::{SessionState, StreamConsumer};
