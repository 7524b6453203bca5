//! Protocol types for the `sf.substreams.v1` streaming service.
//!
//! The module below is `prost`/`tonic` output for the upstream protocol
//! definitions, vendored so that building this workspace does not require a
//! protobuf toolchain. Regenerate with `tonic-build` against the upstream
//! `sf/substreams/v1/*.proto` files when the protocol revs.

/// `sf.substreams.v1` protocol package.
pub mod v1 {
    include!("sf.substreams.v1.rs");
}
