//! Stream request assembly.

use chainstream_pb::v1 as pb;

use crate::error::SessionError;
use crate::package::ModulePackage;

/// A bounded block range.
///
/// `stop_block` is the last block the caller wants included; the server owns
/// the authoritative interpretation and validation of the range. A negative
/// `start_block` is relative to the chain head, so no local ordering check
/// is possible or attempted, and `start == stop` is a legitimate
/// single-block request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start_block: i64,
    pub stop_block: u64,
}

impl BlockRange {
    pub fn new(start_block: i64, stop_block: u64) -> Self {
        Self { start_block, stop_block }
    }
}

/// Which chain-finality steps the stream should carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FinalityFilter {
    /// Only blocks the chain can no longer revert. The server buffers
    /// reorganisations internally and emits each block once, settled.
    #[default]
    IrreversibleOnly,
    /// New, undo, and irreversible steps, for callers tracking reorgs
    /// themselves.
    AllSteps,
}

impl FinalityFilter {
    /// The protocol fork steps this filter subscribes to.
    pub fn fork_steps(&self) -> &'static [pb::ForkStep] {
        match self {
            Self::IrreversibleOnly => &[pb::ForkStep::StepIrreversible],
            Self::AllSteps => {
                &[pb::ForkStep::StepNew, pb::ForkStep::StepUndo, pb::ForkStep::StepIrreversible]
            }
        }
    }
}

/// Ordered, duplicate-free list of modules whose outputs to stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSelector {
    modules: Vec<String>,
}

impl OutputSelector {
    /// Builds a selector, deduplicating while preserving first-seen order.
    ///
    /// At least one module name is required; an empty selector can never
    /// form a meaningful request.
    pub fn new(modules: Vec<String>) -> Result<Self, SessionError> {
        let mut unique = Vec::with_capacity(modules.len());
        for name in modules {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            return Err(SessionError::InvalidRequest {
                reason: "output selector must name at least one module".into(),
            });
        }
        Ok(Self { modules: unique })
    }

    /// Selected module names, in order.
    pub fn names(&self) -> &[String] {
        &self.modules
    }
}

/// Assembles the streaming request from its parts.
///
/// Pure: clones the module graph out of `package` and mutates nothing.
/// Selector names are deliberately not checked against the package's module
/// names; the server resolves the graph and rejects unknown output modules
/// itself, and duplicating that validation here would only let the two
/// drift apart.
pub fn build_stream_request(
    package: &ModulePackage,
    range: BlockRange,
    finality: FinalityFilter,
    selector: &OutputSelector,
) -> Result<pb::Request, SessionError> {
    let modules = package.modules().cloned().ok_or_else(|| SessionError::InvalidRequest {
        reason: "package carries no module graph".into(),
    })?;

    let mut request = pb::Request {
        start_block_num: range.start_block,
        stop_block_num: range.stop_block,
        modules: Some(modules),
        output_modules: selector.names().to_vec(),
        ..Default::default()
    };
    for step in finality.fork_steps() {
        request.push_fork_steps(*step);
    }
    Ok(request)
}
