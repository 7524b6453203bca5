//! Output sinks for streamed block data.

use async_trait::async_trait;

use chainstream_pb::v1 as pb;

use crate::error::SessionError;

/// Receives each streamed block's module outputs.
///
/// The consumer forwards every data message here in arrival order and aborts
/// the session if a delivery fails. Implementations decide what accepting a
/// response means: render it, enqueue it, record it in a test. Payload bytes
/// are opaque at this layer and stay that way.
#[async_trait]
pub trait BlockSink: Send + Sync {
    /// Sink name, for logs.
    fn name(&self) -> &str;

    /// Accept one block's outputs.
    async fn deliver(&mut self, data: &pb::BlockScopedData) -> Result<(), SessionError>;
}

/// Renders each block to standard output without decoding payload bytes.
///
/// One header line per block, then one line per module output with its
/// payload size, then any module logs the server attached.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BlockSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn deliver(&mut self, data: &pb::BlockScopedData) -> Result<(), SessionError> {
        match &data.clock {
            Some(clock) => println!(
                "block #{} ({}) step={}",
                clock.number,
                clock.id,
                data.step().as_str_name()
            ),
            None => println!("block #? step={}", data.step().as_str_name()),
        }

        for output in &data.outputs {
            match &output.data {
                Some(pb::module_output::Data::MapOutput(payload)) => {
                    println!("  {}: {} ({} bytes)", output.name, payload.type_url, payload.value.len());
                }
                Some(pb::module_output::Data::StoreDeltas(deltas)) => {
                    println!("  {}: {} store deltas", output.name, deltas.deltas.len());
                }
                None => {
                    println!("  {}: (no output)", output.name);
                }
            }
            for log in &output.logs {
                println!("    log: {log}");
            }
            if output.logs_truncated {
                println!("    (logs truncated)");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stdout_sink_accepts_any_block() {
        let data = pb::BlockScopedData {
            outputs: vec![pb::ModuleOutput {
                name: "graph_out".into(),
                logs: vec!["created pool".into()],
                logs_truncated: false,
                data: Some(pb::module_output::Data::MapOutput(::prost_types::Any {
                    type_url: "type.googleapis.com/entities".into(),
                    value: vec![1, 2, 3],
                })),
            }],
            clock: Some(pb::Clock {
                id: "0xabc".into(),
                number: 12_369_621,
                timestamp: None,
            }),
            step: pb::ForkStep::StepIrreversible as i32,
            cursor: "c1".into(),
        };

        let mut sink = StdoutSink::new();
        assert!(sink.deliver(&data).await.is_ok());
        assert_eq!(sink.name(), "stdout");
    }
}
