//! Ordered consumption of one server stream.

use futures::{Stream, StreamExt};
use tonic::Status;
use tracing::{debug, info, trace, warn};

use chainstream_core::{BlockSink, SessionError};
use chainstream_pb::v1 as pb;

/// Lifecycle of a single streaming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No call has been issued yet.
    Idle,
    /// The server-streaming call is open and messages are arriving.
    Streaming,
    /// The server half-closed after the final block. Terminal.
    Completed,
    /// The stream or the sink failed. Terminal.
    Failed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            Self::Idle => "idle",
            Self::Streaming => "streaming",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(state)
    }
}

/// Drains a server stream into a sink, one message at a time.
///
/// The consumer is single-pass and strictly sequential: it suspends on the
/// next message, forwards block data to the sink, and only then asks for
/// more. There is no retry and no resume; both terminal states are final
/// for the session.
pub struct StreamConsumer {
    state: SessionState,
    delivered: u64,
}

impl StreamConsumer {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            delivered: 0,
        }
    }

    /// Where the session lifecycle currently stands.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Block data messages handed to the sink so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Consumes `stream` to completion, forwarding every block data message
    /// to `sink` in arrival order.
    ///
    /// Progress and snapshot messages are logged, not delivered. On clean
    /// server half-close the delivered count is returned; a mid-stream
    /// failure is returned as [`SessionError::Stream`] carrying the count
    /// of blocks delivered before the cut.
    pub async fn consume<S>(
        &mut self,
        mut stream: S,
        sink: &mut dyn BlockSink,
    ) -> Result<u64, SessionError>
    where
        S: Stream<Item = Result<pb::Response, Status>> + Unpin,
    {
        self.state = SessionState::Streaming;
        self.delivered = 0;

        while let Some(message) = stream.next().await {
            let response = match message {
                Ok(response) => response,
                Err(status) => {
                    self.state = SessionState::Failed;
                    warn!(delivered = self.delivered, code = %status.code(), "stream failed");
                    return Err(SessionError::Stream {
                        delivered: self.delivered,
                        source: status,
                    });
                }
            };

            match response.message {
                Some(pb::response::Message::Data(data)) => {
                    if let Err(err) = sink.deliver(&data).await {
                        self.state = SessionState::Failed;
                        warn!(
                            sink = sink.name(),
                            delivered = self.delivered,
                            "sink rejected delivery"
                        );
                        return Err(err);
                    }
                    self.delivered += 1;
                    trace!(
                        block = data.clock.as_ref().map(|c| c.number).unwrap_or_default(),
                        delivered = self.delivered,
                        "delivered block data"
                    );
                }
                Some(pb::response::Message::Progress(progress)) => {
                    for module in &progress.modules {
                        trace!(module = %module.name, "module progress");
                    }
                }
                Some(pb::response::Message::SnapshotData(snapshot)) => {
                    debug!(module = %snapshot.module_name, "skipping initial snapshot data");
                }
                Some(pb::response::Message::SnapshotComplete(_)) => {
                    debug!("initial snapshots complete");
                }
                None => {
                    debug!("response without a message body, skipping");
                }
            }
        }

        self.state = SessionState::Completed;
        info!(delivered = self.delivered, "stream completed");
        Ok(self.delivered)
    }
}

impl Default for StreamConsumer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chainstream_core::ErrorKind;
    use futures::stream;
    use std::sync::{Arc, Mutex};

    struct RecordingSink {
        blocks: Arc<Mutex<Vec<u64>>>,
    }

    impl RecordingSink {
        fn new() -> (Self, Arc<Mutex<Vec<u64>>>) {
            let blocks = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    blocks: Arc::clone(&blocks),
                },
                blocks,
            )
        }
    }

    #[async_trait]
    impl BlockSink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        async fn deliver(&mut self, data: &pb::BlockScopedData) -> Result<(), SessionError> {
            let number = data.clock.as_ref().map(|c| c.number).unwrap_or_default();
            self.blocks.lock().unwrap().push(number);
            Ok(())
        }
    }

    struct FailingSink {
        accept: u64,
        seen: u64,
    }

    #[async_trait]
    impl BlockSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        async fn deliver(&mut self, _data: &pb::BlockScopedData) -> Result<(), SessionError> {
            if self.seen == self.accept {
                return Err(SessionError::Sink {
                    reason: "sink is full".to_owned(),
                });
            }
            self.seen += 1;
            Ok(())
        }
    }

    fn data_response(number: u64) -> Result<pb::Response, Status> {
        let data = pb::BlockScopedData {
            outputs: vec![pb::ModuleOutput {
                name: "graph_out".to_owned(),
                logs: Vec::new(),
                logs_truncated: false,
                data: Some(pb::module_output::Data::MapOutput(::prost_types::Any {
                    type_url: "type.googleapis.com/test.Payload".to_owned(),
                    value: number.to_be_bytes().to_vec(),
                })),
            }],
            clock: Some(pb::Clock {
                id: format!("0x{number:x}"),
                number,
                timestamp: None,
            }),
            step: pb::ForkStep::StepIrreversible as i32,
            cursor: format!("cursor-{number}"),
        };
        Ok(pb::Response {
            message: Some(pb::response::Message::Data(data)),
        })
    }

    fn progress_response() -> Result<pb::Response, Status> {
        Ok(pb::Response {
            message: Some(pb::response::Message::Progress(pb::ModulesProgress {
                modules: vec![pb::ModuleProgress {
                    name: "store_pairs".to_owned(),
                    r#type: Some(pb::module_progress::Type::InitialState(
                        pb::module_progress::InitialState {
                            available_up_to_block: 12_369_600,
                        },
                    )),
                }],
            })),
        })
    }

    #[tokio::test]
    async fn blocks_reach_the_sink_in_arrival_order() {
        let responses = stream::iter(vec![
            data_response(12_369_621),
            data_response(12_369_622),
            data_response(12_369_623),
        ]);
        let (mut sink, blocks) = RecordingSink::new();

        let mut consumer = StreamConsumer::new();
        assert_eq!(consumer.state(), SessionState::Idle);

        let delivered = consumer.consume(responses, &mut sink).await.unwrap();

        assert_eq!(delivered, 3);
        assert_eq!(consumer.state(), SessionState::Completed);
        assert_eq!(*blocks.lock().unwrap(), vec![12_369_621, 12_369_622, 12_369_623]);
    }

    #[tokio::test]
    async fn mid_stream_failure_reports_the_delivered_count() {
        let responses = stream::iter(vec![
            data_response(100),
            data_response(101),
            Err(Status::unavailable("connection reset by peer")),
            data_response(102),
        ]);
        let (mut sink, blocks) = RecordingSink::new();

        let mut consumer = StreamConsumer::new();
        let err = consumer.consume(responses, &mut sink).await.unwrap_err();

        match err {
            SessionError::Stream { delivered, .. } => assert_eq!(delivered, 2),
            other => panic!("expected a stream error, got {other}"),
        }
        assert_eq!(consumer.state(), SessionState::Failed);
        assert_eq!(*blocks.lock().unwrap(), vec![100, 101]);
    }

    #[tokio::test]
    async fn progress_and_snapshots_are_not_delivered() {
        let responses = stream::iter(vec![
            progress_response(),
            data_response(7),
            Ok(pb::Response {
                message: Some(pb::response::Message::SnapshotComplete(
                    pb::InitialSnapshotComplete {
                        cursor: "snap".to_owned(),
                    },
                )),
            }),
        ]);
        let (mut sink, blocks) = RecordingSink::new();

        let delivered = StreamConsumer::new()
            .consume(responses, &mut sink)
            .await
            .unwrap();

        assert_eq!(delivered, 1);
        assert_eq!(*blocks.lock().unwrap(), vec![7]);
    }

    #[tokio::test]
    async fn progress_only_stream_delivers_nothing() {
        let responses = stream::iter(vec![progress_response(), progress_response()]);
        let (mut sink, blocks) = RecordingSink::new();

        let mut consumer = StreamConsumer::new();
        let delivered = consumer.consume(responses, &mut sink).await.unwrap();

        assert_eq!(delivered, 0);
        assert_eq!(consumer.state(), SessionState::Completed);
        assert!(blocks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_stream_completes_cleanly() {
        let responses = stream::iter(Vec::<Result<pb::Response, Status>>::new());
        let (mut sink, blocks) = RecordingSink::new();

        let mut consumer = StreamConsumer::new();
        let delivered = consumer.consume(responses, &mut sink).await.unwrap();

        assert_eq!(delivered, 0);
        assert_eq!(consumer.state(), SessionState::Completed);
        assert!(blocks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_before_any_block_reports_zero_delivered() {
        let responses = stream::iter(vec![Err::<pb::Response, _>(Status::internal(
            "backend went away",
        ))]);
        let (mut sink, _blocks) = RecordingSink::new();

        let err = StreamConsumer::new()
            .consume(responses, &mut sink)
            .await
            .unwrap_err();

        match err {
            SessionError::Stream { delivered, .. } => assert_eq!(delivered, 0),
            other => panic!("expected a stream error, got {other}"),
        }
    }

    #[tokio::test]
    async fn sink_failure_ends_the_session() {
        let responses = stream::iter(vec![
            data_response(1),
            data_response(2),
            data_response(3),
        ]);
        let mut sink = FailingSink { accept: 1, seen: 0 };

        let mut consumer = StreamConsumer::new();
        let err = consumer.consume(responses, &mut sink).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Sink);
        assert_eq!(consumer.state(), SessionState::Failed);
        assert_eq!(consumer.delivered(), 1);
    }

    #[test]
    fn states_render_for_logs() {
        assert_eq!(SessionState::Idle.to_string(), "idle");
        assert_eq!(SessionState::Streaming.to_string(), "streaming");
        assert_eq!(SessionState::Completed.to_string(), "completed");
        assert_eq!(SessionState::Failed.to_string(), "failed");
    }
}
