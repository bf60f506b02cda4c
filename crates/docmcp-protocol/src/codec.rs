use crate::error::{ProtocolError, ProtocolResult};
use crate::message::{StreamMessage, EVENT_NAME};

/// Codec for the text/event-stream framing of announcement messages.
///
/// A frame is `event: message\ndata: <compact JSON>\n\n`. Compact JSON never
/// contains a raw newline, so one `data:` line per frame is enough.
pub struct EventStreamCodec;

impl EventStreamCodec {
    /// Encode a single frame.
    pub fn encode(msg: &StreamMessage) -> ProtocolResult<String> {
        let data = serde_json::to_string(msg)
            .map_err(|e| ProtocolError::Serialization(e.to_string()))?;
        Ok(format!("event: {EVENT_NAME}\ndata: {data}\n\n"))
    }

    /// Encode a sequence of frames into one body.
    pub fn encode_all(msgs: &[StreamMessage]) -> ProtocolResult<String> {
        msgs.iter().map(Self::encode).collect()
    }

    /// Decode every frame in `body`.
    pub fn decode_all(body: &str) -> ProtocolResult<Vec<StreamMessage>> {
        body.split("\n\n")
            .filter(|frame| !frame.trim().is_empty())
            .map(Self::decode_frame)
            .collect()
    }

    fn decode_frame(frame: &str) -> ProtocolResult<StreamMessage> {
        let mut event = None;
        let mut data = None;
        for line in frame.lines() {
            if let Some(value) = line.strip_prefix("event:") {
                event = Some(value.trim_start());
            } else if let Some(value) = line.strip_prefix("data:") {
                data = Some(value.trim_start());
            } else {
                return Err(ProtocolError::FramingError(format!("unexpected line: {line}")));
            }
        }
        match event {
            Some(EVENT_NAME) => {}
            Some(other) => {
                return Err(ProtocolError::FramingError(format!("unexpected event: {other}")))
            }
            None => return Err(ProtocolError::FramingError("missing event line".into())),
        }
        let data = data.ok_or_else(|| ProtocolError::FramingError("missing data line".into()))?;
        serde_json::from_str(data).map_err(|e| ProtocolError::Deserialization(e.to_string()))
    }
}
