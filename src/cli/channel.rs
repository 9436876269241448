//! Newline-delimited JSON method channel
//!
//! Each inbound line is one call envelope:
//!
//! ```text
//! {"id": 7, "channel": "local_notifier", "method": "notify", "arguments": {...}}
//! ```
//!
//! and each outbound line is the matching reply, carrying the same `id`:
//!
//! ```text
//! {"id": 7, "result": true}
//! {"id": 7, "error": {"code": "INVALID_ARGUMENTS", "message": "...", "details": null}}
//! {"id": 7, "notImplemented": true}
//! ```
//!
//! Calls run concurrently, so replies may arrive out of order.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::application::ports::NotificationCenter;
use crate::application::NotificationBridge;
use crate::domain::method::{MethodCall, MethodError, MethodResponse};

/// Error code for lines that are not a valid call envelope
pub const MALFORMED_CALL: &str = "MALFORMED_CALL";

/// Inbound call envelope
#[derive(Debug, Clone, Deserialize)]
pub struct CallEnvelope {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub channel: Option<String>,
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Outbound reply envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<MethodError>,
    #[serde(
        default,
        rename = "notImplemented",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub not_implemented: bool,
}

impl ReplyEnvelope {
    /// Wrap a method response for the call with the given id
    pub fn new(id: Value, response: MethodResponse) -> Self {
        let mut reply = Self {
            id,
            result: None,
            error: None,
            not_implemented: false,
        };
        match response {
            MethodResponse::Success(value) => reply.result = Some(value),
            MethodResponse::Error(err) => reply.error = Some(err),
            MethodResponse::NotImplemented => reply.not_implemented = true,
        }
        reply
    }
}

/// Method channel bound to a bridge
pub struct MethodChannel<C> {
    name: String,
    bridge: NotificationBridge<C>,
}

impl<C> Clone for MethodChannel<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            bridge: self.bridge.clone(),
        }
    }
}

impl<C: NotificationCenter + 'static> MethodChannel<C> {
    pub fn new(name: impl Into<String>, bridge: NotificationBridge<C>) -> Self {
        Self {
            name: name.into(),
            bridge,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decode one raw line, route it, and build the reply.
    ///
    /// A line that is not a valid envelope gets a `MALFORMED_CALL` reply,
    /// carrying the call's `id` when one could be read.
    pub async fn dispatch(&self, line: &[u8]) -> ReplyEnvelope {
        let value: Value = match serde_json::from_slice(line) {
            Ok(value) => value,
            Err(e) => return malformed(Value::Null, e),
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let envelope: CallEnvelope = match serde_json::from_value(value) {
            Ok(envelope) => envelope,
            Err(e) => return malformed(id, e),
        };

        if let Some(channel) = envelope.channel.as_deref() {
            if channel != self.name {
                tracing::debug!(channel, "call addressed to another channel");
                return ReplyEnvelope::new(envelope.id, MethodResponse::NotImplemented);
            }
        }

        let call = MethodCall::new(envelope.method, envelope.arguments);
        let response = self.bridge.handle(call).await;
        ReplyEnvelope::new(envelope.id, response)
    }

    /// Serve calls from `reader` until EOF, writing replies to `writer`.
    ///
    /// Each call runs on its own task. Returns the writer after every
    /// in-flight call has replied.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> io::Result<W>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ReplyEnvelope>(64);
        let writer_task = tokio::spawn(write_replies(rx, writer));

        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        let read_result = loop {
            line.clear();
            match reader.read_until(b'\n', &mut line).await {
                Ok(0) => break Ok(()),
                Ok(_) => {}
                Err(e) => break Err(e),
            }
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let channel = self.clone();
            let tx = tx.clone();
            let call_line = line.clone();
            tokio::spawn(async move {
                let reply = channel.dispatch(&call_line).await;
                if tx.send(reply).await.is_err() {
                    tracing::warn!("reply dropped: writer closed");
                }
            });
        };

        // Writer finishes once every spawned call has dropped its sender
        drop(tx);
        let writer = writer_task.await.map_err(io::Error::other)??;
        read_result.map(|()| writer)
    }
}

fn malformed(id: Value, err: serde_json::Error) -> ReplyEnvelope {
    tracing::warn!(error = %err, "malformed method call");
    ReplyEnvelope::new(
        id,
        MethodResponse::Error(MethodError::new(MALFORMED_CALL, err.to_string())),
    )
}

async fn write_replies<W>(mut rx: mpsc::Receiver<ReplyEnvelope>, mut writer: W) -> io::Result<W>
where
    W: AsyncWrite + Unpin,
{
    while let Some(reply) = rx.recv().await {
        let mut line = serde_json::to_vec(&reply)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    Ok(writer)
}
