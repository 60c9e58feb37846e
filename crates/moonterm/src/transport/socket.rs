//! Websocket topic channel.
//!
//! A worker thread owns the socket. It drains queued requests, polls the
//! socket with a short read timeout and forwards every decoded reply to the
//! main loop. There is no reconnect: once the socket drops, later emits fail
//! with `TransportError::Closed`.

use std::io;
use std::net::TcpStream;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{connect, Message, WebSocket};

use super::{Envelope, Reply, Request, Transport, TransportStatus};
use crate::errors::TransportError;
use crate::events::AppEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Socket = WebSocket<MaybeTlsStream<TcpStream>>;

pub struct SocketTransport {
    outbound: Sender<Request>,
}

impl SocketTransport {
    /// Start the worker thread and queue the handshake.
    pub fn spawn(endpoint: &str, events: Sender<AppEvent>) -> Self {
        let (outbound, queue) = mpsc::channel();
        let endpoint = endpoint.to_string();
        thread::spawn(move || run_worker(&endpoint, queue, events));
        Self { outbound }
    }
}

impl Transport for SocketTransport {
    fn emit(&mut self, request: Request) -> Result<(), TransportError> {
        debug!(topic = request.topic_name(), "queue request");
        self.outbound
            .send(request)
            .map_err(|_| TransportError::Closed)
    }
}

/// Build the websocket URL for an endpoint such as `localhost:8888`.
pub(crate) fn socket_url(endpoint: &str) -> Result<String, TransportError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() || endpoint.contains(char::is_whitespace) {
        return Err(TransportError::InvalidEndpoint(endpoint.to_string()));
    }
    if endpoint.starts_with("ws://") || endpoint.starts_with("wss://") {
        return Ok(endpoint.to_string());
    }
    if endpoint.contains("://") {
        return Err(TransportError::InvalidEndpoint(endpoint.to_string()));
    }
    Ok(format!("ws://{}/", endpoint.trim_end_matches('/')))
}

/// Decode one inbound text frame; frames that are not envelopes are dropped.
pub(crate) fn decode_frame(text: &str) -> Option<Reply> {
    match serde_json::from_str::<Envelope>(text) {
        Ok(envelope) => {
            let topic = envelope.topic.clone();
            let reply = envelope.into_reply();
            if reply.is_none() {
                debug!(%topic, "ignoring frame with unknown topic");
            }
            reply
        }
        Err(err) => {
            warn!(error = %err, "dropping undecodable frame");
            None
        }
    }
}

fn run_worker(endpoint: &str, queue: Receiver<Request>, events: Sender<AppEvent>) {
    let mut socket = match open(endpoint) {
        Ok(socket) => socket,
        Err(err) => {
            warn!(error = %err, endpoint, "socket connect failed");
            let _ = events.send(AppEvent::Transport(TransportStatus::Disconnected(Some(
                err.to_string(),
            ))));
            return;
        }
    };
    info!(endpoint, "socket connected");

    if let Err(err) = send_request(&mut socket, &Request::Handshake) {
        warn!(error = %err, "handshake failed");
        let _ = events.send(AppEvent::Transport(TransportStatus::Disconnected(Some(
            err.to_string(),
        ))));
        return;
    }
    if events
        .send(AppEvent::Transport(TransportStatus::Connected))
        .is_err()
    {
        return;
    }

    let reason = pump(&mut socket, &queue, &events);
    match &reason {
        Some(reason) => warn!(%reason, "socket disconnected"),
        None => info!("socket closed"),
    }
    let _ = socket.close(None);
    let _ = events.send(AppEvent::Transport(TransportStatus::Disconnected(reason)));
}

fn open(endpoint: &str) -> Result<Socket, TransportError> {
    let url = socket_url(endpoint)?;
    let (socket, _) = connect(url.as_str()).map_err(|err| TransportError::Connect(err.to_string()))?;
    if let MaybeTlsStream::Plain(stream) = socket.get_ref() {
        stream
            .set_read_timeout(Some(POLL_INTERVAL))
            .map_err(|err| TransportError::Io(err.to_string()))?;
    }
    Ok(socket)
}

fn send_request(socket: &mut Socket, request: &Request) -> Result<(), TransportError> {
    let text = serde_json::to_string(&request.to_envelope())
        .map_err(|err| TransportError::Io(err.to_string()))?;
    socket
        .send(Message::Text(text))
        .map_err(|err| TransportError::Io(err.to_string()))
}

/// Run until the socket drops. Returns the failure reason, `None` on a clean close.
fn pump(socket: &mut Socket, queue: &Receiver<Request>, events: &Sender<AppEvent>) -> Option<String> {
    loop {
        loop {
            match queue.try_recv() {
                Ok(request) => {
                    if let Err(err) = send_request(socket, &request) {
                        return Some(err.to_string());
                    }
                }
                Err(TryRecvError::Empty) => break,
                // The app is gone.
                Err(TryRecvError::Disconnected) => return None,
            }
        }

        let text = match socket.read() {
            Ok(Message::Text(text)) => text,
            Ok(Message::Binary(bytes)) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => {
                    warn!(error = %err, "dropping non-utf8 frame");
                    continue;
                }
            },
            Ok(Message::Close(_)) => return None,
            Ok(_) => continue,
            Err(tungstenite::Error::Io(err))
                if matches!(
                    err.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
                ) =>
            {
                continue
            }
            Err(tungstenite::Error::ConnectionClosed) => return None,
            Err(err) => return Some(err.to_string()),
        };

        if let Some(reply) = decode_frame(&text) {
            if events.send(AppEvent::Reply(reply)).is_err() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Topic;
    use serde_json::json;

    #[test]
    fn socket_url_wraps_host_and_port() {
        assert_eq!(socket_url("localhost:8888").expect("url"), "ws://localhost:8888/");
        assert_eq!(socket_url(" moon.example:80/ ").expect("url"), "ws://moon.example:80/");
        assert_eq!(socket_url("wss://moon.example/ws").expect("url"), "wss://moon.example/ws");
    }

    #[test]
    fn socket_url_rejects_bad_endpoints() {
        assert!(matches!(socket_url(""), Err(TransportError::InvalidEndpoint(_))));
        assert!(matches!(socket_url("local host"), Err(TransportError::InvalidEndpoint(_))));
        assert!(matches!(
            socket_url("http://localhost:8888"),
            Err(TransportError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn decode_frame_keeps_known_topics() {
        let reply = decode_frame(r#"{"topic":"weather","data":"{\"data\":{}}"}"#).expect("reply");
        assert_eq!(reply.topic, Topic::Weather);
        assert_eq!(reply.data, json!("{\"data\":{}}"));

        assert!(decode_frame(r#"{"topic":"terminal","data":1}"#).is_none());
        assert!(decode_frame("not json").is_none());
    }

    #[test]
    fn emit_fails_once_worker_is_gone() {
        let (outbound, queue) = mpsc::channel();
        drop(queue);
        let mut transport = SocketTransport { outbound };
        let err = transport.emit(Request::Weather).unwrap_err();
        assert!(matches!(err, TransportError::Closed));
    }
}
