//! Outbound requests and inbound replies.
//!
//! Two collaborators carry traffic away from the shell:
//! - socket.rs: a websocket topic channel (`ai`, `define`, `weather`, `stock`)
//! - http.rs: a one-shot HTTP fetch for jokes
//!
//! Both are fire-and-forget. Results come back later as `AppEvent`s and are
//! matched to their request by topic only.

mod http;
mod socket;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::TransportError;

pub use http::JokeClient;
pub use socket::SocketTransport;

/// Greeting sent once after the socket connects.
pub const HANDSHAKE_TEXT: &str = "Hello";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Ai,
    Define,
    Weather,
    Stock,
    Memo,
}

impl Topic {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ai" => Some(Self::Ai),
            "define" => Some(Self::Define),
            "weather" => Some(Self::Weather),
            "stock" => Some(Self::Stock),
            "memo" => Some(Self::Memo),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Define => "define",
            Self::Weather => "weather",
            Self::Stock => "stock",
            Self::Memo => "memo",
        }
    }
}

/// A request handed to the socket transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Handshake,
    Ai(String),
    Define(String),
    Weather,
    Stock(String),
}

impl Request {
    pub fn topic_name(&self) -> &'static str {
        match self {
            Request::Handshake => "message",
            Request::Ai(_) => Topic::Ai.name(),
            Request::Define(_) => Topic::Define.name(),
            Request::Weather => Topic::Weather.name(),
            Request::Stock(_) => Topic::Stock.name(),
        }
    }

    pub fn to_envelope(&self) -> Envelope {
        let data = match self {
            Request::Handshake => Value::String(HANDSHAKE_TEXT.to_string()),
            Request::Ai(text) | Request::Define(text) | Request::Stock(text) => {
                Value::String(text.clone())
            }
            Request::Weather => Value::Null,
        };
        Envelope {
            topic: self.topic_name().to_string(),
            data,
        }
    }
}

/// One websocket frame: `{"topic": "...", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub topic: String,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Convert an inbound frame into a reply, dropping unknown topics.
    pub fn into_reply(self) -> Option<Reply> {
        let topic = Topic::parse(&self.topic)?;
        Some(Reply {
            topic,
            data: self.data,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub topic: Topic,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportStatus {
    Connected,
    Disconnected(Option<String>),
}

/// Sends topic requests to the backend.
pub trait Transport {
    fn emit(&mut self, request: Request) -> Result<(), TransportError>;
}

/// Starts HTTP fetches whose results arrive as events.
pub trait Fetcher {
    fn fetch_joke(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requests_serialize_as_topic_envelopes() {
        let frame = serde_json::to_value(Request::Stock("AAPL".to_string()).to_envelope())
            .expect("serialize");
        assert_eq!(frame, json!({ "topic": "stock", "data": "AAPL" }));

        let frame = serde_json::to_value(Request::Weather.to_envelope()).expect("serialize");
        assert_eq!(frame, json!({ "topic": "weather", "data": null }));

        let frame = serde_json::to_value(Request::Handshake.to_envelope()).expect("serialize");
        assert_eq!(frame, json!({ "topic": "message", "data": "Hello" }));
    }

    #[test]
    fn inbound_frames_become_replies() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"topic":"define","data":"a word"}"#).expect("parse");
        let reply = envelope.into_reply().expect("reply");
        assert_eq!(reply.topic, Topic::Define);
        assert_eq!(reply.data, json!("a word"));
    }

    #[test]
    fn unknown_topics_are_dropped() {
        let envelope = Envelope {
            topic: "terminal".to_string(),
            data: Value::Null,
        };
        assert!(envelope.into_reply().is_none());
    }

    #[test]
    fn missing_data_defaults_to_null() {
        let envelope: Envelope = serde_json::from_str(r#"{"topic":"memo"}"#).expect("parse");
        assert_eq!(envelope.data, Value::Null);
    }
}
