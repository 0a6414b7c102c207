//! Configuration for the TCP transport.

use std::net::{Ipv4Addr, SocketAddr};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 4611;

/// Configuration for [`serve`](crate::serve).
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,

    /// First line sent to a new connection.
    pub greeting: String,

    /// Line sent after the reply to `quit`; empty sends nothing.
    pub farewell: String,

    /// Longest accepted input line in bytes; longer lines close the
    /// connection.
    pub max_line_len: usize,

    /// Room new players start in. Content sets this; the default is blank.
    pub start_room: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            greeting: "What is your name?".to_string(),
            farewell: String::new(),
            max_line_len: 8 * 1024,
            start_room: String::new(),
        }
    }
}

impl ServerConfig {
    /// Creates a configuration starting players in `start_room`.
    #[must_use]
    pub fn new(start_room: impl Into<String>) -> Self {
        Self {
            start_room: start_room.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the listening address.
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Builder method to set the greeting line.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Builder method to set the farewell line.
    #[must_use]
    pub fn with_farewell(mut self, farewell: impl Into<String>) -> Self {
        self.farewell = farewell.into();
        self
    }

    /// Builder method to set the line length limit.
    #[must_use]
    pub fn with_max_line_len(mut self, max: usize) -> Self {
        self.max_line_len = max.max(1);
        self
    }
}
