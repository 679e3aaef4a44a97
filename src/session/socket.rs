use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

use log::debug;

use super::{Connector, Request, Session, SessionError};

/// Talks to the service over a Unix stream socket, one JSON object per line
/// in each direction. A reply carrying an `"error"` string is a rejection.
pub struct SocketConnector {
    path: PathBuf,
}

impl SocketConnector {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Connector for SocketConnector {
    fn connect(&self) -> Result<Box<dyn Session>, SessionError> {
        let stream = UnixStream::connect(&self.path).map_err(|source| SessionError::Connect {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(stream.try_clone()?);
        debug!("connected to {}", self.path.display());
        Ok(Box::new(SocketSession {
            reader,
            writer: stream,
            path: self.path.clone(),
        }))
    }
}

struct SocketSession {
    reader: BufReader<UnixStream>,
    writer: UnixStream,
    path: PathBuf,
}

impl Session for SocketSession {
    fn send(&mut self, request: &Request) -> Result<serde_json::Value, SessionError> {
        let mut line = serde_json::to_vec(request)?;
        line.push(b'\n');
        self.writer.write_all(&line)?;

        let mut reply = String::new();
        if self.reader.read_line(&mut reply)? == 0 {
            return Err(SessionError::Closed);
        }

        let reply: serde_json::Value = serde_json::from_str(&reply)?;
        if let Some(message) = reply.get("error").and_then(|e| e.as_str()) {
            return Err(SessionError::Rejected(message.to_string()));
        }
        Ok(reply)
    }
}

impl Drop for SocketSession {
    fn drop(&mut self) {
        debug!("closing session with {}", self.path.display());
    }
}
