use std::io::Write;

use log::debug;

use super::{Connector, Request, Session, SessionError};

/// Connector used when no service socket is configured: every request is
/// printed as one JSON line and answered with `null`.
pub struct DryRunConnector {
    out: fn() -> Box<dyn Write>,
}

impl Default for DryRunConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl DryRunConnector {
    pub fn new() -> Self {
        Self {
            out: || Box::new(std::io::stdout()),
        }
    }
}

impl Connector for DryRunConnector {
    fn connect(&self) -> Result<Box<dyn Session>, SessionError> {
        debug!("opening dry-run session");
        Ok(Box::new(DryRunSession { out: (self.out)() }))
    }
}

struct DryRunSession {
    out: Box<dyn Write>,
}

impl Session for DryRunSession {
    fn send(&mut self, request: &Request) -> Result<serde_json::Value, SessionError> {
        serde_json::to_writer(&mut self.out, request)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(serde_json::Value::Null)
    }
}
