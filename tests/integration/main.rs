mod builtin_commands;
mod custom_grammar;
mod socket_service;

use std::sync::{Arc, Mutex};

use rstest::fixture;

use lmctl::commands::build_grammar;
use lmctl::interpreter::CommandGrammar;
use lmctl::session::{Connector, Request, Session, SessionError};

#[fixture]
fn grammar() -> CommandGrammar {
    build_grammar().unwrap()
}

/// Everything a [`RecordingConnector`] saw.
#[derive(Default)]
struct Log {
    connects: usize,
    requests: Vec<Request>,
}

/// Accepts every request, remembers it and replies `null`.
#[derive(Clone, Default)]
struct RecordingConnector {
    log: Arc<Mutex<Log>>,
}

impl RecordingConnector {
    fn requests(&self) -> Vec<Request> {
        self.log.lock().unwrap().requests.clone()
    }

    fn connects(&self) -> usize {
        self.log.lock().unwrap().connects
    }
}

impl Connector for RecordingConnector {
    fn connect(&self) -> Result<Box<dyn Session>, SessionError> {
        self.log.lock().unwrap().connects += 1;
        Ok(Box::new(RecordingSession {
            log: Arc::clone(&self.log),
        }))
    }
}

struct RecordingSession {
    log: Arc<Mutex<Log>>,
}

impl Session for RecordingSession {
    fn send(&mut self, request: &Request) -> Result<serde_json::Value, SessionError> {
        self.log.lock().unwrap().requests.push(request.clone());
        Ok(serde_json::Value::Null)
    }
}
