use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::thread;

use serde_json::json;
use tempfile::TempDir;

use lmctl::commands::build_grammar;
use lmctl::config::parse_config;
use lmctl::interpreter::{CommandResult, Interpreter, NO_ERROR};

/// A one-connection stand-in for the layer management service. Each
/// request line is answered with the matching canned reply.
fn service(path: &PathBuf, replies: Vec<serde_json::Value>) -> thread::JoinHandle<Vec<serde_json::Value>> {
    let listener = UnixListener::bind(path).unwrap();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer = stream.try_clone().unwrap();
        let mut reader = BufReader::new(stream);
        let mut received = Vec::new();
        for reply in replies {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 {
                break;
            }
            received.push(serde_json::from_str(&line).unwrap());
            writeln!(writer, "{reply}").unwrap();
        }
        received
    })
}

fn socket_config(path: &PathBuf) -> lmctl::config::Config {
    parse_config(&format!("connection:\n  socket: {}\n", path.display())).unwrap()
}

#[test]
fn query_prints_the_reply() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ivi.sock");
    let reply = json!({"layers": [1000, 2000]});
    let server = service(&path, vec![reply.clone()]);

    let grammar = build_grammar().unwrap();
    let mut interpreter = Interpreter::new(&grammar, socket_config(&path).connector());
    let mut out: Vec<u8> = Vec::new();
    let result = interpreter.interpret_command_to("get layers", &mut out);

    assert_eq!(result, CommandResult::Success);
    assert_eq!(server.join().unwrap(), vec![json!({"op": "get_layers"})]);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}\n", serde_json::to_string_pretty(&reply).unwrap())
    );
}

#[test]
fn change_is_followed_by_commit() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ivi.sock");
    let server = service(&path, vec![json!({}), json!({})]);

    let grammar = build_grammar().unwrap();
    let mut interpreter = Interpreter::new(&grammar, socket_config(&path).connector());
    let mut out: Vec<u8> = Vec::new();
    let result = interpreter.interpret_command_to("layer 1000 opacity 0.5", &mut out);

    assert_eq!(result, CommandResult::Success);
    assert_eq!(
        server.join().unwrap(),
        vec![
            json!({"op": "set_opacity", "target": {"layer": 1000}, "opacity": 0.5}),
            json!({"op": "commit"}),
        ]
    );
    assert!(out.is_empty());
}

#[test]
fn rejected_request_is_logged_not_reported() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ivi.sock");
    let server = service(&path, vec![json!({"error": "no such layer"})]);

    let grammar = build_grammar().unwrap();
    let mut interpreter = Interpreter::new(&grammar, socket_config(&path).connector());
    let mut out: Vec<u8> = Vec::new();
    let result = interpreter.interpret_command_to("destroy layer 42", &mut out);

    assert_eq!(result, CommandResult::Success);
    assert_eq!(interpreter.last_error(), NO_ERROR);
    assert_eq!(
        server.join().unwrap(),
        vec![json!({"op": "destroy", "target": {"layer": 42}})]
    );
}
