use std::io::Write;

use rstest::rstest;

use lmctl::grammar::{Grammar, Registration};
use lmctl::interpreter::{CommandGrammar, CommandResult, Interpreter, local};

use super::RecordingConnector;

/// Each action prints its name followed by its arguments.
fn echo(name: &'static str) -> Box<dyn lmctl::interpreter::CommandAction> {
    local(move |ctx| {
        write!(ctx.out, "{name}")?;
        for key in ["arg", "x", "y", "opt"] {
            if let Ok(value) = ctx.args.get_string(key) {
                write!(ctx.out, " {key}={value}")?;
            }
        }
        writeln!(ctx.out)?;
        Ok(())
    })
}

fn build(templates: &[(&str, &'static str)]) -> CommandGrammar {
    let mut grammar = Grammar::new();
    for &(template, name) in templates {
        grammar.register(template, echo(name)).unwrap();
    }
    grammar
}

fn run(grammar: &CommandGrammar, input: &str) -> (CommandResult, String) {
    let mut interpreter = Interpreter::new(grammar, Box::new(RecordingConnector::default()));
    let mut out: Vec<u8> = Vec::new();
    let result = interpreter.interpret_command_to(input, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[rstest]
#[case::literal(&[("cmd sub", "sub")], "cmd sub", "sub\n")]
#[case::variable(&[("cmd <arg>", "var")], "cmd hello", "var arg=hello\n")]
#[case::optional_taken(&[("cmd [opt]", "o")], "cmd opt", "o\n")]
#[case::optional_skipped(&[("cmd [opt]", "o")], "cmd", "o\n")]
#[case::optional_skipped_to_tail(&[("cmd [opt] tail", "t")], "cmd tail", "t\n")]
#[case::defaults(&[("pos [<x=1> <y=2>]", "p")], "pos", "p x=1 y=2\n")]
#[case::defaults_overridden(&[("pos [<x=1> <y=2>]", "p")], "pos 5 6", "p x=5 y=6\n")]
#[case::literal_beats_variable(&[("cmd <arg>", "var"), ("cmd sub", "sub")], "cmd sub", "sub\n")]
#[case::variable_when_no_literal(&[("cmd <arg>", "var"), ("cmd sub", "sub")], "cmd other", "var arg=other\n")]
fn custom_templates(
    #[case] templates: &[(&str, &'static str)],
    #[case] input: &str,
    #[case] printed: &str,
) {
    let grammar = build(templates);
    assert_eq!(run(&grammar, input), (CommandResult::Success, printed.to_string()));
}

#[test]
fn strict_prefix_is_ambiguous() {
    let grammar = build(&[("show", "show"), ("show all", "all")]);
    assert_eq!(run(&grammar, "show"), (CommandResult::Ambiguous, String::new()));
    assert_eq!(run(&grammar, "show all"), (CommandResult::Success, "all\n".to_string()));
}

#[test]
fn re_registration_replaces_the_action() {
    let mut grammar = build(&[("cmd", "first")]);
    assert_eq!(grammar.register("cmd", echo("second")).unwrap(), Registration::Replaced);
    assert_eq!(run(&grammar, "cmd"), (CommandResult::Success, "second\n".to_string()));
}

#[test]
fn grammar_is_shared_across_threads() {
    let grammar = build(&[("set <x>", "set")]);
    std::thread::scope(|scope| {
        for i in 0..4 {
            let grammar = &grammar;
            scope.spawn(move || {
                let (result, printed) = run(grammar, &format!("set {i}"));
                assert_eq!(result, CommandResult::Success);
                assert_eq!(printed, format!("set x={i}\n"));
            });
        }
    });
}
