use std::path::PathBuf;

use rstest::rstest;

use lmctl::interpreter::{CommandGrammar, CommandResult, Interpreter, NO_ERROR};
use lmctl::session::{FocusDevice, Region, Request, SocketConnector, Target};

use super::{RecordingConnector, grammar};

fn run(grammar: &CommandGrammar, input: &str) -> (CommandResult, RecordingConnector, String) {
    let connector = RecordingConnector::default();
    let mut interpreter = Interpreter::new(grammar, Box::new(connector.clone()));
    let mut out: Vec<u8> = Vec::new();
    let result = interpreter.interpret_command_to(input, &mut out);
    (result, connector, interpreter.last_error())
}

#[rstest]
#[case::get_layers("get layers", vec![Request::GetLayers])]
#[case::case_folded("GET Layers", vec![Request::GetLayers])]
#[case::get_layer("get layer 3", vec![Request::GetLayer { layer: 3 }])]
#[case::get_screen("get screen 0", vec![Request::GetScreen { screen: 0 }])]
#[case::keyboard_focus("get keyboard focus", vec![Request::GetKeyboardFocus])]
#[case::create_layer_defaults(
    "create layer 7",
    vec![Request::CreateLayer { layer: 7, width: 1920, height: 1080 }, Request::Commit]
)]
#[case::create_layer_sized(
    "create layer 7 800 600",
    vec![Request::CreateLayer { layer: 7, width: 800, height: 600 }, Request::Commit]
)]
#[case::destroy_surface(
    "destroy surface 12",
    vec![Request::Destroy { target: Target::Surface(12) }, Request::Commit]
)]
#[case::layer_add_surface(
    "layer add surface 1 2",
    vec![Request::LayerAddSurface { layer: 1, surface: 2 }, Request::Commit]
)]
#[case::layer_remove_surface(
    "layer  remove\tsurface 1 2",
    vec![Request::LayerRemoveSurface { layer: 1, surface: 2 }, Request::Commit]
)]
#[case::source_region(
    "layer 2 source region 0 0 100 50",
    vec![
        Request::SetSourceRegion {
            target: Target::Layer(2),
            region: Region { x: 0, y: 0, width: 100, height: 50 },
        },
        Request::Commit,
    ]
)]
#[case::destination_region(
    "surface 9 destination region 10 20 30 40",
    vec![
        Request::SetDestinationRegion {
            target: Target::Surface(9),
            region: Region { x: 10, y: 20, width: 30, height: 40 },
        },
        Request::Commit,
    ]
)]
#[case::opacity(
    "surface 5 opacity 0.25",
    vec![Request::SetOpacity { target: Target::Surface(5), opacity: 0.25 }, Request::Commit]
)]
#[case::visibility(
    "layer 2 visibility on",
    vec![Request::SetVisibility { target: Target::Layer(2), visible: true }, Request::Commit]
)]
#[case::screen_render_order(
    "screen 0 render order 1,2,3",
    vec![Request::SetScreenRenderOrder { screen: 0, layers: vec![1, 2, 3] }, Request::Commit]
)]
#[case::layer_render_order_cleared(
    "layer 4 render order",
    vec![Request::SetLayerRenderOrder { layer: 4, surfaces: vec![] }, Request::Commit]
)]
#[case::pointer_focus(
    "set surface 4 pointer focus",
    vec![Request::SetFocus { surface: 4, device: FocusDevice::Pointer }, Request::Commit]
)]
fn command_sends_requests(
    grammar: CommandGrammar,
    #[case] input: &str,
    #[case] expected: Vec<Request>,
) {
    let (result, connector, last_error) = run(&grammar, input);
    assert_eq!(result, CommandResult::Success);
    assert_eq!(last_error, NO_ERROR);
    assert_eq!(connector.connects(), 1);
    assert_eq!(connector.requests(), expected);
}

#[rstest]
#[case::unknown_word("frobnicate", CommandResult::Invalid, "'frobnicate' not recognized")]
#[case::unknown_later_word("get lasers", CommandResult::Invalid, "'lasers' not recognized")]
#[case::prefix_only("get", CommandResult::Incomplete, "command 'get' is incomplete")]
#[case::missing_argument("get layer", CommandResult::Incomplete, "command 'get layer' is incomplete")]
#[case::missing_value("layer 2 opacity", CommandResult::Incomplete, "command 'layer 2 opacity' is incomplete")]
fn rejected_commands_do_not_connect(
    grammar: CommandGrammar,
    #[case] input: &str,
    #[case] expected: CommandResult,
    #[case] message: &str,
) {
    let (result, connector, last_error) = run(&grammar, input);
    assert_eq!(result, expected);
    assert_eq!(last_error, message);
    assert_eq!(connector.connects(), 0);
}

#[rstest]
#[case::opacity_out_of_range("layer 2 opacity 1.5")]
#[case::not_a_number("get layer three")]
#[case::bad_bool("surface 1 visibility maybe")]
#[case::bad_list("screen 0 render order 1,x")]
fn action_failures_still_succeed(grammar: CommandGrammar, #[case] input: &str) {
    let (result, connector, last_error) = run(&grammar, input);
    assert_eq!(result, CommandResult::Success);
    assert_eq!(last_error, NO_ERROR);
    assert_eq!(connector.connects(), 1);
    assert!(connector.requests().is_empty());
}

#[rstest]
fn help_runs_without_a_session(grammar: CommandGrammar) {
    let mut interpreter = Interpreter::new(
        &grammar,
        Box::new(SocketConnector::new(PathBuf::from("/nonexistent/lmctl.sock"))),
    );
    let mut out: Vec<u8> = Vec::new();
    assert_eq!(
        interpreter.interpret_command_to("help", &mut out),
        CommandResult::Success
    );
    assert!(String::from_utf8(out).unwrap().contains("get keyboard focus"));
}

#[rstest]
fn unreachable_service_fails_execution(grammar: CommandGrammar) {
    let mut interpreter = Interpreter::new(
        &grammar,
        Box::new(SocketConnector::new(PathBuf::from("/nonexistent/lmctl.sock"))),
    );
    let mut out: Vec<u8> = Vec::new();
    assert_eq!(
        interpreter.interpret_command_to("get layers", &mut out),
        CommandResult::ExecutionFailed
    );
    assert!(
        interpreter
            .last_error()
            .starts_with("failed to open session: cannot connect to /nonexistent/lmctl.sock")
    );
    assert_eq!(interpreter.last_error(), NO_ERROR);
}
