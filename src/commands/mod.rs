//! The LayerManagerControl command set.
//!
//! Every supported command is one `(template, action)` pair in [`table`];
//! [`build_grammar`] folds the table into a grammar once at startup.

mod help;
mod input;
mod properties;
mod query;
mod scene;

use crate::grammar::GrammarError;
use crate::interpreter::{ActionContext, CommandAction, CommandGrammar, action, local};
use crate::session::{Request, Target};

/// Every built-in command template and the action bound to it.
pub fn table() -> Vec<(&'static str, Box<dyn CommandAction>)> {
    vec![
        ("help [tree|list]", local(help::help)),
        // Queries
        ("get scene", action(query::get_scene)),
        ("get screens", action(query::get_screens)),
        ("get layers", action(query::get_layers)),
        ("get surfaces", action(query::get_surfaces)),
        ("get screen <screenid>", action(query::get_screen)),
        ("get layer <layerid>", action(query::get_layer)),
        ("get surface <surfaceid>", action(query::get_surface)),
        // Scene structure
        (
            "create layer <layerid> [<width=1920> <height=1080>]",
            action(scene::create_layer),
        ),
        ("destroy layer|surface <id>", action(scene::destroy)),
        (
            "layer add surface <layerid> <surfaceid>",
            action(scene::layer_add_surface),
        ),
        (
            "layer remove surface <layerid> <surfaceid>",
            action(scene::layer_remove_surface),
        ),
        (
            "screen <screenid> render order [<layeridarray>]",
            action(scene::screen_render_order),
        ),
        (
            "layer <layerid> render order [<surfaceidarray>]",
            action(scene::layer_render_order),
        ),
        // Properties of layers and surfaces
        (
            "layer|surface <id> source region <x> <y> <w> <h>",
            action(properties::source_region),
        ),
        (
            "layer|surface <id> destination region <x> <y> <w> <h>",
            action(properties::destination_region),
        ),
        (
            "layer|surface <id> opacity <opacity>",
            action(properties::opacity),
        ),
        (
            "layer|surface <id> visibility <visibility>",
            action(properties::visibility),
        ),
        // Input focus
        (
            "set surface <surfaceid> keyboard|pointer focus",
            action(input::set_focus),
        ),
        ("get keyboard focus", action(input::get_keyboard_focus)),
    ]
}

/// Build the grammar holding every command in [`table`].
pub fn build_grammar() -> Result<CommandGrammar, GrammarError> {
    table()
        .into_iter()
        .try_fold(CommandGrammar::new(), |mut grammar, (template, action)| {
            grammar.register(template, action)?;
            Ok(grammar)
        })
}

/// Send `request` and print the reply, if the service returned one.
fn query(ctx: &mut ActionContext<'_>, request: Request) -> anyhow::Result<()> {
    let reply = ctx.session()?.send(&request)?;
    if !reply.is_null() {
        writeln!(ctx.out, "{}", serde_json::to_string_pretty(&reply)?)?;
    }
    Ok(())
}

/// Send a change followed by a commit.
fn apply(ctx: &mut ActionContext<'_>, request: Request) -> anyhow::Result<()> {
    let session = ctx.session()?;
    session.send(&request)?;
    session.send(&Request::Commit)?;
    Ok(())
}

/// The layer or surface named by a `layer|surface <id>` template.
fn target(ctx: &ActionContext<'_>) -> anyhow::Result<Target> {
    let id = ctx.args.get_uint("id")?;
    Ok(if ctx.args.contains("surface") {
        Target::Surface(id)
    } else {
        Target::Layer(id)
    })
}
