use std::io::Write;

use crate::grammar::{Arguments, Grammar};
use crate::session::Session;

/// The grammar type used by the interpreter: every template is bound to a
/// boxed [`CommandAction`].
pub type CommandGrammar = Grammar<Box<dyn CommandAction>>;

/// Everything an action may use while it runs.
pub struct ActionContext<'a> {
    pub args: Arguments,
    pub grammar: &'a CommandGrammar,
    pub out: &'a mut dyn Write,
    session: Option<&'a mut dyn Session>,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        args: Arguments,
        grammar: &'a CommandGrammar,
        out: &'a mut dyn Write,
        session: Option<&'a mut dyn Session>,
    ) -> Self {
        Self {
            args,
            grammar,
            out,
            session,
        }
    }

    /// The open session. Fails for actions that declared they do not need one.
    pub fn session(&mut self) -> anyhow::Result<&mut (dyn Session + 'a)> {
        self.session
            .as_deref_mut()
            .ok_or_else(|| anyhow::anyhow!("command has no session to the layer management service"))
    }
}

/// The behaviour bound to a registered command template.
pub trait CommandAction: Send + Sync {
    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()>;

    /// Whether a session must be opened before [`run`](Self::run).
    fn requires_session(&self) -> bool {
        true
    }
}

impl<F> CommandAction for F
where
    F: Fn(&mut ActionContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self(ctx)
    }
}

/// Box an action that talks to the service.
pub fn action<F>(f: F) -> Box<dyn CommandAction>
where
    F: Fn(&mut ActionContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Box an action that runs without opening a session (e.g. `help`).
pub fn local<F>(f: F) -> Box<dyn CommandAction>
where
    F: Fn(&mut ActionContext<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Box::new(Local(f))
}

struct Local<F>(F);

impl<F> CommandAction for Local<F>
where
    F: Fn(&mut ActionContext<'_>) -> anyhow::Result<()> + Send + Sync,
{
    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        (self.0)(ctx)
    }

    fn requires_session(&self) -> bool {
        false
    }
}
