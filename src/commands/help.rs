
use crate::interpreter::ActionContext;

pub(super) fn help(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    if ctx.args.contains("tree") {
        ctx.grammar.write_tree(ctx.out)?;
        return Ok(());
    }

    writeln!(ctx.out, "Usage: lmctl <command>")?;
    writeln!(ctx.out)?;
    writeln!(ctx.out, "Commands:")?;
    for template in ctx.grammar.templates() {
        writeln!(ctx.out, "  {template}")?;
    }
    Ok(())
}
