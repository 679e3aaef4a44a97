use super::{apply, target};
use crate::interpreter::ActionContext;
use crate::session::{Region, Request};

fn region(ctx: &ActionContext<'_>) -> anyhow::Result<Region> {
    Ok(Region {
        x: ctx.args.get_uint("x")?,
        y: ctx.args.get_uint("y")?,
        width: ctx.args.get_uint("w")?,
        height: ctx.args.get_uint("h")?,
    })
}

pub(super) fn source_region(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::SetSourceRegion {
        target: target(ctx)?,
        region: region(ctx)?,
    };
    apply(ctx, request)
}

pub(super) fn destination_region(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::SetDestinationRegion {
        target: target(ctx)?,
        region: region(ctx)?,
    };
    apply(ctx, request)
}

pub(super) fn opacity(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let opacity = ctx.args.get_double("opacity")?;
    if !(0.0..=1.0).contains(&opacity) {
        anyhow::bail!("opacity must be between 0.0 and 1.0, got {opacity}");
    }
    let request = Request::SetOpacity {
        target: target(ctx)?,
        opacity,
    };
    apply(ctx, request)
}

pub(super) fn visibility(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::SetVisibility {
        target: target(ctx)?,
        visible: ctx.args.get_bool("visibility")?,
    };
    apply(ctx, request)
}
