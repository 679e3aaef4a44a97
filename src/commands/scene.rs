use super::{apply, target};
use crate::interpreter::ActionContext;
use crate::session::Request;

pub(super) fn create_layer(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::CreateLayer {
        layer: ctx.args.get_uint("layerid")?,
        width: ctx.args.get_uint("width")?,
        height: ctx.args.get_uint("height")?,
    };
    apply(ctx, request)
}

pub(super) fn destroy(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let target = target(ctx)?;
    apply(ctx, Request::Destroy { target })
}

pub(super) fn layer_add_surface(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::LayerAddSurface {
        layer: ctx.args.get_uint("layerid")?,
        surface: ctx.args.get_uint("surfaceid")?,
    };
    apply(ctx, request)
}

pub(super) fn layer_remove_surface(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::LayerRemoveSurface {
        layer: ctx.args.get_uint("layerid")?,
        surface: ctx.args.get_uint("surfaceid")?,
    };
    apply(ctx, request)
}

/// An omitted list clears the render order.
pub(super) fn screen_render_order(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::SetScreenRenderOrder {
        screen: ctx.args.get_uint("screenid")?,
        layers: optional_list(ctx, "layeridarray")?,
    };
    apply(ctx, request)
}

pub(super) fn layer_render_order(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let request = Request::SetLayerRenderOrder {
        layer: ctx.args.get_uint("layerid")?,
        surfaces: optional_list(ctx, "surfaceidarray")?,
    };
    apply(ctx, request)
}

fn optional_list(ctx: &ActionContext<'_>, name: &str) -> anyhow::Result<Vec<u32>> {
    if ctx.args.contains(name) {
        Ok(ctx.args.get_uint_array(name)?)
    } else {
        Ok(Vec::new())
    }
}
