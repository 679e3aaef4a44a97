use super::query;
use crate::interpreter::ActionContext;
use crate::session::Request;

pub(super) fn get_scene(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    query(ctx, Request::GetScene)
}

pub(super) fn get_screens(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    query(ctx, Request::GetScreens)
}

pub(super) fn get_layers(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    query(ctx, Request::GetLayers)
}

pub(super) fn get_surfaces(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    query(ctx, Request::GetSurfaces)
}

pub(super) fn get_screen(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let screen = ctx.args.get_uint("screenid")?;
    query(ctx, Request::GetScreen { screen })
}

pub(super) fn get_layer(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let layer = ctx.args.get_uint("layerid")?;
    query(ctx, Request::GetLayer { layer })
}

pub(super) fn get_surface(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let surface = ctx.args.get_uint("surfaceid")?;
    query(ctx, Request::GetSurface { surface })
}
