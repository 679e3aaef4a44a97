use super::{apply, query};
use crate::interpreter::ActionContext;
use crate::session::{FocusDevice, Request};

pub(super) fn set_focus(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    let device = if ctx.args.contains("pointer") {
        FocusDevice::Pointer
    } else {
        FocusDevice::Keyboard
    };
    let request = Request::SetFocus {
        surface: ctx.args.get_uint("surfaceid")?,
        device,
    };
    apply(ctx, request)
}

pub(super) fn get_keyboard_focus(ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    query(ctx, Request::GetKeyboardFocus)
}
