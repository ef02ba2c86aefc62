use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    had_session: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.take();
    let had_session = session.is_some();
    desk_auth::logout(session)?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            had_session,
        },
        flags.format,
    )
}
