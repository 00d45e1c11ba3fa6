use crate::context::ExecutionContext;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let history = ctx.history()?;
    history.clean()?;
    tracing::info!(path = %history.path().display(), "history cleaned");
    Ok(())
}
