use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use nimbus_core::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let raw_args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    run_with_args(cli, &raw_args)
}

/// Dispatch `cli`. `raw_args` is the command line as typed, recorded in the
/// history before anything else runs.
pub fn run_with_args(cli: Cli, raw_args: &[String]) -> Result<()> {
    let workspace = resolve_workspace_path(cli.config_dir.as_deref())?;
    let ctx = ExecutionContext::new(workspace, cli.format, cli.no_color);
    tracing::debug!(workspace = %ctx.workspace().display(), "resolved workspace");

    if !cli.command.is_history_command() {
        record_invocation(&ctx, raw_args);
    }

    match cli.command {
        Commands::History { limit, terms } => handlers::history::handle(&ctx, limit, &terms),

        Commands::HistoryClean => handlers::history_clean::handle(&ctx),

        Commands::Show {
            file,
            title,
            enumerate,
            redundant,
            page_size,
            filters,
            exact,
            case_sensitive,
            exclude,
            pretty_keys,
            save,
        } => handlers::show::handle(
            &ctx,
            handlers::show::ShowOptions {
                file,
                title,
                enumerate,
                redundant,
                page_size,
                filters,
                exact,
                case_sensitive,
                exclude,
                pretty_keys,
                save,
            },
        ),

        Commands::Size { value, decimal } => handlers::size::handle(&ctx, &value, decimal),

        Commands::ToBytes { size, unit } => handlers::to_bytes::handle(&ctx, &size, unit.as_deref()),

        Commands::Mime { file } => handlers::mime::handle(&ctx, &file),

        Commands::Du { path, decimal } => handlers::du::handle(&ctx, &path, decimal),
    }
}

/// History is best effort: a failure to record never blocks the command.
fn record_invocation(ctx: &ExecutionContext, raw_args: &[String]) {
    let line = quote_args(raw_args);
    let recorded = ctx.history().and_then(|history| Ok(history.add(&line)?));
    if let Err(err) = recorded {
        tracing::warn!("Could not record command in history: {}", err);
    }
}

/// Join arguments into one line that `split_input` splits back into the
/// same terms. An argument holding both quote characters and whitespace has
/// no such form and may split differently.
pub fn quote_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            let bare = !arg.is_empty()
                && !arg.contains(char::is_whitespace)
                && !arg.contains(['\'', '"']);
            if bare {
                arg.clone()
            } else if arg.contains('"') {
                format!("'{}'", arg)
            } else {
                format!("\"{}\"", arg)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
