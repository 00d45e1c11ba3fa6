use super::size::bytes_value;
use crate::context::ExecutionContext;
use crate::presentation::Console;
use anyhow::{Context, Result};
use nimbus_core::{format_size, get_path_size};
use nimbus_types::{Record, Value};
use std::path::Path;

pub fn handle(ctx: &ExecutionContext, path: &Path, decimal: bool) -> Result<()> {
    let bytes = get_path_size(path)
        .with_context(|| format!("Cannot measure {}", path.display()))?;
    let formatted = format_size(bytes, decimal);

    let mut console = Console::stdout(ctx.style()?);
    if ctx.json() {
        let mut record = Record::new();
        record.insert("path", path.display().to_string());
        record.insert("bytes", bytes_value(bytes));
        record.insert("size", formatted);
        console.print_json(&Value::from(record))?;
    } else {
        console.line(&format!("{}\t{}", formatted, path.display()))?;
    }
    Ok(())
}
