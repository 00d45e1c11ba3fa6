use super::size::bytes_value;
use crate::context::ExecutionContext;
use crate::presentation::Console;
use anyhow::Result;
use nimbus_core::{SizeValue, to_bytes_str};
use nimbus_types::{Record, Value};

/// With a separate unit the amount must be a bare number; otherwise the
/// unit may be attached, as in `42MB`.
pub fn handle(ctx: &ExecutionContext, size: &str, unit: Option<&str>) -> Result<()> {
    let bytes = match unit {
        Some(unit) => to_bytes_str(size, unit)?,
        None => size.parse::<SizeValue>()?.to_bytes()?,
    };

    let mut console = Console::stdout(ctx.style()?);
    if ctx.json() {
        let mut record = Record::new();
        record.insert("bytes", bytes_value(bytes));
        console.print_json(&Value::from(record))?;
    } else {
        console.line(&bytes.to_string())?;
    }
    Ok(())
}
