use crate::context::ExecutionContext;
use crate::presentation::Console;
use anyhow::{Context, Result};
use nimbus_core::{SizeValue, format_size};
use nimbus_types::{Record, Value};

/// Accepts a plain byte count or an amount with a unit.
pub fn handle(ctx: &ExecutionContext, raw: &str, decimal: bool) -> Result<()> {
    let bytes = match raw.trim().parse::<u64>() {
        Ok(bytes) => bytes,
        Err(_) => raw
            .parse::<SizeValue>()
            .and_then(|size| size.to_bytes())
            .with_context(|| format!("Cannot read '{}' as a size", raw))?,
    };
    let formatted = format_size(bytes, decimal);

    let mut console = Console::stdout(ctx.style()?);
    if ctx.json() {
        let mut record = Record::new();
        record.insert("bytes", bytes_value(bytes));
        record.insert("size", formatted);
        console.print_json(&Value::from(record))?;
    } else {
        console.line(&formatted)?;
    }
    Ok(())
}

/// Byte counts above `i64::MAX` only fit a float.
pub(crate) fn bytes_value(bytes: u64) -> Value {
    match i64::try_from(bytes) {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(bytes as f64),
    }
}
