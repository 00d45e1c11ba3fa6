use crate::context::ExecutionContext;
use crate::presentation::Console;
use anyhow::Result;
use nimbus_core::{DEFAULT_CONTENT_TYPE, guess_mime_type};
use nimbus_types::{Record, Value};

pub fn handle(ctx: &ExecutionContext, file: &str) -> Result<()> {
    let (content_type, encoding) = guess_mime_type(file, DEFAULT_CONTENT_TYPE, None)?;

    let mut record = Record::new();
    record.insert("content_type", content_type);
    record.insert(
        "encoding",
        encoding.map_or_else(Value::null, Value::from),
    );

    let mut console = Console::stdout(ctx.style()?);
    if ctx.json() {
        console.print_json(&Value::from(record))?;
    } else {
        console.pretty_dict(&record, "_", false)?;
    }
    Ok(())
}
