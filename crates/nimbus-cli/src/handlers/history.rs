use crate::context::ExecutionContext;
use crate::presentation::Console;
use anyhow::Result;
use nimbus_core::split_input;
use nimbus_types::{Record, Value};

pub fn handle(ctx: &ExecutionContext, limit: usize, match_args: &[String]) -> Result<()> {
    let terms: Vec<String> = match_args.iter().flat_map(|arg| split_input(arg)).collect();
    let entries = ctx.history()?.get(&terms, limit)?;

    let mut console = Console::stdout(ctx.style()?);
    if ctx.json() {
        let listing: Vec<Value> = entries
            .iter()
            .map(|entry| {
                let mut record = Record::new();
                record.insert("index", entry.index as i64);
                record.insert("line", entry.line.as_str());
                Value::from(record)
            })
            .collect();
        console.print_json(&Value::from(listing))?;
        return Ok(());
    }

    for entry in &entries {
        console.line(&entry.to_string())?;
    }
    Ok(())
}
