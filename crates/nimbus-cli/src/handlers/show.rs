use crate::context::ExecutionContext;
use crate::presentation::{Console, NoPager, Pager, StdinPager, dict2file, list2file};
use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use nimbus_core::{filter_dicts_by_dict, remove_from_items};
use nimbus_types::{Record, Value, from_json_str};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct ShowOptions {
    pub file: Option<PathBuf>,
    pub title: Vec<String>,
    pub enumerate: bool,
    pub redundant: bool,
    pub page_size: Option<usize>,
    pub filters: Vec<String>,
    pub exact: bool,
    pub case_sensitive: bool,
    pub exclude: Vec<String>,
    pub pretty_keys: bool,
    pub save: Option<PathBuf>,
}

pub fn handle(ctx: &ExecutionContext, options: ShowOptions) -> Result<()> {
    let input = read_input(options.file.as_deref())?;
    let mut value = from_json_str(&input).context("Input is not valid JSON")?;

    if !options.filters.is_empty() {
        let criteria = parse_filters(&options.filters)?;
        value = apply_filters(value, &criteria, options.exact, options.case_sensitive)?;
    }

    for key in &options.exclude {
        exclude_key(&mut value, key)?;
    }

    if options.pretty_keys {
        value = prettify(value);
    }

    if let Some(path) = &options.save {
        save_dump(&value, path)?;
        tracing::info!(path = %path.display(), "saved result dump");
        return Ok(());
    }

    let mut console = Console::stdout(ctx.style()?);
    if ctx.json() {
        console.print_json(&value)?;
        return Ok(());
    }

    let page_size = options
        .page_size
        .unwrap_or(ctx.config()?.output.page_size);
    let mut pager: Box<dyn Pager> = if page_size > 0 && std::io::stdin().is_terminal() {
        Box::new(StdinPager)
    } else {
        Box::new(NoPager)
    };

    let title: Vec<&str> = options.title.iter().map(String::as_str).collect();
    console.print_value_items(
        &value,
        &title,
        options.enumerate,
        options.redundant,
        page_size,
        pager.as_mut(),
    )?;
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// `KEY=VALUE` pairs into a criteria record. The value may contain `=`.
pub fn parse_filters(filters: &[String]) -> Result<Record> {
    let mut criteria = Record::new();
    for filter in filters {
        let Some((key, value)) = filter.split_once('=') else {
            bail!("Invalid filter '{}', expected KEY=VALUE", filter);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Invalid filter '{}', key is empty", filter);
        }
        criteria.insert(key, value);
    }
    Ok(criteria)
}

fn apply_filters(
    value: Value,
    criteria: &Record,
    exact: bool,
    case_sensitive: bool,
) -> Result<Value> {
    let records = match value {
        Value::Mapping(record) => vec![record],
        Value::Sequence(items) => {
            let mut records = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::Mapping(record) => records.push(record),
                    other => bail!("Cannot filter item {}, not a record: {}", index, other),
                }
            }
            records
        }
        Value::Scalar(scalar) => bail!("Cannot filter a plain value: {}", scalar),
    };

    let kept = filter_dicts_by_dict(&records, criteria, exact, case_sensitive);
    tracing::debug!(total = records.len(), kept = kept.len(), "applied filters");
    Ok(Value::from(
        kept.into_iter()
            .cloned()
            .map(Value::from)
            .collect::<Vec<_>>(),
    ))
}

fn exclude_key(value: &mut Value, key: &str) -> Result<()> {
    match value {
        Value::Sequence(items) => remove_from_items(items, key)?,
        Value::Mapping(record) => {
            record.remove(key);
        }
        Value::Scalar(_) => {}
    }
    Ok(())
}

fn prettify(value: Value) -> Value {
    match value {
        Value::Mapping(record) => Value::from(record.pretty_keys("_", true)),
        Value::Sequence(items) => Value::from(items.into_iter().map(prettify).collect::<Vec<_>>()),
        scalar => scalar,
    }
}

fn save_dump(value: &Value, path: &Path) -> Result<()> {
    let mut out = Vec::new();
    match value {
        Value::Mapping(record) => dict2file(record, &mut out, 0)?,
        Value::Sequence(items) => list2file(items, &mut out, 0)?,
        Value::Scalar(scalar) => out.extend_from_slice(format!("{}\n", scalar).as_bytes()),
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_filters() {
        let criteria = parse_filters(&strings(&["status=ACTIVE", "tag=a=b"])).unwrap();
        assert_eq!(criteria.get("status"), Some(&Value::from("ACTIVE")));
        assert_eq!(criteria.get("tag"), Some(&Value::from("a=b")));

        assert!(parse_filters(&strings(&["status"])).is_err());
        assert!(parse_filters(&strings(&["=x"])).is_err());
    }

    #[test]
    fn test_apply_filters_on_listing() {
        let value = from_json_str(
            r#"[{"name": "web-1", "status": "ACTIVE"}, {"name": "db", "status": "BUILD"}]"#,
        )
        .unwrap();
        let criteria = parse_filters(&strings(&["status=act"])).unwrap();

        let kept = apply_filters(value, &criteria, false, false).unwrap();
        let items = kept.as_sequence().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].as_record().unwrap().get("name"),
            Some(&Value::from("web-1"))
        );
    }

    #[test]
    fn test_apply_filters_rejects_scalars() {
        let criteria = parse_filters(&strings(&["k=v"])).unwrap();
        assert!(apply_filters(Value::from(3), &criteria, true, false).is_err());
        assert!(apply_filters(from_json_str("[1]").unwrap(), &criteria, true, false).is_err());
    }

    #[test]
    fn test_exclude_and_prettify() {
        let mut value = from_json_str(r#"[{"id": 1, "user_id": "u", "meta_data": {"os_type": "x"}}]"#)
            .unwrap();
        exclude_key(&mut value, "id").unwrap();
        let value = prettify(value);

        let record = value.as_sequence().unwrap()[0].as_record().unwrap().clone();
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["user id", "meta data"]);
        let nested = record.get("meta data").and_then(Value::as_record).unwrap();
        assert!(nested.contains_key("os type"));
    }

    #[test]
    fn test_save_dump() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dump.txt");
        let value = from_json_str(r#"{"name": "vm", "disks": [20]}"#).unwrap();

        save_dump(&value, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "name: vm\ndisks: \n    20\n"
        );
    }
}
