use super::error::RenderError;
use super::pager::{Pager, page_hold};
use super::style::Style;
use nimbus_types::{Record, Scalar, Value};
use serde::Serialize;
use std::io::{self, Write};

/// Columns added per nesting level.
pub const INDENT_TAB: usize = 4;

pub type RenderResult = Result<(), RenderError>;

/// Output sink for rendered results.
pub struct Console<W: Write> {
    out: W,
    style: Style,
}

impl Console<io::Stdout> {
    pub fn stdout(style: Style) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, style: Style) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write without a newline and flush right away.
    pub fn write_raw(&mut self, text: &str) -> RenderResult {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> RenderResult {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Print a record one key per line.
    ///
    /// ```text
    /// <indent>key: <scalar>
    /// <indent>key:
    /// <indent + 4><nested collection>
    /// ```
    ///
    /// Enumeration counts every entry, excluded ones too, so numbers can
    /// have gaps.
    pub fn print_dict(
        &mut self,
        record: &Record,
        exclude: &[&str],
        indent: usize,
        with_enumeration: bool,
        recursive_enumeration: bool,
    ) -> RenderResult {
        for (i, (key, value)) in record.iter().enumerate() {
            let key = key.trim();
            if exclude.contains(&key) {
                continue;
            }

            let mut prefix = " ".repeat(indent);
            if with_enumeration {
                prefix.push_str(&format!("{}.", i + 1));
            }
            prefix.push_str(&format!("{}:", key));

            match value {
                Value::Mapping(nested) => {
                    self.line(&prefix)?;
                    self.print_dict(
                        nested,
                        exclude,
                        indent + INDENT_TAB,
                        recursive_enumeration,
                        recursive_enumeration,
                    )?;
                }
                Value::Sequence(items) => {
                    self.line(&prefix)?;
                    self.print_list(
                        items,
                        exclude,
                        indent + INDENT_TAB,
                        recursive_enumeration,
                        recursive_enumeration,
                    )?;
                }
                Value::Scalar(scalar) => self.line(&format!("{} {}", prefix, scalar))?,
            }
        }
        Ok(())
    }

    /// Print a sequence one item per line. Records and nested sequences are
    /// separated by a blank line unless enumerated.
    pub fn print_list(
        &mut self,
        items: &[Value],
        exclude: &[&str],
        indent: usize,
        with_enumeration: bool,
        recursive_enumeration: bool,
    ) -> RenderResult {
        for (i, item) in items.iter().enumerate() {
            let mut prefix = " ".repeat(indent);
            if with_enumeration {
                prefix.push_str(&format!("{}.", i + 1));
            }

            match item {
                Value::Mapping(record) => {
                    self.separate(&prefix, i, with_enumeration)?;
                    let nested_indent = if with_enumeration {
                        indent + INDENT_TAB
                    } else {
                        indent
                    };
                    self.print_dict(
                        record,
                        exclude,
                        nested_indent,
                        recursive_enumeration,
                        recursive_enumeration,
                    )?;
                }
                Value::Sequence(nested) => {
                    self.separate(&prefix, i, with_enumeration)?;
                    self.print_list(
                        nested,
                        exclude,
                        indent + INDENT_TAB,
                        recursive_enumeration,
                        recursive_enumeration,
                    )?;
                }
                Value::Scalar(scalar) => {
                    let text = scalar.to_string();
                    let text = text.trim();
                    if exclude.contains(&text) {
                        continue;
                    }
                    self.line(&format!("{}{}", prefix, text))?;
                }
            }
        }
        Ok(())
    }

    fn separate(&mut self, prefix: &str, index: usize, with_enumeration: bool) -> RenderResult {
        if with_enumeration {
            self.line(prefix)
        } else if index > 0 {
            self.line("")
        } else {
            Ok(())
        }
    }

    /// [`Console::print_dict`] for a value that must hold a record.
    pub fn print_dict_value(
        &mut self,
        value: &Value,
        exclude: &[&str],
        indent: usize,
        with_enumeration: bool,
        recursive_enumeration: bool,
    ) -> RenderResult {
        let record = value
            .as_record()
            .ok_or_else(|| RenderError::NotAMapping(value.to_string()))?;
        self.print_dict(record, exclude, indent, with_enumeration, recursive_enumeration)
    }

    /// [`Console::print_list`] for a value that must hold a sequence.
    pub fn print_list_value(
        &mut self,
        value: &Value,
        exclude: &[&str],
        indent: usize,
        with_enumeration: bool,
        recursive_enumeration: bool,
    ) -> RenderResult {
        let items = value
            .as_sequence()
            .ok_or_else(|| RenderError::NotASequence(value.to_string()))?;
        self.print_list(items, exclude, indent, with_enumeration, recursive_enumeration)
    }

    /// Print a listing of items, using the values of `title` keys as each
    /// record's bold header.
    ///
    /// Header keys leave the body unless `with_redundancy`. Every
    /// `page_size` items the pager holds the output; 0 means one page.
    pub fn print_items(
        &mut self,
        items: &[Value],
        title: &[&str],
        with_enumeration: bool,
        with_redundancy: bool,
        page_size: usize,
        pager: &mut dyn Pager,
    ) -> RenderResult {
        if items.is_empty() {
            return Ok(());
        }
        let page_size = if page_size > 0 { page_size } else { items.len() };

        for (i, item) in items.iter().enumerate() {
            if with_enumeration {
                self.write_raw(&format!("{}. ", i + 1))?;
            }

            match item {
                Value::Mapping(record) => {
                    let mut body = record.clone();
                    let mut keys: Vec<&str> = title
                        .iter()
                        .copied()
                        .filter(|key| record.contains_key(key))
                        .collect();
                    keys.sort_unstable();
                    keys.dedup();

                    let header = keys
                        .iter()
                        .filter_map(|key| {
                            if with_redundancy {
                                record.get(key).cloned()
                            } else {
                                body.remove(key)
                            }
                        })
                        .map(|value| value.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");

                    let header = self.style.bold(&header);
                    self.line(&header)?;
                    self.print_dict(&body, &[], INDENT_TAB, false, false)?;
                }
                Value::Sequence(nested) => {
                    self.print_list(nested, &[], INDENT_TAB, false, false)?;
                }
                Value::Scalar(scalar) => self.line(&format!(" {}", scalar))?,
            }

            page_hold(i + 1, page_size, items.len(), pager)?;
        }
        Ok(())
    }

    /// Render any result: a sequence as a listing, a record as a single
    /// listed item, a scalar as-is. Null and empty text print nothing.
    pub fn print_value_items(
        &mut self,
        value: &Value,
        title: &[&str],
        with_enumeration: bool,
        with_redundancy: bool,
        page_size: usize,
        pager: &mut dyn Pager,
    ) -> RenderResult {
        match value {
            Value::Sequence(items) => self.print_items(
                items,
                title,
                with_enumeration,
                with_redundancy,
                page_size,
                pager,
            ),
            Value::Mapping(_) => self.print_items(
                std::slice::from_ref(value),
                title,
                with_enumeration,
                with_redundancy,
                page_size,
                pager,
            ),
            Value::Scalar(scalar) if scalar.is_blank() => Ok(()),
            Value::Scalar(Scalar::Str(text)) => self.line(text),
            Value::Scalar(scalar) => self.line(&scalar.to_string()),
        }
    }

    /// Pretty JSON with four-space indentation.
    pub fn print_json(&mut self, value: &Value) -> RenderResult {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.out, formatter);
        value.serialize(&mut serializer)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// [`Console::print_dict`] after rewriting `delim` in keys to spaces.
    pub fn pretty_dict(&mut self, record: &Record, delim: &str, recursive: bool) -> RenderResult {
        self.print_dict(&record.pretty_keys(delim, recursive), &[], 0, false, false)
    }
}

/// Dump a record as plain indented text.
pub fn dict2file<W: Write>(record: &Record, out: &mut W, depth: usize) -> io::Result<()> {
    for (key, value) in record.iter() {
        write!(out, "{}{}: ", " ".repeat(INDENT_TAB * depth), key)?;
        match value {
            Value::Mapping(nested) => {
                writeln!(out)?;
                dict2file(nested, out, depth + 1)?;
            }
            Value::Sequence(items) => {
                writeln!(out)?;
                list2file(items, out, depth + 1)?;
            }
            Value::Scalar(scalar) => writeln!(out, "{}", scalar)?,
        }
    }
    Ok(())
}

/// Dump a sequence as plain indented text.
pub fn list2file<W: Write>(items: &[Value], out: &mut W, depth: usize) -> io::Result<()> {
    for item in items {
        match item {
            Value::Mapping(record) => dict2file(record, out, depth + 1)?,
            Value::Sequence(nested) => list2file(nested, out, depth + 1)?,
            Value::Scalar(scalar) => {
                writeln!(out, "{}{}", " ".repeat(INDENT_TAB * depth), scalar)?
            }
        }
    }
    Ok(())
}
