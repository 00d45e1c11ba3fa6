use nimbus_types::{Record, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// An item that must be a record is something else
    NotARecord { index: usize, found: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::NotARecord { index, found } => {
                write!(f, "Item {} is not a record: {}", index, found)
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Keep the records that match every criterion.
///
/// Records missing any criterion key are dropped. Values are compared by
/// their string form: equality with `exact_match`, otherwise the criterion
/// must be contained in the record value. `case_sensitive` applies to
/// values only, never to keys.
pub fn filter_dicts_by_dict<'a>(
    records: &'a [Record],
    criteria: &Record,
    exact_match: bool,
    case_sensitive: bool,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| criteria.keys().all(|key| record.contains_key(key)))
        .filter(|record| {
            criteria.iter().all(|(key, wanted)| {
                let Some(actual) = record.get(key) else {
                    return false;
                };
                value_matches(actual, wanted, exact_match, case_sensitive)
            })
        })
        .collect()
}

fn value_matches(actual: &Value, wanted: &Value, exact_match: bool, case_sensitive: bool) -> bool {
    let (mut actual, mut wanted) = (actual.to_string(), wanted.to_string());
    if !case_sensitive {
        actual = actual.to_lowercase();
        wanted = wanted.to_lowercase();
    }

    if exact_match {
        actual == wanted
    } else {
        actual.contains(&wanted)
    }
}

/// Remove `key` from every record in `items`.
///
/// All items are checked first, so a non-record leaves the list untouched.
pub fn remove_from_items(items: &mut [Value], key: &str) -> Result<(), FilterError> {
    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| item.as_record().is_none())
    {
        return Err(FilterError::NotARecord {
            index,
            found: item.to_string(),
        });
    }

    for item in items.iter_mut() {
        if let Some(record) = item.as_record_mut() {
            record.remove(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn sample() -> Vec<Record> {
        vec![
            record(&[("k1", "v1"), ("k2", "v2"), ("k3", "v3")]),
            record(&[("k1", "v1")]),
            record(&[("k2", "v2"), ("k3", "v3")]),
            record(&[("k1", "V1"), ("k3", "V3")]),
            record(&[]),
        ]
    }

    #[test]
    fn test_filter_dicts_by_dict_table() {
        let list = sample();
        let by_k3 = record(&[("k3", "v")]);

        let cases: Vec<(&Record, bool, bool, Vec<usize>)> = vec![
            (&list[2], true, false, vec![0, 2]),
            (&list[1], true, false, vec![0, 1, 3]),
            (&list[1], true, true, vec![0, 1]),
            (&by_k3, true, false, vec![]),
            (&by_k3, false, false, vec![0, 2, 3]),
            (&by_k3, false, true, vec![0, 2]),
            (&by_k3, true, true, vec![]),
        ];

        for (criteria, exact, case_sensitive, expected) in cases {
            let expected: Vec<&Record> = expected.iter().map(|i| &list[*i]).collect();
            assert_eq!(
                filter_dicts_by_dict(&list, criteria, exact, case_sensitive),
                expected
            );
        }
    }

    #[test]
    fn test_substring_case_insensitive_keeps_both() {
        let list = vec![record(&[("k3", "v3")]), record(&[("k1", "V1"), ("k3", "V3")])];
        let matched = filter_dicts_by_dict(&list, &record(&[("k3", "v")]), false, false);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_non_string_values_compare_by_text() {
        let mut server = Record::new();
        server.insert("id", 42);
        server.insert("public", true);
        let list = vec![server];

        let mut criteria = Record::new();
        criteria.insert("id", "42");
        criteria.insert("public", "TRUE");
        assert_eq!(filter_dicts_by_dict(&list, &criteria, true, false).len(), 1);
        assert!(filter_dicts_by_dict(&list, &criteria, true, true).is_empty());
    }

    #[test]
    fn test_remove_from_items() {
        let mut items = vec![
            Value::from(record(&[("k1", "1"), ("k2", "2")])),
            Value::from(record(&[("k2", "2")])),
        ];
        remove_from_items(&mut items, "k2").unwrap();
        assert_eq!(items[0], Value::from(record(&[("k1", "1")])));
        assert_eq!(items[1], Value::from(Record::new()));

        remove_from_items(&mut items, "missing").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_remove_from_items_rejects_scalars() {
        let mut items = vec![Value::from(record(&[("k", "v")])), Value::from(2)];
        let err = remove_from_items(&mut items, "k").unwrap_err();
        assert_eq!(
            err,
            FilterError::NotARecord {
                index: 1,
                found: "2".to_string()
            }
        );
        assert!(items[0].as_record().unwrap().contains_key("k"));
    }
}
