//! Format-aware parsing and serialization of the document tree.
//!
//! Both formats parse into the same [`Tree`]. JSON output always has its
//! keys sorted and a four space indent; YAML output keeps mapping order.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_yaml::Mapping;
use tracing::debug;

use crate::core::constants::JSON_INDENT;
use crate::core::types::{Format, Tree};
use crate::error::{MarshalError, ParseError, Result};

/// Parse `input` as `format`.
///
/// A JSON object repeating a key keeps the last value, at the position of
/// the first.
///
/// # Errors
///
/// Returns `Error::Parse` with the parser diagnostic if the input is not
/// valid for `format`.
pub fn unmarshal(input: &[u8], format: Format) -> Result<Tree> {
    let tree = match format {
        Format::Json => {
            serde_json::from_slice::<JsonTree>(input)
                .map_err(|source| {
                    let offset = byte_offset(input, source.line(), source.column());
                    ParseError::Json { source, offset }
                })?
                .0
        }
        Format::Yaml => serde_yaml::from_slice::<Tree>(input).map_err(ParseError::Yaml)?,
    };
    debug!(%format, "document parsed");
    Ok(tree)
}

/// Serialize `tree` as `format`.
///
/// # Errors
///
/// Returns `Error::Marshal` if the tree holds something `format` cannot
/// express, such as a non-scalar mapping key in JSON.
pub fn marshal(tree: &Tree, format: Format) -> Result<Vec<u8>> {
    let out = match format {
        Format::Json => to_json(tree)?,
        Format::Yaml => serde_yaml::to_string(tree)
            .map_err(MarshalError::Yaml)?
            .into_bytes(),
    };
    debug!(%format, bytes = out.len(), "document encoded");
    Ok(out)
}

/// A [`Tree`] read from JSON.
struct JsonTree(Tree);

impl<'de> Deserialize<'de> for JsonTree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonVisitor).map(JsonTree)
    }
}

struct JsonVisitor;

impl<'de> Visitor<'de> for JsonVisitor {
    type Value = Tree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Tree, E> {
        Ok(Tree::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Tree, E> {
        Ok(Tree::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Tree, E> {
        Ok(Tree::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Tree, E> {
        Ok(Tree::Number(v.into()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Tree, E> {
        Ok(Tree::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Tree, E> {
        Ok(Tree::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Tree, E> {
        Ok(Tree::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Tree, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(JsonTree(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Tree::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Tree, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((key, JsonTree(value))) = map.next_entry::<String, JsonTree>()? {
            // later duplicates overwrite in place
            mapping.insert(Tree::String(key), value);
        }
        Ok(Tree::Mapping(mapping))
    }
}

fn to_json(tree: &Tree) -> std::result::Result<Vec<u8>, MarshalError> {
    let mut value = serde_json::to_value(tree).map_err(MarshalError::Json)?;
    sort_keys(&mut value);

    let mut out = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser).map_err(MarshalError::Json)?;
    Ok(out)
}

/// Reorder every object in `value` by key.
///
/// Rebuilding the maps keeps the order sorted whichever map type
/// serde_json was compiled with.
fn sort_keys(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, mut child) in entries {
                sort_keys(&mut child);
                map.insert(key, child);
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}

/// Translate serde_json's one-based line/column into a byte offset.
fn byte_offset(input: &[u8], line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start = if line == 1 {
        0
    } else {
        input
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1)?
    };
    Some((line_start + column.saturating_sub(1)).min(input.len()))
}
