//! Typed records for the JSON the Azure CLI prints.
//!
//! Responses are validated here once; the rest of the crate only sees domain
//! types.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::domain::{Identity, VariableGroup, VariableRecord};
use crate::core::types::ProjectName;
use crate::error::{RemoteError, Result};

/// `az devops project list` output.
#[derive(Debug, Deserialize)]
struct ProjectList {
    #[serde(default)]
    value: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    #[serde(default)]
    name: Option<String>,
}

/// One element of `az pipelines variable-group list` output.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "ordered_variables")]
    variables: Vec<(String, Option<VariableMeta>)>,
    #[serde(default)]
    created_by: Option<IdentityRecord>,
    #[serde(default)]
    modified_by: Option<IdentityRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariableMeta {
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    is_secret: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityRecord {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    unique_name: Option<String>,
}

/// Parse project names. Anything but an object yields no projects; records
/// without a name are skipped.
pub(super) fn parse_projects(payload: Value) -> Result<Vec<ProjectName>> {
    if !payload.is_object() {
        return Ok(Vec::new());
    }

    let list: ProjectList =
        serde_json::from_value(payload).map_err(RemoteError::UnexpectedPayload)?;

    Ok(list
        .value
        .into_iter()
        .filter_map(|p| p.name.filter(|n| !n.is_empty()))
        .collect())
}

/// Parse variable groups. Anything but a list yields no groups.
pub(super) fn parse_variable_groups(payload: Value) -> Result<Vec<VariableGroup>> {
    if !payload.is_array() {
        return Ok(Vec::new());
    }

    let records: Vec<GroupRecord> =
        serde_json::from_value(payload).map_err(RemoteError::UnexpectedPayload)?;

    Ok(records.into_iter().map(GroupRecord::into_group).collect())
}

impl GroupRecord {
    fn into_group(self) -> VariableGroup {
        let created_by = self.created_by.map(IdentityRecord::into_identity);
        let modified_by = self.modified_by.map(IdentityRecord::into_identity);

        let mut group = VariableGroup::new(self.name.unwrap_or_default())
            .with_created_by(created_by.unwrap_or_default())
            .with_modified_by(modified_by.unwrap_or_default());

        if let Some(id) = self.id {
            group = group.with_id(id);
        }

        for (name, meta) in self.variables {
            let record = match meta {
                Some(meta) => VariableRecord::from_parts(
                    meta.value.and_then(stringify),
                    meta.is_secret.unwrap_or(false),
                ),
                None => VariableRecord::withheld(),
            };
            group = group.with_variable(name, record);
        }

        group
    }
}

impl IdentityRecord {
    fn into_identity(self) -> Identity {
        Identity::new(self.display_name, self.unique_name)
    }
}

/// Render a JSON value as the string a user would see. Null stays absent.
///
/// Strings are kept verbatim. Other values use literal syntax: `True`/`False`,
/// numbers as written, lists and objects as `['a', 1]` and `{'k': 'v'}`.
fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => {
            let mut out = String::new();
            write_literal(&mut out, &other);
            Some(out)
        }
    }
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_quoted(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (i, (key, item)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_literal(out, item);
            }
            out.push('}');
        }
    }
}

/// Quote a nested string: single quotes unless the text holds a `'` and no `"`.
fn write_quoted(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Deserialize a JSON object (or null) into its entries in document order.
fn ordered_variables<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, Option<VariableMeta>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedVisitor;

    impl<'de> Visitor<'de> for OrderedVisitor {
        type Value = Vec<(String, Option<VariableMeta>)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of variables or null")
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, meta)) = map.next_entry::<String, Option<VariableMeta>>()? {
                entries.push((key, meta));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(OrderedVisitor)
}
