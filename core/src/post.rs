use crate::error::{DigestError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

pub const USER_ID_FIELD: &str = "userId";
pub const BODY_FIELD: &str = "body";

/// One post as served by the API. Fields are kept as raw JSON so that a record
/// with an odd `userId` or `body` still loads; `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Post {
    #[serde(rename = "userId", default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl Post {
    /// Key identifying the author for distinct counting. `1`, `1.0` and `true`
    /// map to the same key; a string `"1"` does not.
    pub fn user_key(&self) -> Option<String> {
        match self.user_id.as_ref()? {
            Value::Null => None,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(format!("n:{i}"))
                } else if let Some(u) = n.as_u64() {
                    Some(format!("n:{u}"))
                } else {
                    let f = n.as_f64()?;
                    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                        Some(format!("n:{}", f as i64))
                    } else {
                        Some(format!("n:{f}"))
                    }
                }
            }
            Value::Bool(b) => Some(format!("n:{}", u8::from(*b))),
            Value::String(s) => Some(format!("s:{s}")),
            other => Some(format!("j:{other}")),
        }
    }
}

/// Columns observed across all records of a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub user_id: bool,
    pub body: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub posts: Vec<Post>,
    pub columns: Columns,
}

impl Dataset {
    /// Project a parsed JSON document into records. `path` is only used for
    /// error reporting.
    pub fn from_value(value: Value, path: &Path) -> Result<Self> {
        let items = match value {
            Value::Null => return Err(DigestError::EmptyDataset { path: path.to_path_buf() }),
            Value::Array(items) => items,
            Value::Object(map) if map.is_empty() => {
                return Err(DigestError::EmptyDataset { path: path.to_path_buf() })
            }
            other => {
                return Err(DigestError::InvalidShape {
                    path: path.to_path_buf(),
                    reason: format!("expected an array of posts, found {}", json_kind(&other)),
                })
            }
        };
        if items.is_empty() {
            return Err(DigestError::EmptyDataset { path: path.to_path_buf() });
        }

        let mut columns = Columns::default();
        let mut posts = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let map = match item {
                Value::Object(map) => map,
                other => {
                    return Err(DigestError::InvalidShape {
                        path: path.to_path_buf(),
                        reason: format!("record {idx} is {}, not an object", json_kind(&other)),
                    })
                }
            };
            columns.user_id |= map.contains_key(USER_ID_FIELD);
            columns.body |= map.contains_key(BODY_FIELD);
            // every field is an optional Value, so this cannot reject an object
            let post: Post = serde_json::from_value(Value::Object(map)).map_err(|source| {
                DigestError::Malformed { path: path.to_path_buf(), source }
            })?;
            posts.push(post);
        }
        Ok(Self { posts, columns })
    }

    /// Fail unless both `userId` and `body` appear on at least one record.
    pub fn require_fields(&self) -> Result<()> {
        if !self.columns.user_id {
            return Err(DigestError::MissingField { field: USER_ID_FIELD });
        }
        if !self.columns.body {
            return Err(DigestError::MissingField { field: BODY_FIELD });
        }
        Ok(())
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
