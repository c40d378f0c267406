//! # Structural Diff
//!
//! Field-by-field comparison of an original bean and its decoded counterpart,
//! computed over their value trees. Only used to explain a failed equality
//! check: equality itself is the bean's own value-equality contract.
//!
//! Paths use `$` for the bean itself, `.name` for properties and `[i]` for
//! sequence elements, e.g. `$.legs[2].departs_at`. Object keys are visited in
//! sorted order, so the first entry is a stable "first divergent field".

use std::fmt;

use beancheck_core::DynBean;
use serde_json::Value;

/// One divergent location.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDifference {
    /// Location inside the bean.
    pub path: String,
    /// Original value; `None` when the field exists only after decoding.
    pub expected: Option<Value>,
    /// Decoded value; `None` when the field was lost.
    pub actual: Option<Value>,
}

impl fmt::Display for FieldDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Value>| v.as_ref().map_or_else(|| "<absent>".to_string(), Value::to_string);
        write!(
            f,
            "{}: expected {}, found {}",
            self.path,
            show(&self.expected),
            show(&self.actual)
        )
    }
}

/// Difference between an original and a decoded bean.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralDiff {
    /// Concrete type of the original.
    pub expected_type: String,
    /// Concrete type of the decoded instance.
    pub actual_type: String,
    /// Divergent locations, in traversal order.
    pub differences: Vec<FieldDifference>,
}

impl StructuralDiff {
    /// Compare two beans.
    pub fn between(original: &dyn DynBean, decoded: &dyn DynBean) -> Self {
        let expected = tree(original);
        let actual = tree(decoded);
        let mut differences = Vec::new();
        diff_values("$", &expected, &actual, &mut differences);
        Self {
            expected_type: original.type_name().to_string(),
            actual_type: decoded.type_name().to_string(),
            differences,
        }
    }

    /// Whether decoding produced a different concrete type.
    pub fn is_type_mismatch(&self) -> bool {
        self.expected_type != self.actual_type
    }

    /// The first divergent field.
    pub fn first(&self) -> Option<&FieldDifference> {
        self.differences.first()
    }
}

impl fmt::Display for StructuralDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_type_mismatch() {
            write!(f, "decoded as {} instead of {}", self.actual_type, self.expected_type)?;
            if self.differences.is_empty() {
                return Ok(());
            }
            f.write_str("; ")?;
        }
        if self.differences.is_empty() {
            return f.write_str("value trees are identical but equality failed");
        }
        let rendered: Vec<String> = self.differences.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join("; "))
    }
}

fn tree(bean: &dyn DynBean) -> Value {
    bean.to_value()
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")))
}

/// Append every divergence between `expected` and `actual` under `path`.
pub fn diff_values(path: &str, expected: &Value, actual: &Value, out: &mut Vec<FieldDifference>) {
    match (expected, actual) {
        (Value::Object(a), Value::Object(b)) => {
            let mut keys: Vec<&String> = a.keys().chain(b.keys()).collect();
            keys.sort();
            keys.dedup();
            for key in keys {
                let child = format!("{path}.{key}");
                match (a.get(key), b.get(key)) {
                    (Some(x), Some(y)) => diff_values(&child, x, y, out),
                    (x, y) => out.push(FieldDifference {
                        path: child,
                        expected: x.cloned(),
                        actual: y.cloned(),
                    }),
                }
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            for i in 0..a.len().max(b.len()) {
                let child = format!("{path}[{i}]");
                match (a.get(i), b.get(i)) {
                    (Some(x), Some(y)) => diff_values(&child, x, y, out),
                    (x, y) => out.push(FieldDifference {
                        path: child,
                        expected: x.cloned(),
                        actual: y.cloned(),
                    }),
                }
            }
        }
        (x, y) if x == y => {}
        (x, y) => out.push(FieldDifference {
            path: path.to_string(),
            expected: Some(x.clone()),
            actual: Some(y.clone()),
        }),
    }
}
