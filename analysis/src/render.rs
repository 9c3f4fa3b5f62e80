use serde_json::Value;

/// Renders nested mappings as indented `key: value` lines, nested mappings
/// start a new block one level deeper.
pub struct Indented<'v>(pub &'v Value);

impl core::fmt::Display for Indented<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value(f, self.0, 0)
    }
}

fn write_value(f: &mut std::fmt::Formatter<'_>, value: &Value, indentation: usize) -> std::fmt::Result {
    let indent = "  ".repeat(indentation);

    match value {
        Value::Object(map) => {
            for (key, value) in map.iter() {
                match value {
                    Value::Object(_) => {
                        writeln!(f, "{}{}:", indent, key)?;
                        write_value(f, value, indentation + 1)?;
                    }
                    other => writeln!(f, "{}{}: {}", indent, key, Scalar(other))?,
                };
            }
        }
        other => writeln!(f, "{}{}", indent, Scalar(other))?,
    };

    Ok(())
}

struct Scalar<'v>(&'v Value);

impl core::fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Renders anything serializable, typically a [`common::demo_analysis::MatchSummary`].
pub fn render<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: serde::Serialize,
{
    let value = serde_json::to_value(value)?;
    Ok(Indented(&value).to_string())
}
