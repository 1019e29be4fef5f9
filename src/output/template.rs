use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CheckWmiError, Result};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("Invalid regex"));

/// Replace `{key}` tokens with values from `substitutions`.
///
/// `{{` and `}}` produce literal braces. A token missing from the mapping, an
/// empty `{}` or an unmatched brace is an error.
///
/// # Errors
/// Returns a render error naming the offending token.
pub fn substitute(text: &str, substitutions: &HashMap<String, String>) -> Result<String> {
    let mut rendered = String::with_capacity(text.len());
    let mut last = 0;

    for caps in TOKEN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        rendered.push_str(&text[last..whole.start()]);
        last = whole.end();

        match (whole.as_str(), caps.get(1)) {
            ("{{", _) => rendered.push('{'),
            ("}}", _) => rendered.push('}'),
            (_, Some(key)) => {
                let value = substitutions.get(key.as_str()).ok_or_else(|| {
                    CheckWmiError::Render(format!("no value for '{{{}}}'", key.as_str()))
                })?;
                rendered.push_str(value);
            }
            (brace, None) => {
                return Err(CheckWmiError::Render(format!(
                    "single '{brace}' at offset {}",
                    whole.start()
                )));
            }
        }
    }

    rendered.push_str(&text[last..]);
    Ok(rendered)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
