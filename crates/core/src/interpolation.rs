use std::collections::{HashMap, HashSet};

use leon::Template;

use crate::error::Result;

/// Placeholder for the selected unit or directory.
pub const UNIT_KEY: &str = "unit";
/// Placeholder for the chosen action.
pub const ACTION_KEY: &str = "action";

/// Find all tokens in a prompt template.
pub fn get_tokens(template: &str) -> Result<HashSet<String>> {
    let template = Template::parse(template)?;

    Ok(template.keys().map(|key| (*key).to_string()).collect())
}

/// Renders a prompt template such as ``Run `{action}` on `{unit}`?``.
///
/// # Errors
///
/// Returns an error if the template does not parse or names a placeholder
/// missing from `context`.
pub fn render_prompt(template: &str, context: &HashMap<String, String>) -> Result<String> {
    let template = Template::parse(template)?;

    Ok(template.render(context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> HashMap<String, String> {
        HashMap::from([
            (UNIT_KEY.to_string(), "nginx.service".to_string()),
            (ACTION_KEY.to_string(), "restart".to_string()),
        ])
    }

    #[test]
    fn test_render_substitutes_both_keys() {
        let rendered = render_prompt("Run `{action}` on `{unit}`?", &context()).unwrap();
        assert_eq!(rendered, "Run `restart` on `nginx.service`?");
    }

    #[test]
    fn test_render_without_placeholders() {
        let rendered = render_prompt("Continue?", &context()).unwrap();
        assert_eq!(rendered, "Continue?");
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        assert!(render_prompt("Run {verb}?", &context()).is_err());
    }

    #[test]
    fn test_unbalanced_brace_fails() {
        assert!(render_prompt("Run {action?", &context()).is_err());
    }

    #[test]
    fn test_get_tokens() {
        let tokens = get_tokens("Run `{action}` on `{unit}` ({unit})").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains(UNIT_KEY));
        assert!(tokens.contains(ACTION_KEY));
    }
}
