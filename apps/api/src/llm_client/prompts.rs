// Shared prompt fragments.
// Each service that calls the vision model defines its own prompts.rs alongside it.
// This file contains cross-cutting instructions appended to those prompts.

/// Instruction that enforces a bare JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with the JSON object only. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences.";

/// Instruction that forbids invented literature.
pub const FACTUALITY_INSTRUCTION: &str = "\
CRITICAL: Only cite works, authors and passages that really exist and can be verified. \
NEVER invent an author, a title or a quotation. If you are unsure a passage is real, \
choose a different one.";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never scanned again, so user text containing something
/// that looks like a placeholder is inserted verbatim.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = values.iter().find(|(name, _)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(*name))
                .is_some_and(|t| t.starts_with('}'))
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_placeholders() {
        let filled = fill_template("{a} and {b}", &[("a", "x"), ("b", "y")]);
        assert_eq!(filled, "x and y");
    }

    #[test]
    fn test_fill_template_leaves_other_braces() {
        let filled = fill_template("{\"size\": {n}} {unknown}", &[("n", "3")]);
        assert_eq!(filled, "{\"size\": 3} {unknown}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template("{a}|{b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(filled, "{b}|B");
    }
}
