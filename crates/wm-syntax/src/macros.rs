//! Canonical textual form of macro invocations.

use std::fmt::Write;

use wm_events::MacroCall;

/// Serialize a macro invocation into its canonical call form.
///
/// With a body: `{{name k1="v1" k2="v2"}}body{{/name}}`. Without one (absent
/// or empty), the self-closing short form: `{{name k1="v1"/}}`. Parameters
/// appear in the map's insertion order, so repeated calls over the same
/// invocation are byte-identical.
#[must_use]
pub fn render_macro(call: &MacroCall) -> String {
    let mut out = String::from("{{");
    out.push_str(&call.name);
    for (name, value) in call.parameters.iter() {
        write!(out, " {name}=\"{value}\"").unwrap();
    }
    match call.content.as_deref() {
        Some(content) if !content.is_empty() => {
            out.push_str("}}");
            out.push_str(content);
            out.push_str("{{/");
            out.push_str(&call.name);
            out.push_str("}}");
        }
        _ => out.push_str("/}}"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_call_is_self_closing() {
        assert_eq!(render_macro(&MacroCall::new("toc")), "{{toc/}}");
    }

    #[test]
    fn test_empty_body_is_self_closing() {
        let call = MacroCall::new("toc").with_content("");
        assert_eq!(render_macro(&call), "{{toc/}}");
    }

    #[test]
    fn test_parameters_in_insertion_order() {
        let call = MacroCall::new("image")
            .with_parameter("src", "logo.png")
            .with_parameter("alt", "Logo");
        assert_eq!(render_macro(&call), r#"{{image src="logo.png" alt="Logo"/}}"#);
    }

    #[test]
    fn test_body_gets_closing_tag() {
        let call = MacroCall::new("box")
            .with_parameter("title", "Note")
            .with_content("watch out");
        assert_eq!(
            render_macro(&call),
            r#"{{box title="Note"}}watch out{{/box}}"#
        );
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let call = MacroCall::new("code")
            .with_parameter("language", "rust")
            .with_content("fn main() {}");
        assert_eq!(render_macro(&call), render_macro(&call));
    }
}
