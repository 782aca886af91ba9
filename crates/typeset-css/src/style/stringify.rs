//! Conversion of style records into CSS declaration lists.

use crate::variables::VarScope;

use super::value::StyleRecord;

const FONT_FAMILY: &str = "fontFamily";

/// Converts a camelCase property name into its kebab-case CSS spelling.
///
/// Every uppercase letter that follows another letter starts a new segment,
/// and any non-letter character becomes a hyphen.
///
/// ```rust
/// use typeset_css::to_kebab_case;
///
/// assert_eq!(to_kebab_case("fontSize"), "font-size");
/// assert_eq!(to_kebab_case("letterSpacing"), "letter-spacing");
/// assert_eq!(to_kebab_case("color"), "color");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_letter = false;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            out.push('-');
            prev_letter = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_letter {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
        prev_letter = true;
    }
    out
}

/// Stringifies a style record as `prop:value` pairs joined by `"; "`.
///
/// When a variable scope is given, the `fontFamily` value is resolved
/// through [`VarScope::resolve_font_family`]. No trailing semicolon is
/// emitted.
///
/// ```rust
/// use typeset_css::{stringify_style, StyleRecord, VarScope, VariableTable};
///
/// let style = StyleRecord::new()
///     .with("fontSize", "14px")
///     .with("fontFamily", "var:font-body");
/// let vars = VariableTable::new().with("font-body", "Inter");
///
/// assert_eq!(
///     stringify_style(&style, Some(VarScope::new(&vars))),
///     "font-size:14px; font-family:var(--v-typography--font-body)"
/// );
/// ```
pub fn stringify_style(style: &StyleRecord, scope: Option<VarScope<'_>>) -> String {
    style
        .iter()
        .map(|(property, value)| {
            let css_property = to_kebab_case(property);
            let css_value = value.to_string();
            match (property, scope) {
                (FONT_FAMILY, Some(scope)) => {
                    format!("{}:{}", css_property, scope.resolve_font_family(&css_value))
                }
                _ => format!("{}:{}", css_property, css_value),
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Renders a record the way a DOM `style` attribute serialises it:
/// `prop: value` pairs joined by `"; "`.
///
/// Used for per-instance overrides applied inline rather than through the
/// generated stylesheet.
///
/// ```rust
/// use typeset_css::{inline_style, StyleRecord};
///
/// let custom = StyleRecord::new().with("fontSize", "20px").with("fontWeight", "bold");
/// assert_eq!(inline_style(&custom), "font-size: 20px; font-weight: bold;");
/// ```
pub fn inline_style(style: &StyleRecord) -> String {
    style
        .iter()
        .map(|(property, value)| format!("{}: {};", to_kebab_case(property), value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariableTable;

    #[test]
    fn test_kebab_case_properties() {
        assert_eq!(to_kebab_case("textTransform"), "text-transform");
        assert_eq!(to_kebab_case("lineHeight"), "line-height");
        assert_eq!(to_kebab_case("fontFamily"), "font-family");
        assert_eq!(to_kebab_case("WebkitFontSmoothing"), "webkit-font-smoothing");
    }

    #[test]
    fn test_stringify_no_trailing_semicolon() {
        let style = StyleRecord::new()
            .with("fontSize", "57px")
            .with("lineHeight", "64px")
            .with("fontWeight", 400)
            .with("letterSpacing", "-0.25px");

        assert_eq!(
            stringify_style(&style, None),
            "font-size:57px; line-height:64px; font-weight:400; letter-spacing:-0.25px"
        );
    }

    #[test]
    fn test_stringify_empty_record() {
        assert_eq!(stringify_style(&StyleRecord::new(), None), "");
    }

    #[test]
    fn test_font_family_untouched_without_scope() {
        let style = StyleRecord::new().with("fontFamily", "font-body");
        assert_eq!(stringify_style(&style, None), "font-family:font-body");
    }

    #[test]
    fn test_only_font_family_is_resolved() {
        let vars = VariableTable::new().with("brand", "Inter");
        let style = StyleRecord::new()
            .with("color", "brand")
            .with("fontFamily", "brand");

        assert_eq!(
            stringify_style(&style, Some(VarScope::new(&vars))),
            "color:brand; font-family:var(--v-typography--brand)"
        );
    }

    #[test]
    fn test_inline_style_empty() {
        assert_eq!(inline_style(&StyleRecord::new()), "");
    }
}
