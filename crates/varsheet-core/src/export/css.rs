// ABOUTME: Renders StyleGroups as CSS custom-property declarations grouped under comment headers.
// ABOUTME: Contains the name normalizer, the declaration formatter, and the document assembler.

use crate::model::{Declaration, StyleGroup};

/// Lowercase a style name and replace every whitespace character and every
/// forward slash with a hyphen, one hyphen per character.
///
/// Other characters that are not valid in a CSS identifier pass through.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_separator(c) { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Forward slash, or whitespace as host style names define it: the
/// ECMAScript `\s` class, which includes U+FEFF and excludes U+0085.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '/' | '\t'
            | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Format one declaration as `--{prefix}-{name}: {value};`. An absent or
/// empty prefix is omitted together with its hyphen.
pub fn format_declaration(declaration: &Declaration, prefix: Option<&str>) -> String {
    let name = normalize_name(&declaration.name);
    match prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => format!("--{prefix}-{name}: {};", declaration.value),
        None => format!("--{name}: {};", declaration.value),
    }
}

/// Join groups into the output document. Each group is a comment header
/// followed by one line per declaration; groups are separated by a blank
/// line and keep the order they were given in.
pub fn assemble(groups: &[StyleGroup]) -> String {
    groups
        .iter()
        .map(render_group)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_group(group: &StyleGroup) -> String {
    let mut lines = Vec::with_capacity(group.entries.len() + 1);
    lines.push(format!("/* --- {} --- */", group.kind.label()));
    lines.extend(
        group
            .entries
            .iter()
            .map(|decl| format_declaration(decl, group.prefix.as_deref())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleKind;
    use proptest::prelude::*;

    #[test]
    fn normalize_replaces_each_space_and_slash() {
        assert_eq!(normalize_name("Brand / Primary"), "brand---primary");
        assert_eq!(normalize_name("Brand/Primary"), "brand-primary");
        assert_eq!(normalize_name("Heading  Large"), "heading--large");
        assert_eq!(normalize_name("Tab\tName"), "tab-name");
    }

    #[test]
    fn normalize_uses_host_whitespace_class() {
        assert_eq!(normalize_name("A\u{feff}B"), "a-b");
        assert_eq!(normalize_name("A\u{a0}B\u{3000}C"), "a-b-c");
        assert_eq!(normalize_name("A\u{85}B"), "a\u{85}b");
    }

    #[test]
    fn normalize_leaves_other_characters_alone() {
        assert_eq!(normalize_name("Gray.500 #1"), "gray.500-#1");
    }

    #[test]
    fn format_with_prefix() {
        let decl = Declaration::new("Primary", "#ff0000");
        assert_eq!(
            format_declaration(&decl, Some("color")),
            "--color-primary: #ff0000;"
        );
    }

    #[test]
    fn format_without_prefix() {
        let decl = Declaration::new("Gap", "8px");
        assert_eq!(format_declaration(&decl, None), "--gap: 8px;");
        assert_eq!(format_declaration(&decl, Some("")), "--gap: 8px;");
    }

    #[test]
    fn assemble_single_group() {
        let groups = vec![StyleGroup::new(
            StyleKind::Color,
            vec![Declaration::new("Brand/Primary", "#ff0000")],
        )];

        assert_eq!(
            assemble(&groups),
            "/* --- COLOR --- */\n--color-brand-primary: #ff0000;"
        );
    }

    #[test]
    fn assemble_keeps_empty_groups_and_separates_with_one_blank_line() {
        let groups = vec![
            StyleGroup::new(
                StyleKind::Color,
                vec![
                    Declaration::new("A", "#000000"),
                    Declaration::new("B", "#ffffff"),
                ],
            ),
            StyleGroup::new(StyleKind::Shadow, Vec::new()),
            StyleGroup::new(StyleKind::Variable, vec![Declaration::new("space/sm", "4")]),
        ];

        let css = assemble(&groups);
        assert_eq!(
            css,
            "/* --- COLOR --- */\n\
             --color-a: #000000;\n\
             --color-b: #ffffff;\n\
             \n\
             /* --- SHADOW --- */\n\
             \n\
             /* --- LOCAL-VARIABLES --- */\n\
             --space-sm: 4;"
        );
        assert!(!css.contains("\n\n\n"));
    }

    #[test]
    fn assemble_preserves_group_order() {
        let groups = vec![
            StyleGroup::new(StyleKind::Blur, Vec::new()),
            StyleGroup::new(StyleKind::Color, Vec::new()),
        ];

        let css = assemble(&groups);
        let blur = css.find("BLUR").unwrap();
        let color = css.find("COLOR").unwrap();
        assert!(blur < color);
    }

    #[test]
    fn assemble_no_groups_is_empty() {
        assert_eq!(assemble(&[]), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(name in "[A-Za-z0-9 /._#-]{0,24}") {
            let once = normalize_name(&name);
            prop_assert_eq!(normalize_name(&once), once.clone());
            prop_assert!(!once.contains(' '));
            prop_assert!(!once.contains('/'));
        }
    }
}
