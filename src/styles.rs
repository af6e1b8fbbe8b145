//! CSS generation for the guide.
//!
//! The stylesheet is a pure function of the [`Palette`]: page geometry for
//! print (US letter, page numbers in the bottom margin), typography, heading
//! levels, the cover page, callout boxes, step indicators, status badges,
//! striped tables and a handful of layout utilities.

use crate::assets::MISSING_ASSET_CLASS;
use crate::guide::markup::{CalloutKind, Status};
use crate::palette::{Colour, Palette};

/// Generate the complete stylesheet for the guide.
pub fn generate_stylesheet(palette: &Palette) -> String {
    let mut css = String::with_capacity(8192);

    css.push_str(&generate_custom_properties(palette));
    css.push_str(&generate_page_styles(palette));
    css.push_str("\n/* Callouts */\n");
    for kind in CalloutKind::ALL {
        css.push_str(&callout_rule(kind, palette));
    }
    css.push_str(&generate_step_styles(palette));
    css.push_str("\n/* Status badges */\n");
    css.push_str(&generate_badge_styles());
    css.push_str(&generate_layout_styles(palette));

    css
}

/// Palette roles exposed as CSS custom properties, e.g. `--gray-light`.
fn generate_custom_properties(palette: &Palette) -> String {
    let mut css = String::from(":root {\n");
    for (role, colour) in palette.roles() {
        css.push_str(&format!("    --{}: {colour};\n", role.replace('_', "-")));
    }
    css.push_str("}\n\n");
    css
}

/// Page geometry, typography, headings and the cover page.
fn generate_page_styles(palette: &Palette) -> String {
    format!(
        r#"/* Page */
@page {{
    size: letter;
    margin: 0.5in 0.6in;
    @bottom-center {{
        content: counter(page);
        font-family: 'Georgia', serif;
        font-size: 7pt;
        color: #999;
    }}
}}

body {{
    font-family: 'Georgia', serif;
    font-size: 9pt;
    line-height: 1.4;
    color: #222;
}}

h1 {{
    font-size: 20pt;
    color: {navy};
    margin: 0 0 4pt 0;
    border-bottom: 3px solid {brand};
    padding-bottom: 6pt;
}}

h2 {{
    font-size: 13pt;
    color: {navy};
    margin: 14pt 0 6pt 0;
    border-bottom: 2px solid {navy};
    padding-bottom: 3pt;
}}

h3 {{
    font-size: 10pt;
    color: {navy};
    margin: 10pt 0 4pt 0;
    border-bottom: 1px solid {gray_border};
    padding-bottom: 2pt;
}}

h4 {{
    font-size: 9pt;
    color: {navy};
    margin: 8pt 0 3pt 0;
}}

p {{
    margin: 0 0 6pt 0;
}}

b {{ color: {navy}; }}

/* Cover page */
.cover {{
    text-align: center;
    padding-top: 120pt;
}}

.cover h1 {{
    font-size: 28pt;
    border-bottom: none;
    color: {brand};
}}

.cover .subtitle {{
    font-size: 14pt;
    color: {navy};
    margin-top: 8pt;
}}

.cover .date {{
    font-size: 10pt;
    color: #777;
    margin-top: 20pt;
}}

.cover .site {{
    margin-top: 40pt;
    color: #999;
    font-size: 9pt;
}}
"#,
        navy = palette.navy,
        brand = palette.brand,
        gray_border = palette.gray_border,
    )
}

/// `(background, border, accent, label)` colours of a callout box.
fn callout_colours(kind: CalloutKind, palette: &Palette) -> (&Colour, &Colour, &Colour, &Colour) {
    match kind {
        CalloutKind::Info => (
            &palette.blue_light,
            &palette.blue_border,
            &palette.navy,
            &palette.navy,
        ),
        CalloutKind::Tip => (
            &palette.green_light,
            &palette.green_border,
            &palette.green_text,
            &palette.green_text,
        ),
        CalloutKind::Warning => (
            &palette.gold_light,
            &palette.gold_border,
            &palette.gold_border,
            &palette.gold_text,
        ),
        CalloutKind::Critical => (
            &palette.red_light,
            &palette.red_border,
            &palette.brand,
            &palette.brand,
        ),
    }
}

fn callout_rule(kind: CalloutKind, palette: &Palette) -> String {
    let (background, border, accent, label) = callout_colours(kind, palette);
    format!(
        r#"
.{class} {{
    background: {background};
    border: 1px solid {border};
    border-left: 4px solid {accent};
    padding: 6pt 10pt;
    margin: 8pt 0;
    font-size: 8.5pt;
    break-inside: avoid;
}}

.{class} b {{ color: {label}; }}
"#,
        class = kind.css_class(),
    )
}

fn generate_step_styles(palette: &Palette) -> String {
    format!(
        r#"
/* Step indicators */
.step {{
    background: {cream};
    border-left: 3px solid {gold_border};
    padding: 5pt 8pt;
    margin: 6pt 0;
    break-inside: avoid;
}}

.step .step-num {{
    font-weight: bold;
    color: {gold_text};
    font-size: 9pt;
}}

.flow-arrow {{
    text-align: center;
    font-size: 16pt;
    color: {brand};
    margin: 4pt 0;
}}
"#,
        cream = palette.cream,
        gold_border = palette.gold_border,
        gold_text = palette.gold_text,
        brand = palette.brand,
    )
}

fn generate_badge_styles() -> String {
    let mut css = String::from(
        r#".status-badge {
    display: inline-block;
    padding: 1pt 6pt;
    border-radius: 8pt;
    font-size: 7.5pt;
    font-weight: bold;
}
"#,
    );
    for status in Status::ALL {
        let (background, foreground) = status.colours();
        css.push_str(&format!(
            ".{} {{ background: {background}; color: {foreground}; }}\n",
            status.css_class()
        ));
    }
    css
}

/// Lists, tables, table of contents, footer and layout utilities.
fn generate_layout_styles(palette: &Palette) -> String {
    format!(
        r#"
/* Lists */
ul, ol {{
    margin: 2pt 0 6pt 0;
    padding-left: 16pt;
}}

li {{
    margin-bottom: 3pt;
}}

code {{
    font-family: 'Courier New', monospace;
    font-size: 8pt;
}}

/* Tables */
table {{
    border-collapse: collapse;
    width: 100%;
    margin: 6pt 0;
    font-size: 8.5pt;
}}

th {{
    background: {navy};
    color: white;
    padding: 4pt 8pt;
    text-align: left;
    font-size: 8pt;
}}

td {{
    padding: 4pt 8pt;
    border-bottom: 1px solid {gray_border};
}}

tr:nth-child(even) td {{
    background: {gray_light};
}}

/* Table of contents */
.toc a {{
    color: {navy};
    text-decoration: none;
}}

.toc ul {{
    list-style: none;
    padding-left: 0;
}}

.toc li {{
    padding: 3pt 0;
    border-bottom: 1px dotted {gray_border};
}}

.toc li.toc-sub {{
    padding-left: 16pt;
}}

/* Utilities */
.page-break {{
    page-break-before: always;
}}

.two-col {{
    column-count: 2;
    column-gap: 16pt;
}}

.drop-tag {{
    color: {brand};
    font-weight: bold;
}}

.footer {{
    font-size: 7pt;
    color: #777;
    text-align: center;
    margin-top: 10pt;
    padding-top: 4pt;
    border-top: 1px solid #ddd;
}}

img {{
    max-width: 100%;
}}

.{missing} {{
    color: #999;
    font-style: italic;
}}
"#,
        navy = palette.navy,
        brand = palette.brand,
        gray_border = palette.gray_border,
        gray_light = palette.gray_light,
        missing = MISSING_ASSET_CLASS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stylesheet_is_deterministic() {
        let palette = Palette::default();
        assert_eq!(generate_stylesheet(&palette), generate_stylesheet(&palette));
    }

    #[test]
    fn covers_every_rule_the_guide_uses() {
        let css = generate_stylesheet(&Palette::default());
        for selector in [
            "@page {",
            "@bottom-center {",
            "h1 {",
            "h2 {",
            "h3 {",
            "h4 {",
            ".cover {",
            ".step {",
            ".status-badge {",
            "tr:nth-child(even) td {",
            ".two-col {",
            ".page-break {",
            ".missing-asset {",
        ] {
            assert!(css.contains(selector), "missing rule {selector}");
        }
        for kind in CalloutKind::ALL {
            assert!(css.contains(&format!(".{} {{", kind.css_class())));
        }
        for status in Status::ALL {
            assert!(css.contains(&format!(".{} {{", status.css_class())));
        }
    }

    #[test]
    fn callouts_draw_from_the_palette() {
        let palette = Palette {
            red_light: Colour::parse("#010203").expect("valid"),
            ..Palette::default()
        };
        let css = generate_stylesheet(&palette);
        let critical = &css[css.find(".critical-box {").expect("has critical box")..];
        assert!(critical.starts_with(".critical-box {\n    background: #010203;"));
    }

    #[test]
    fn exposes_every_role_as_a_custom_property() {
        let css = generate_stylesheet(&Palette::default());
        assert!(css.starts_with(":root {\n    --brand: #b91c1c;\n"));
        assert!(css.contains("    --gray-light: #f5f5f5;\n"));
        assert!(css.contains("    --red-border: #fca5a5;\n"));
    }

    #[test]
    fn palette_changes_change_output() {
        let custom = Palette {
            navy: Colour::parse("#000080").expect("valid"),
            ..Palette::default()
        };
        let css = generate_stylesheet(&custom);
        assert_ne!(css, generate_stylesheet(&Palette::default()));
        assert!(css.contains("color: #000080;"));
    }
}
