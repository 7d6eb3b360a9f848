use egui_code_editor::Syntax;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Resaltado para el editor de retos HTML
pub fn html_syntax() -> Syntax {
    Syntax::new("html")
        .with_case_sensitive(false)
        .with_comment("<!--")
        .with_comment_multiline(["<!--", "-->"])
        .with_keywords(BTreeSet::from([
            "html", "head", "body", "title", "meta", "link", "p", "a", "img", "div", "span", "ul",
            "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "strong", "em", "section", "header",
            "footer", "nav", "main",
        ]))
        .with_types(BTreeSet::from([
            "href", "src", "alt", "class", "id", "style", "lang", "charset", "rel", "target",
        ]))
        .with_special(BTreeSet::from(["DOCTYPE"]))
}

/// Convierte "#RRGGBB" en color; gris si no es válido.
pub fn parse_hex_color(hex: &str) -> egui::Color32 {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return egui::Color32::GRAY;
    }
    match u32::from_str_radix(digits, 16) {
        Ok(v) => egui::Color32::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8),
        Err(_) => egui::Color32::GRAY,
    }
}

// Reglas de la vista previa, en orden de aplicación
static HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<head.*?</head>|<!--.*?-->").expect("head regex"));
static HEADING_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])[^>]*>").expect("heading open regex"));
static BLOCK_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(h[1-6]|p|div|ul|ol|section)>|<p[^>]*>").expect("block regex"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*href\s*=\s*"([^"]*)"[^>]*>(.*?)</a>"#).expect("link regex")
});
static IMG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("img regex"));
static ALT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)alt\s*=\s*"([^"]*)""#).expect("alt regex"));
static LI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").expect("li regex"));
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

/// Vista previa aproximada de una página HTML como markdown.
/// Cabeceras, párrafos, enlaces, imágenes (por su alt) y listas; el resto de
/// etiquetas se descarta.
pub fn html_preview_markdown(html: &str) -> String {
    let text = html.replace("\r\n", "\n");
    let text = HEAD_RE.replace_all(&text, "");
    let text = HEADING_OPEN_RE.replace_all(&text, |caps: &Captures| {
        let level = caps[1].parse::<usize>().unwrap_or(1);
        format!("\n\n{} ", "#".repeat(level))
    });
    let text = BLOCK_CLOSE_RE.replace_all(&text, "\n\n");
    let text = LINK_RE.replace_all(&text, "[$2]($1)");
    let text = IMG_RE.replace_all(&text, |caps: &Captures| {
        let alt = ALT_RE
            .captures(&caps[0])
            .map(|c| c[1].to_owned())
            .unwrap_or_else(|| "image".into());
        format!("🖼 *{alt}*")
    });
    let text = LI_RE.replace_all(&text, "\n- ");
    let text = BR_RE.replace_all(&text, "  \n");
    let text = TAG_RE.replace_all(&text, "");

    // Una línea en blanco como máximo entre bloques
    let mut out = String::new();
    let mut blank = true;
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !blank {
                out.push('\n');
            }
            blank = true;
        } else {
            out.push_str(line);
            out.push('\n');
            blank = false;
        }
    }
    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_renders_page_as_markdown() {
        let html = r#"<!DOCTYPE html>
<html>
  <head><title>Hidden</title></head>
  <body>
    <h1>Ada</h1>
    <p>I write <strong>code</strong>.</p>
    <a href="https://example.com">Example</a>
    <img src="me.png" alt="Portrait">
    <ul><li>One</li><li>Two</li></ul>
  </body>
</html>"#;
        let md = html_preview_markdown(html);
        assert!(md.starts_with("# Ada"), "{md}");
        assert!(md.contains("I write code."));
        assert!(md.contains("[Example](https://example.com)"));
        assert!(md.contains("🖼 *Portrait*"));
        assert!(md.contains("- One") && md.contains("- Two"));
        assert!(!md.contains("Hidden"));
        assert!(!md.contains('<'));
    }

    #[test]
    fn preview_of_plain_text_and_comments() {
        assert_eq!(html_preview_markdown("hello"), "hello");
        assert_eq!(html_preview_markdown("<!-- No challenge available -->"), "");
        assert_eq!(html_preview_markdown("<h3 class=\"x\">T</h3>"), "### T");
    }

    #[test]
    fn parses_course_colors() {
        assert_eq!(
            parse_hex_color("#E44D26"),
            egui::Color32::from_rgb(0xE4, 0x4D, 0x26)
        );
        assert_eq!(parse_hex_color("oops"), egui::Color32::GRAY);
        assert_eq!(parse_hex_color("#GGGGGG"), egui::Color32::GRAY);
    }
}
