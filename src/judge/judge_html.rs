use crate::judge::judge_utils::{contains_all, count_matches, normalize_newlines};
use crate::model::{Challenge, CriterionKind, CriterionResult, SolutionCriterion};
use regex::Regex;
use std::sync::LazyLock;

const MIN_PARAGRAPHS: usize = 2;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h[1-6]>.*?</h[1-6]>").expect("heading regex"));

// (?s): un párrafo puede ocupar varias líneas
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p.*?>.*?</p>").expect("paragraph regex"));

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"src\s*=").expect("img src regex"));

/// Evalúa una regla concreta contra el código enviado.
pub fn check_criterion(kind: CriterionKind, code: &str) -> bool {
    match kind {
        CriterionKind::HtmlStructure => {
            contains_all(code, &["<!DOCTYPE html>", "<html", "<head", "<body"])
        }
        CriterionKind::Heading => HEADING_RE.is_match(code),
        CriterionKind::Paragraphs => count_matches(&PARAGRAPH_RE, code) >= MIN_PARAGRAPHS,
        CriterionKind::Link => contains_all(code, &["<a href=", "</a>"]),
        CriterionKind::Image => code.contains("<img") && IMG_SRC_RE.is_match(code),
    }
}

/// Un resultado por criterio, en el mismo orden de entrada.
pub fn check_solution(code: &str, criteria: &[SolutionCriterion]) -> Vec<CriterionResult> {
    let code = normalize_newlines(code);
    let results: Vec<CriterionResult> = criteria
        .iter()
        .map(|c| CriterionResult {
            criterion: c.criterion.clone(),
            description: c.description.clone(),
            passed: check_criterion(c.kind, &code),
        })
        .collect();

    log::debug!(
        "corrección: {}/{} criterios superados",
        results.iter().filter(|r| r.passed).count(),
        results.len()
    );
    results
}

pub fn grade_html_challenge(challenge: &Challenge, code: &str) -> Vec<CriterionResult> {
    check_solution(code, &challenge.solution_criteria)
}

/// El reto está completo si hay resultados y todos pasan.
pub fn challenge_complete(results: &[CriterionResult]) -> bool {
    !results.is_empty() && results.iter().all(|r| r.passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(kind: CriterionKind, label: &str) -> SolutionCriterion {
        SolutionCriterion {
            kind,
            criterion: label.into(),
            description: format!("{label} description"),
        }
    }

    const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Me</title></head>
  <body>
    <h1>Ada</h1>
    <p class="intro">I write
    code.</p>
    <p>I like maths.</p>
    <a href="https://example.com">Example</a>
    <img src = "me.png" alt="me">
  </body>
</html>"#;

    #[test]
    fn html_structure_needs_all_four_parts() {
        let ok = "<!DOCTYPE html><html><head></head><body></body></html>";
        assert!(check_criterion(CriterionKind::HtmlStructure, ok));

        for missing in ["<!DOCTYPE html>", "<html>", "<head>", "<body>"] {
            let text = ok.replace(missing, "");
            assert!(
                !check_criterion(CriterionKind::HtmlStructure, &text),
                "should fail without {missing}"
            );
        }
    }

    #[test]
    fn heading_matches_any_level_on_one_line() {
        assert!(check_criterion(CriterionKind::Heading, "<h3>Title</h3>"));
        assert!(check_criterion(CriterionKind::Heading, "x <h1></h1> y"));
        assert!(!check_criterion(CriterionKind::Heading, "<h1>Title\n</h1>"));
        assert!(!check_criterion(CriterionKind::Heading, "<h7>Title</h7>"));
    }

    #[test]
    fn paragraphs_need_at_least_two() {
        assert!(!check_criterion(CriterionKind::Paragraphs, "<p>one</p>"));
        assert!(check_criterion(
            CriterionKind::Paragraphs,
            "<p>one</p>\n<p class=\"x\">two\nlines</p>"
        ));
    }

    #[test]
    fn link_needs_href_and_closing_tag() {
        assert!(check_criterion(CriterionKind::Link, "<a href=\"/\">home</a>"));
        assert!(!check_criterion(CriterionKind::Link, "<a>home</a>"));
        assert!(!check_criterion(CriterionKind::Link, "<a href=\"/\">home"));
    }

    #[test]
    fn image_tolerates_spaces_around_equals() {
        assert!(check_criterion(CriterionKind::Image, "<img src=\"a.png\">"));
        assert!(check_criterion(CriterionKind::Image, "<img src = \"a.png\">"));
        assert!(!check_criterion(CriterionKind::Image, "<img alt=\"a\">"));
        assert!(!check_criterion(CriterionKind::Image, "src=\"a.png\""));
    }

    #[test]
    fn results_preserve_criteria_order() {
        let criteria = vec![
            criterion(CriterionKind::Image, "An image"),
            criterion(CriterionKind::HtmlStructure, "Structure"),
            criterion(CriterionKind::Paragraphs, "Paragraphs"),
        ];
        let results = check_solution("<!DOCTYPE html><html><head><body><p>x</p>", &criteria);
        let labels: Vec<&str> = results.iter().map(|r| r.criterion.as_str()).collect();
        assert_eq!(labels, ["An image", "Structure", "Paragraphs"]);
        let passed: Vec<bool> = results.iter().map(|r| r.passed).collect();
        assert_eq!(passed, [false, true, false]);
        assert_eq!(results[0].description, "An image description");
    }

    #[test]
    fn complete_page_passes_every_rule() {
        let criteria: Vec<_> = [
            CriterionKind::HtmlStructure,
            CriterionKind::Heading,
            CriterionKind::Paragraphs,
            CriterionKind::Link,
            CriterionKind::Image,
        ]
        .into_iter()
        .map(|k| criterion(k, "c"))
        .collect();
        let results = check_solution(FULL_PAGE, &criteria);
        assert!(challenge_complete(&results));
    }

    #[test]
    fn crlf_input_is_normalized() {
        let text = "<p>a\r\n</p><p>b</p>";
        let results = check_solution(text, &[criterion(CriterionKind::Paragraphs, "p")]);
        assert!(results[0].passed);
    }

    #[test]
    fn empty_result_list_is_not_complete() {
        assert!(!challenge_complete(&[]));
        assert!(check_solution("anything", &[]).is_empty());
    }
}
