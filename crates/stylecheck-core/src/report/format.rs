//! Deterministic text rendering of reports.

use crate::diff::DiffEntry;
use crate::report::model::{ConformanceReport, ParagraphReport};
use std::collections::HashSet;

const PARAGRAPH_OK: &str = "paragraph properties ok";
const FONT_OK: &str = "font properties ok";

/// Render one entry without the trailing `;`.
pub fn format_entry(entry: &DiffEntry) -> String {
    match entry {
        DiffEntry::Changed {
            property,
            expected,
            actual,
        } => format!("change {property} from {expected} to {actual}"),
        DiffEntry::Added { property, value } => {
            format!("add property {property} with value {value}")
        }
        DiffEntry::Removed { property, value } => {
            format!("remove property {property} with value {value}")
        }
    }
}

/// Render entries as `a; b; c;`, keeping only the first occurrence of each
/// message. Messages are compared after trimming leading whitespace.
pub fn format_entries<'a>(entries: impl IntoIterator<Item = &'a DiffEntry>) -> String {
    let mut seen = HashSet::new();
    let mut parts: Vec<String> = Vec::new();
    for entry in entries {
        let message = format!("{};", format_entry(entry));
        let message = message.trim_start().to_string();
        if seen.insert(message.clone()) {
            parts.push(message);
        }
    }
    parts.join(" ")
}

/// Paragraph property verdict line
pub fn paragraph_line(report: &ParagraphReport) -> String {
    if report.paragraph_ok() {
        PARAGRAPH_OK.to_string()
    } else {
        format_entries(&report.paragraph_diff)
    }
}

/// Font verdict line, merging all runs of the paragraph
pub fn font_line(report: &ParagraphReport) -> String {
    if report.font_ok() {
        FONT_OK.to_string()
    } else {
        format_entries(report.run_diffs.iter().flatten())
    }
}

/// Render the terminal form of a report.
///
/// ```text
/// Checking paragraphs...
/// Paragraph #1 Heading text...
///     paragraph properties ok
///     add property italic with value true;
///     paragraph is not a list element (ok)
/// ```
pub fn render_text_report(report: &ConformanceReport) -> String {
    let mut out = String::from("Checking paragraphs...\n");

    for (number, paragraph) in &report.paragraphs {
        match paragraph.text.as_deref() {
            Some(text) => out.push_str(&format!("\nParagraph #{number} {text}...\n")),
            None => out.push_str(&format!("\nParagraph #{number}\n")),
        }
        out.push_str(&format!("\t{}\n", paragraph_line(paragraph)));
        out.push_str(&format!("\t{}\n", font_line(paragraph)));
        if !paragraph.substyles_in_use.is_empty() {
            out.push_str(&format!(
                "\tSubstyles {} are used\n",
                paragraph.substyles_in_use.join(", ")
            ));
        }
        out.push_str(&format!("\t{}\n", paragraph.list));
    }

    let mut unused = report.unused_substyles().peekable();
    if unused.peek().is_some() {
        out.push('\n');
        for usage in unused {
            out.push_str(&format!(
                "Substyle {} is not in use in paragraph #{}\n",
                usage.substyle, usage.paragraph
            ));
        }
    }

    let s = &report.summary;
    out.push_str(&format!(
        "\nChecked {} paragraphs: {} with paragraph defects, {} with font defects, {} with list defects, {} unused substyle assignments\n",
        s.paragraphs_checked, s.paragraph_defects, s.font_defects, s.list_defects, s.unused_substyles
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance::{ListVerdict, SubstyleUsage};
    use crate::core_types::RunId;
    use std::collections::BTreeMap;

    #[test]
    fn test_entry_forms() {
        assert_eq!(
            format_entry(&DiffEntry::changed("bold", "true", "false")),
            "change bold from true to false"
        );
        assert_eq!(
            format_entry(&DiffEntry::added("italic", "true")),
            "add property italic with value true"
        );
        assert_eq!(
            format_entry(&DiffEntry::removed("margin", "0")),
            "remove property margin with value 0"
        );
    }

    #[test]
    fn test_entries_deduplicated_keeping_first() {
        let entries = vec![
            DiffEntry::added("italic", "true"),
            DiffEntry::changed("bold", "true", "false"),
            DiffEntry::added("italic", "true"),
        ];
        assert_eq!(
            format_entries(&entries),
            "add property italic with value true; change bold from true to false;"
        );
    }

    #[test]
    fn test_same_complaint_across_runs_shown_once() {
        let report = ParagraphReport {
            number: 3,
            style: "BODY".to_string(),
            text: None,
            paragraph_diff: vec![DiffEntry::removed("margin", "0")],
            run_diffs: vec![
                vec![DiffEntry::changed("bold", "true", "false")],
                vec![],
                vec![DiffEntry::changed("bold", "true", "false")],
            ],
            suppressed: vec![],
            list: ListVerdict::NotListElement,
            substyles_in_use: vec![],
        };
        assert_eq!(paragraph_line(&report), "remove property margin with value 0;");
        assert_eq!(font_line(&report), "change bold from true to false;");
    }

    #[test]
    fn test_ok_lines() {
        let report = ParagraphReport {
            number: 1,
            style: "BODY".to_string(),
            text: None,
            paragraph_diff: vec![],
            run_diffs: vec![],
            suppressed: vec![],
            list: ListVerdict::ListElement,
            substyles_in_use: vec![],
        };
        assert_eq!(paragraph_line(&report), "paragraph properties ok");
        assert_eq!(font_line(&report), "font properties ok");
    }

    fn sample_report() -> ConformanceReport {
        let paragraph = ParagraphReport {
            number: 1,
            style: "HEADER".to_string(),
            text: Some("Heading text".to_string()),
            paragraph_diff: vec![],
            run_diffs: vec![
                vec![DiffEntry::added("italic", "true")],
                vec![DiffEntry::added("italic", "true")],
            ],
            suppressed: vec![],
            list: ListVerdict::NotListElement,
            substyles_in_use: vec!["SUB-EMPH".to_string()],
        };
        let usage = vec![SubstyleUsage {
            substyle: "SUB-QUOTE".to_string(),
            paragraph: 1,
            in_use: false,
        }];
        ConformanceReport::new(RunId::new(), BTreeMap::from([(1, paragraph)]), usage)
    }

    #[test]
    fn test_render_text_report() {
        let text = render_text_report(&sample_report());
        let expected = "Checking paragraphs...\n\
             \n\
             Paragraph #1 Heading text...\n\
             \tparagraph properties ok\n\
             \tadd property italic with value true;\n\
             \tSubstyles SUB-EMPH are used\n\
             \tparagraph is not a list element (ok)\n\
             \n\
             Substyle SUB-QUOTE is not in use in paragraph #1\n\
             \n\
             Checked 1 paragraphs: 0 with paragraph defects, 1 with font defects, 0 with list defects, 1 unused substyle assignments\n";
        assert_eq!(text, expected);
    }
}
