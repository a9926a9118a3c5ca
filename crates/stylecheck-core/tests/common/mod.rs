use stylecheck_core::{DiffEntry, ListKind, Paragraph, PropertySet, Style, Substyle};

/// Parse a style string, panicking on malformed test input
#[allow(dead_code)]
pub fn props(style: &str) -> PropertySet {
    PropertySet::parse_style_string(style).expect("test style string should parse")
}

/// The HEADER style used across the scenario tests:
/// paragraph `margin: 0`, font `bold: true`, assigned to paragraph 0
#[allow(dead_code)]
pub fn header_style() -> Style {
    Style::new("HEADER", props("margin: 0;"), props("bold: true;"), vec![0])
}

/// Paragraph `index` with `margin: 0` and the given runs
#[allow(dead_code)]
pub fn paragraph(index: usize, runs: &[&str]) -> Paragraph {
    Paragraph::new(
        index,
        props("margin: 0;"),
        runs.iter().map(|r| props(r)).collect(),
        ListKind::None,
    )
}

#[allow(dead_code)]
pub fn emph_substyle(paragraphs: Vec<usize>) -> Substyle {
    Substyle::new("SUB-EMPH", props("bold: false;"), paragraphs)
}

/// Expected `Added` entry, spelled out the way the engine emits it
#[allow(dead_code)]
pub fn added(property: &str, value: &str) -> DiffEntry {
    DiffEntry::Added {
        property: property.to_string(),
        value: value.to_string(),
    }
}

/// Expected `Changed` entry, spelled out the way the engine emits it
#[allow(dead_code)]
pub fn changed(property: &str, expected: &str, actual: &str) -> DiffEntry {
    DiffEntry::Changed {
        property: property.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}
