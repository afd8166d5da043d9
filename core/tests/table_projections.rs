//! Raw-table transformation behavior: placeholder handling, the
//! uniqueness-substituted projection, and TSV rendering.

use cangjie6_core::{parse_raw_table, to_tsv, transform, TableLine, PLACEHOLDER, PUA_BASE};

#[test]
fn unencodable_glyph_gets_placeholder_and_no_candidate_row() {
    let raw = "□□\tymrrr1\tymrrr\n字\tjnd1\tjnd\n";
    let records = parse_raw_table(raw.as_bytes()).unwrap();
    let tables = transform(&records);

    assert_eq!(
        tables.numeral,
        vec![
            TableLine::new(PLACEHOLDER, "ymrrr1"),
            TableLine::new('字', "jnd1"),
        ]
    );
    // The two-character field never reaches the candidate table.
    assert_eq!(tables.code_only, vec![TableLine::new('字', "jnd")]);
}

#[test]
fn substituted_projection_is_one_to_one() {
    let raw = "\
□□\tymrrr1\tymrrr
字\tffyp1a\tfya
字\tjnd1\tjnd
好\tvnd\tvnd
";
    let records = parse_raw_table(raw.as_bytes()).unwrap();
    let tables = transform(&records);

    // Distinct rendered glyphs even though 字 appears under two codes: the
    // reserved-prefix row was substituted away.
    let pua0 = char::from_u32(PUA_BASE).unwrap();
    let pua1 = char::from_u32(PUA_BASE + 1).unwrap();
    assert_eq!(
        tables.substituted,
        vec![
            TableLine::new(pua0, "ymrrr1"),
            TableLine::new(pua0, "ymrrr"),
            TableLine::new(pua1, "ffyp1a"),
            TableLine::new(pua1, "fya"),
            TableLine::new('字', "jnd1"),
            TableLine::new('字', "jnd"),
            TableLine::new('好', "vnd"),
        ]
    );

    // Every (glyph, code) pairing in the projection is unique.
    let mut seen = std::collections::HashSet::new();
    for line in &tables.substituted {
        assert!(seen.insert((line.glyph, line.code.clone())));
    }
}

#[test]
fn rendered_lines_are_tab_separated_pairs() {
    let raw = "字\tjnd1\tjnd\n";
    let records = parse_raw_table(raw.as_bytes()).unwrap();
    let tables = transform(&records);
    assert_eq!(to_tsv(&tables.numeral), "字\tjnd1\n");
    assert_eq!(to_tsv(&tables.code_only), "字\tjnd\n");
}
