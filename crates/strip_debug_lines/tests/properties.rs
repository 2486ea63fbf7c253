// crates/strip_debug_lines/tests/properties.rs

use debug_marker::{DEBUG_MARKER, DEBUG_TOKEN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strip_debug_lines::{contains_bytes, split_lines, strip_debug_section, StripError};

const FRAGMENTS: &[&str] = &[
    "void main() {",
    "}",
    "",
    "  int x = 1;",
    "dbgout(\"x\");",
    "  dbgout_level = 2;",
    "// dbgou",
    "string s = \"BEGIN DEBUG\";",
    "/// BEGIN DEBUG",
];

/// Builds a random document that contains the marker at the returned index.
fn random_document(rng: &mut StdRng) -> (Vec<String>, usize) {
    let before = rng.gen_range(0..20);
    let after = rng.gen_range(0..10);
    let mut lines: Vec<String> = (0..before)
        .map(|i| format!("{} // {}", FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())], i))
        .collect();
    lines.push(DEBUG_MARKER.to_string());
    lines.extend((0..after).map(|_| FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())].to_string()));
    (lines, before)
}

fn render(lines: &[String], rng: &mut StdRng) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        // A lone `\r` before an empty line would fuse with its `\n`.
        let next_is_empty = lines.get(i + 1).map_or(false, |next| next.is_empty());
        out.extend_from_slice(line.as_bytes());
        out.extend_from_slice(match rng.gen_range(0..3) {
            0 => &b"\n"[..],
            2 if !next_is_empty => &b"\r"[..],
            _ => &b"\r\n"[..],
        });
    }
    out
}

#[test]
fn test_output_is_ordered_filtered_prefix() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let (lines, marker_index) = random_document(&mut rng);
        let input = render(&lines, &mut rng);

        let output = strip_debug_section(&input, DEBUG_MARKER.as_bytes(), DEBUG_TOKEN.as_bytes())
            .expect("marker is present");

        let expected: Vec<&str> = lines[..marker_index]
            .iter()
            .map(String::as_str)
            .filter(|line| !line.contains(DEBUG_TOKEN))
            .collect();
        assert_eq!(output, expected.join("\n").into_bytes());

        for line in split_lines(&output) {
            assert!(!contains_bytes(line, DEBUG_TOKEN.as_bytes()));
            assert_ne!(line, DEBUG_MARKER.as_bytes());
        }
    }
}

#[test]
fn test_clean_document_round_trips() {
    let input = "fn a() {}\n\nfn b() {}\n/// BEGIN DEBUG ///\n";
    let output = strip_debug_section(
        input.as_bytes(),
        DEBUG_MARKER.as_bytes(),
        DEBUG_TOKEN.as_bytes(),
    )
    .unwrap();
    assert_eq!(output, b"fn a() {}\n\nfn b() {}".to_vec());
}

#[test]
fn test_documents_without_marker_always_fail() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let (mut lines, marker_index) = random_document(&mut rng);
        lines.remove(marker_index);
        let input = render(&lines, &mut rng);

        let result = strip_debug_section(&input, DEBUG_MARKER.as_bytes(), DEBUG_TOKEN.as_bytes());
        assert!(matches!(result, Err(StripError::MarkerNotFound { .. })));
    }
}
