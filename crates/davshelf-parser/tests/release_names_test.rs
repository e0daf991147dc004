//! Table-driven checks over realistic release names.

use davshelf_parser::guess_title;

struct Fixture {
    input: &'static str,
    expected: &'static str,
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        input: "Breaking.Bad.S01E01.720p.2008.mkv",
        expected: "Breaking Bad",
    },
    Fixture {
        input: "Game.of.Thrones.S08E06.1080p.2019.mkv",
        expected: "Game of Thrones",
    },
    Fixture {
        input: "The_Matrix_1999_1080p.mp4",
        expected: "The Matrix",
    },
    Fixture {
        input: "Dune-Part-Two-2024-2160p.mkv",
        expected: "Dune Part Two",
    },
    Fixture {
        input: "stranger.things.s4e9.480p.avi",
        expected: "stranger things",
    },
    Fixture {
        input: "Inception.mkv",
        expected: "Inception",
    },
    // Other release tags are kept; only the fixed noise patterns are removed.
    Fixture {
        input: "The.Dark.Knight.2008.PROPER.720p.BluRay.x264-WiKi.mkv",
        expected: "The Dark Knight PROPER BluRay x264 WiKi",
    },
    // Brackets are not delimiters, so they survive the year removal.
    Fixture {
        input: "Movie Title (2010).mkv",
        expected: "Movie Title ()",
    },
];

#[test]
fn all_fixtures() {
    let mut failures = Vec::new();
    for fixture in FIXTURES {
        let actual = guess_title(fixture.input);
        if actual != fixture.expected {
            failures.push(format!(
                "{:?}: expected {:?}, got {:?}",
                fixture.input, fixture.expected, actual
            ));
        }
    }
    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn output_is_trimmed_and_single_spaced() {
    for fixture in FIXTURES {
        let title = guess_title(fixture.input);
        assert_eq!(title, title.trim());
        assert!(!title.contains("  "), "double space in {title:?}");
    }
}

#[test]
fn idempotent_on_clean_titles() {
    for title in ["Inception", "Breaking Bad", "The Office US"] {
        assert_eq!(guess_title(title), title);
    }
}
