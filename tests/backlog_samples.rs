//! Whole-document parsing against the sample backlogs

use rstest::rstest;
use storied::backlog::ast::{DiagnosticKind, Fragment};
use storied::backlog::testing::{assert_backlog, samples};
use storied::{parse, parse_document};

#[test]
fn test_single_story_sample() {
    let parsed = samples::parse_sample("000-single-story.txt");
    assert!(parsed.diagnostics.is_empty());

    assert_backlog(&parsed.document)
        .group_count(1)
        .group(0, |group| {
            group
                .key("Backlog")
                .starts_at_line(2)
                .entry_count(1)
                .entry(0, |entry| {
                    entry
                        .assert_story()
                        .who("user")
                        .what("to login")
                        .why("i can access my account")
                        .raw("AS A USER I WANT TO LOGIN SO THAT I CAN ACCESS MY ACCOUNT")
                        .at_line(2)
                        .subitem_count(1)
                        .subitem(0, |item| {
                            item.raw("Remember session #security @alice")
                                .fragments(&[
                                    Fragment::text("Remember session "),
                                    Fragment::hashtag("#security"),
                                    Fragment::text(" "),
                                    Fragment::mention("@alice"),
                                ])
                                .no_sizes();
                        });
                });
        });
}

#[test]
fn test_sprints_sample() {
    let parsed = samples::parse_sample("010-sprints.txt");
    assert!(parsed.diagnostics.is_empty());

    assert_backlog(&parsed.document)
        .group_keys(&["Sprint 1", "Sprint 2"])
        .story_count(3)
        .bug_count(1)
        .group(0, |group| {
            group
                .key("Sprint 1")
                .starts_at_line(1)
                .entry_count(2)
                .entry(0, |entry| {
                    entry
                        .assert_story()
                        .who("admin")
                        .what("to invite users")
                        .why("my team can join")
                        .sizes(&["3"])
                        .subitem_count(2)
                        .subitem(0, |item| {
                            item.hashtags(&["#copy"]).mentions(&[]).no_sizes();
                        })
                        .subitem(1, |item| {
                            item.raw("Expiring links @bob [1]")
                                .mentions(&["@bob"])
                                .sizes(&["1"]);
                        });
                })
                .entry(1, |entry| {
                    entry
                        .assert_story()
                        .who("user")
                        .what("dark mode")
                        .why("my eyes relax")
                        .subitem_count(0);
                });
        })
        .group(1, |group| {
            group
                .key("Sprint 2")
                .entry_count(2)
                .entry(0, |entry| {
                    entry
                        .assert_story()
                        .who("guest")
                        .what("a preview")
                        .why("i can decide");
                })
                .entry(1, |entry| {
                    entry
                        .assert_bug()
                        .raw("#bug Preview crashes on empty boards [2]")
                        .hashtags(&["#bug"])
                        .sizes(&["2"]);
                });
        });
}

#[test]
fn test_ungrouped_sample_reports_and_continues() {
    let parsed = samples::parse_sample("020-ungrouped.txt");

    let kinds: Vec<DiagnosticKind> = parsed.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::UngroupedStory, DiagnosticKind::UngroupedBug]
    );
    assert_eq!(parsed.diagnostics[0].range.start.line, 0);
    assert_eq!(parsed.diagnostics[1].range.start.line, 2);
    assert!(parsed.has_errors());

    assert_backlog(&parsed.document)
        .group_count(1)
        .group(0, |group| {
            group.key("Roadmap").entry_count(1).entry(0, |entry| {
                entry
                    .assert_story()
                    .who("member")
                    .what("badges")
                    .why("i feel recognized");
            });
        });
}

#[test]
fn test_every_sample_parses_identically_twice() {
    for name in samples::list().unwrap() {
        let source = samples::get_string(&name);
        assert_eq!(parse(&source), parse(&source), "{} is not stable", name);
    }
}

#[test]
fn test_no_headings_means_no_groups() {
    let source = "AS A USER I WANT TO LOGIN SO THAT I CAN ACCESS MY ACCOUNT\n\
                  just some notes\n\
                  AS AN ADMIN I WANT REPORTS SO THAT I CAN PLAN\n";
    let parsed = parse(source);
    assert!(parsed.document.is_empty());
    assert_eq!(parsed.diagnostics.len(), 2);
    assert!(parsed
        .diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::UngroupedStory));
}

#[test]
fn test_size_inside_story_line() {
    let doc = parse_document(
        "# Backlog\nAS A USER I WANT TO LOGIN [3] SO THAT I CAN ACCESS MY ACCOUNT\n",
    );
    assert_backlog(&doc).group(0, |group| {
        group.entry(0, |entry| {
            entry
                .assert_story()
                .who("user")
                .what("to login")
                .why("i can access my account")
                .sizes(&["3"]);
        });
    });
}

#[test]
fn test_who_cleaning_leaves_other_segments_alone() {
    let doc = parse_document("# G\nAS A USER I WANT TO SEE WHAT I OWN SO THAT I CAN PLAN\n");
    assert_backlog(&doc).group(0, |group| {
        group.entry(0, |entry| {
            entry
                .assert_story()
                .who("user")
                .what("to see what i own")
                .why("i can plan");
        });
    });
}

#[rstest]
#[case("Sprint 1\n----\n\n", "Sprint 1")]
#[case("# sprint 1\n\n", "Sprint 1")]
#[case("## a new hope\n\n", "a New Hope")]
#[case("  Release v2  \n---\n\n", "Release V2")]
fn test_group_keys(#[case] source: &str, #[case] key: &str) {
    assert_backlog(&parse_document(source)).group_keys(&[key]);
}

#[rstest]
#[case("#bug Crash on save [5]", &["5"])]
#[case("- #bug Crash on save", &[])]
#[case("#bug Crash [2] on save [3]", &["2", "3"])]
fn test_bug_lines(#[case] line: &str, #[case] sizes: &[&str]) {
    let doc = parse_document(&format!("# Bugs\n{}\n", line));
    assert_backlog(&doc).bug_count(1).group(0, |group| {
        group.entry(0, |entry| {
            entry.assert_bug().hashtags(&["#bug"]).sizes(sizes);
        });
    });
}

#[test]
fn test_bug_token_needs_word_boundary() {
    let doc = parse_document("# G\n#bugfix AS A USER I WANT X SO THAT Y\n");
    assert_eq!(doc.bug_count(), 0);
}

#[test]
fn test_crlf_line_endings() {
    let unix = parse_document("# G\nAS A USER I WANT TO LOGIN SO THAT I CAN\n  detail\n");
    let windows =
        parse_document("# G\r\nAS A USER I WANT TO LOGIN SO THAT I CAN\r\n  detail\r\n");
    assert_eq!(unix.stories().count(), windows.stories().count());
    let story = windows.stories().next().unwrap();
    assert_eq!(story.why, "i can");
    assert_eq!(story.subitems[0].raw, "detail");
}
