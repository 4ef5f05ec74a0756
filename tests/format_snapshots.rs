//! Snapshot tests for the text formats, run over the sample backlogs

use storied::backlog::formats::{to_tag_str, to_treeviz_str, FormatRegistry};
use storied::backlog::testing::samples;

#[test]
fn test_sprints_treeviz() {
    let parsed = samples::parse_sample("010-sprints.txt");
    insta::assert_snapshot!(to_treeviz_str(&parsed.document), @r"
⧉ 2 groups
├─ § Sprint 1
│ ├─ ¶ admin / to invite users / my team can join [3]
│ │ ├─ • Email template #copy
│ │ └─ • Expiring links @bob [1]
│ └─ ¶ user / dark mode / my eyes relax
└─ § Sprint 2
  ├─ ¶ guest / a preview / i can decide
  └─ ✗ #bug Preview crashes on empty boards [2]
");
}

#[test]
fn test_single_story_tag() {
    let parsed = samples::parse_sample("000-single-story.txt");
    insta::assert_snapshot!(to_tag_str(&parsed.document), @r#"
<document>
  <group key="Backlog">
    <story who="user" what="to login" why="i can access my account">
      <subitem>
        <text>Remember session </text>
        <hashtag>#security</hashtag>
        <text> </text>
        <mention>@alice</mention>
      </subitem>
    </story>
  </group>
</document>
"#);
}

#[test]
fn test_registry_serves_every_format_for_every_sample() {
    let registry = FormatRegistry::with_defaults();
    for name in samples::list().unwrap() {
        let parsed = samples::parse_sample(&name);
        for (format, _) in registry.list_formats() {
            let output = registry.serialize(&parsed.document, &format);
            assert!(output.is_ok(), "{} failed for {}", format, name);
        }
    }
}

#[test]
fn test_yaml_round_trips_through_serde_value() {
    let parsed = samples::parse_sample("010-sprints.txt");
    let yaml = FormatRegistry::with_defaults()
        .serialize(&parsed.document, "yaml")
        .unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["groups"][1]["entries"][1]["type"], "bug");
    assert_eq!(value["groups"][0]["entries"][0]["sizes"][0], "3");
}
