//! Property tests for reading scripts.

mod common;

use common::Scene;

use cuescript::{
    read_script_from_string,
    script::{classify, Statement, StatementKind},
    validate_script,
};

use proptest::prelude::*;

/// Free text which may contain colons and other punctuation but no line breaks.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :;!?.,'-]{0,40}"
}

fn kind_strategy() -> impl Strategy<Value = StatementKind> {
    prop_oneof![
        Just(StatementKind::Dialogue),
        Just(StatementKind::Animation),
        Just(StatementKind::Choice),
        Just(StatementKind::StoreVariable),
    ]
}

/// Actor and animation pairs, of which the first four exist in `Scene`.
const CUES: &[(&str, &str)] = &[
    ("Fox", "Wave"),
    ("Fox", "Blush"),
    ("Owl", "Hop"),
    ("Bear", "Roar"),
    ("Owl", "Wave"),
    ("Wolf", "Howl"),
    ("Bear", "Sleep"),
];

const NUM_VALID_CUES: usize = 4;

/// Branch labels which start with an uppercase letter.
fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,8}( [a-z]{1,6}){0,2}"
}

/// Lines to build scripts from, some of which fail to read.
const LINES: &[&str] = &[
    "Fox: Hello!",
    "Owl: Hoo: hoo?",
    "Wolf: Grr.",
    "!Fox: Wave, Owl: Hop",
    "!Owl: Fly",
    "[True] -> MetFox",
    "[False] -> Bear.Sleeping",
    "[Maybe] -> Brave",
    "[True] -> Nobody",
    "?Fox",
    "Yes",
    " Fox: Good.",
    "END",
];

proptest! {
    #[test]
    fn lines_built_for_a_kind_are_classified_as_that_kind(
        kind in kind_strategy(),
        text in text_strategy(),
    ) {
        let line = match kind.marker() {
            Some(marker) => format!("{}{}", marker, text),
            None => format!("Fox: {}", text),
        };

        prop_assert_eq!(classify(&line), kind);
    }

    #[test]
    fn dialogue_text_is_kept_exactly_as_written(text in text_strategy()) {
        let scene = Scene::new();
        let content = format!("Owl: {}", text);

        let output = read_script_from_string(&content, &scene.stage()).unwrap();

        match &output.script.statements[0] {
            Statement::Dialogue(line) => {
                prop_assert_eq!(&line.actor.name, "Owl");
                prop_assert_eq!(&line.text, &text);
            }
            other => prop_assert!(false, "expected dialogue but got {:?}", other),
        }
    }

    #[test]
    fn animation_lines_read_only_if_every_cue_exists(
        indices in prop::collection::vec(0..CUES.len(), 1..6),
    ) {
        let scene = Scene::new();

        let content = format!(
            "!{}",
            indices
                .iter()
                .map(|&i| format!("{}: {}", CUES[i].0, CUES[i].1))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let all_valid = indices.iter().all(|&i| i < NUM_VALID_CUES);

        match read_script_from_string(&content, &scene.stage()) {
            Ok(output) => {
                prop_assert!(all_valid, "read invalid line '{}'", content);

                match &output.script.statements[0] {
                    Statement::Animation(cues) => prop_assert_eq!(cues.len(), indices.len()),
                    other => prop_assert!(false, "expected animation but got {:?}", other),
                }
            }
            Err(error) => {
                prop_assert!(!all_valid, "failed to read valid line '{}'", content);

                let num_invalid = indices.iter().filter(|&&i| i >= NUM_VALID_CUES).count();
                prop_assert_eq!(error.errors.len(), num_invalid);
            }
        }
    }

    #[test]
    fn branch_labels_keep_the_order_they_were_written_in(
        labels in prop::collection::vec(label_strategy(), 1..6),
    ) {
        let scene = Scene::new();

        let mut content = String::from("?Fox\n");

        for label in &labels {
            content.push_str(&format!("{}\n Owl: Hoo!\n", label));
        }

        content.push_str("END\n");

        let mut expected: Vec<String> = Vec::new();

        for label in labels {
            if !expected.contains(&label) {
                expected.push(label);
            }
        }

        let output = read_script_from_string(&content, &scene.stage()).unwrap();

        match &output.script.statements[0] {
            Statement::Choice(block) => prop_assert_eq!(block.labels(), expected),
            other => prop_assert!(false, "expected choice but got {:?}", other),
        }
    }

    #[test]
    fn validating_a_script_twice_gives_the_same_verdict(
        indices in prop::collection::vec(0..LINES.len(), 0..12),
    ) {
        let scene = Scene::new();

        let content = indices
            .iter()
            .map(|&i| LINES[i])
            .collect::<Vec<_>>()
            .join("\n");

        let first = validate_script(&content, &scene.stage());
        let second = validate_script(&content, &scene.stage());

        match (first, second) {
            (Ok(first), Ok(second)) => prop_assert_eq!(first.warnings, second.warnings),
            (Err(first), Err(second)) => prop_assert_eq!(first, second),
            (first, second) => prop_assert!(
                false,
                "verdicts differ for '{}': {:?} and {:?}",
                content,
                first.is_ok(),
                second.is_ok()
            ),
        }
    }
}
