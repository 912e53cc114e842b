mod common;

use common::Scene;

use cuescript::{
    error::{print_parse_error, LineErrorKind},
    read_script_from_string,
    script::{Statement, StatementKind, StoreTarget},
    validate_script, Warning,
};

#[test]
fn single_dialogue_line_reads_into_a_single_dialogue_statement() {
    let scene = Scene::new();

    let output = read_script_from_string("Fox: Hi", &scene.stage()).unwrap();

    assert_eq!(output.script.len(), 1);

    match &output.script.statements[0] {
        Statement::Dialogue(line) => {
            assert_eq!(&line.actor.name, "Fox");
            assert_eq!(&line.text, "Hi");
        }
        other => panic!("expected a dialogue statement but got {:?}", other),
    }

    assert!(output.log.is_empty());
}

#[test]
fn choice_block_reads_branches_in_the_order_they_were_written() {
    let scene = Scene::new();

    let content = "\
?Fox
I like you
 Fox: heard that before
I love you
 Fox: never heard that
END
";

    let output = read_script_from_string(content, &scene.stage()).unwrap();

    assert_eq!(output.script.len(), 1);

    let block = match &output.script.statements[0] {
        Statement::Choice(block) => block,
        other => panic!("expected a choice statement but got {:?}", other),
    };

    assert_eq!(&block.actor.name, "Fox");
    assert_eq!(block.labels(), vec!["I like you", "I love you"]);

    let texts = block
        .branches
        .iter()
        .map(|branch| {
            assert_eq!(branch.script.len(), 1);

            match &branch.script.statements[0] {
                Statement::Dialogue(line) => line.text.clone(),
                other => panic!("expected a dialogue statement but got {:?}", other),
            }
        })
        .collect::<Vec<_>>();

    assert_eq!(texts, vec!["heard that before", "never heard that"]);
}

#[test]
fn storing_into_known_variable_reads_and_unknown_variable_fails() {
    let scene = Scene::new();

    let output = read_script_from_string("[True] -> MetFox", &scene.stage()).unwrap();

    match &output.script.statements[0] {
        Statement::StoreVariable(assignment) => {
            assert!(assignment.value);
            assert!(matches!(
                &assignment.target,
                StoreTarget::Variable { name, .. } if name == "MetFox"
            ));
        }
        other => panic!("expected a store statement but got {:?}", other),
    }

    let error = read_script_from_string("[True] -> Missing", &scene.stage()).unwrap_err();

    assert_eq!(
        error.kinds().collect::<Vec<_>>(),
        vec![&LineErrorKind::UnknownVariable {
            name: "Missing".to_string()
        }]
    );
}

#[test]
fn animation_line_fails_as_a_whole_if_a_single_animation_is_missing() {
    let scene = Scene::new();

    let error = read_script_from_string("!Fox: Wave, Owl: Jump", &scene.stage()).unwrap_err();

    assert_eq!(error.errors.len(), 1);
    assert_eq!(
        error.errors[0].kind,
        LineErrorKind::UnknownAnimation {
            actor: "Owl".to_string(),
            animation: "Jump".to_string()
        }
    );

    let output = read_script_from_string("!Fox: Wave, Owl: Hop", &scene.stage()).unwrap();

    match &output.script.statements[0] {
        Statement::Animation(cues) => assert_eq!(cues.len(), 2),
        other => panic!("expected an animation statement but got {:?}", other),
    }
}

#[test]
fn nested_choices_are_only_reachable_through_their_branch() {
    let scene = Scene::new();

    let content = "\
?Fox
Ask about the owl
 Fox: Which one?
 ?Fox
 The small one
  Owl: Hoo!
 The wise one
  !Owl: Hop
 END
Leave
 Fox: Bye!
END
Fox: Anyway.
";

    let output = read_script_from_string(content, &scene.stage()).unwrap();

    let kinds = output
        .script
        .iter()
        .map(Statement::kind)
        .collect::<Vec<_>>();
    assert_eq!(kinds, vec![StatementKind::Choice, StatementKind::Dialogue]);

    let outer = match &output.script.statements[0] {
        Statement::Choice(block) => block,
        other => panic!("expected a choice statement but got {:?}", other),
    };

    assert_eq!(outer.labels(), vec!["Ask about the owl", "Leave"]);

    let branch = &outer.branches[0].script;
    assert_eq!(branch.len(), 2);

    match &branch.statements[1] {
        Statement::Choice(inner) => {
            assert_eq!(inner.labels(), vec!["The small one", "The wise one"])
        }
        other => panic!("expected a nested choice but got {:?}", other),
    }

    assert!(outer.branches[1]
        .script
        .iter()
        .all(|statement| statement.kind() == StatementKind::Dialogue));
}

#[test]
fn choice_without_terminator_fails() {
    let scene = Scene::new();

    let content = "\
?Fox
Yes
 Fox: Good.
No
 Fox: Too bad.
";

    let error = read_script_from_string(content, &scene.stage()).unwrap_err();

    assert_eq!(
        error.kinds().collect::<Vec<_>>(),
        vec![&LineErrorKind::MissingTerminator]
    );
}

#[test]
fn carriage_returns_are_removed_before_reading() {
    let scene = Scene::new();

    let content = "Fox: Hi!\r\n?Fox\r\nYes\r\n Fox: Good.\r\nEND\r\n";

    let output = read_script_from_string(content, &scene.stage()).unwrap();

    assert_eq!(output.script.len(), 2);

    match &output.script.statements[1] {
        Statement::Choice(block) => assert_eq!(block.labels(), vec!["Yes"]),
        other => panic!("expected a choice statement but got {:?}", other),
    }
}

#[test]
fn blank_and_empty_scripts_read_into_empty_scripts() {
    let scene = Scene::new();

    assert!(read_script_from_string("", &scene.stage())
        .unwrap()
        .script
        .is_empty());
    assert!(read_script_from_string("\n\n\r\n", &scene.stage())
        .unwrap()
        .script
        .is_empty());
}

#[test]
fn all_broken_lines_are_reported_when_printed() {
    let scene = Scene::new();

    let content = "\
Wolf: Where is everyone?
Fox: Over here!
!Fox: Dance
[Maybe] -> Brave
Fox without separator
";

    let error = validate_script(content, &scene.stage()).unwrap_err();

    assert_eq!(error.errors.len(), 4);

    let printed = print_parse_error(&error).unwrap();
    let lines = printed.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("(line 1)"));
    assert!(lines[3].starts_with("(line 5)"));
}

#[test]
fn warnings_are_returned_for_valid_scripts() {
    let scene = Scene::new();

    let content = "\
[True] -> Owl.Sleeping
?Fox
Yes
 Fox: Good.
Yes
 Fox: Very good.
END
";

    let output = read_script_from_string(content, &scene.stage()).unwrap();

    let warnings = output
        .log
        .iter()
        .map(|message| message.warning.clone())
        .collect::<Vec<_>>();

    assert_eq!(
        warnings,
        vec![
            Warning::UnknownParameter {
                actor: "Owl".to_string(),
                parameter: "Sleeping".to_string()
            },
            Warning::DuplicateBranch {
                label: "Yes".to_string()
            }
        ]
    );
}
