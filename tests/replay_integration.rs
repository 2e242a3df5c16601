//! Integration tests for the script-to-SVG replay pipeline

use pivot_square::{
    parse, replay, replay_with_config, EngineEvent, LevelSet, ReplayConfig, ReplayError,
    ScriptError, Stylesheet, SvgConfig,
};

#[test]
fn test_script_with_comments_parses() {
    let input = r#"
        // start somewhere else
        level "diagonal"
        /* arm the top-left corner */
        click 100, 50
        move 100 150
        down 100, 150
        wait 250
        cancel freeze
    "#;

    let script = parse(input).expect("Should parse");
    assert_eq!(script.commands.len(), 6);
}

#[test]
fn test_solving_a_custom_level() {
    let levels = LevelSet::from_str(
        r#"
[[level]]
name = "one-step"
description = "A single quarter turn"
square = { x = 300, y = 200, size = 100 }
target = { x = 200, y = 200 }
"#,
    )
    .unwrap();
    let config = ReplayConfig::new().with_levels(levels);

    let outcome =
        replay_with_config("click 250, 150 move 250, 250 down 250, 250", &config).unwrap();
    let report = outcome.report;
    assert!(report.solved);
    assert_eq!(report.moves, 1);
    assert_eq!(
        report.events.last(),
        Some(&EngineEvent::Solved { moves: 1 })
    );
    assert!((report.square.x - 200.0).abs() < 1e-9);
    assert!((report.square.y - 200.0).abs() < 1e-9);
}

#[test]
fn test_left_right_level_rolls_towards_target() {
    // Roll right about the bottom-right corner: the top-right corner comes down
    let config = ReplayConfig::new().with_start_level("leftRight");
    let outcome = replay_with_config("click 200, 350 move 300, 350 down 300, 350", &config).unwrap();

    let report = outcome.report;
    assert_eq!(report.level, "leftRight");
    assert_eq!(report.moves, 1);
    assert!(!report.solved);
    assert!((report.square.x - 250.0).abs() < 1e-9);
    assert!((report.square.y - 300.0).abs() < 1e-9);
}

#[test]
fn test_input_during_rotation_is_ignored() {
    let outcome = replay(
        r#"
        click 250, 150
        move 250, 250
        down 250, 250
        wait 100
        click 250, 250
        "#,
    )
    .unwrap();

    let report = outcome.report;
    assert_eq!(report.moves, 1);
    let armed = report
        .events
        .iter()
        .filter(|e| matches!(e, EngineEvent::PivotArmed { .. }))
        .count();
    assert_eq!(armed, 1);
}

#[test]
fn test_custom_stylesheet_and_compact_svg() {
    let stylesheet = Stylesheet::from_str(
        r##"
[colors]
square = "#123456"
"##,
    )
    .unwrap();
    let config = ReplayConfig::new()
        .with_stylesheet(stylesheet)
        .with_svg(SvgConfig::new().with_pretty_print(false).with_standalone(false));

    let outcome = replay_with_config("", &config).unwrap();
    assert!(outcome.svg.starts_with("<svg"));
    assert!(outcome.svg.contains(r##"fill="#123456""##));
    assert!(!outcome.svg.contains('\n'));
}

#[test]
fn test_parse_errors_are_reported_with_context() {
    let source = "click 10, 10\nwait -3\n";
    let err = replay(source).unwrap_err();
    match err {
        ReplayError::Parse(errors) => {
            assert_eq!(errors.len(), 1);
            let ScriptError::Syntax { span, .. } = &errors[0];
            assert_eq!(&source[span.clone()], "-3");
            let report = errors[0].format(source, "bad.replay");
            assert!(report.contains("bad.replay"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_level_command_fails() {
    let err = replay("level sideways").unwrap_err();
    assert!(matches!(err, ReplayError::Level(_)));
    assert!(err.to_string().contains("sideways"));
}
