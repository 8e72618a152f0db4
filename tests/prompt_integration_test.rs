//! End-to-end prompt behaviour against a scripted terminal.

use consola::{
    constants::messages, error::Error, ConsoleConfig, Constraint, ScriptedTerminal,
    Session,
};
use std::time::Duration;
use test_log::test;

fn session_with_lines(lines: &[&str]) -> Session<ScriptedTerminal> {
    let config = ConsoleConfig::new().with_delay(Duration::ZERO);
    Session::new(ScriptedTerminal::new().with_lines(lines.iter().copied()), config)
        .unwrap()
}

fn count_lines_containing(session: &Session<ScriptedTerminal>, needle: &str) -> usize {
    session.terminal().output().iter().filter(|line| line.contains(needle)).count()
}

#[test]
fn read_int_returns_first_value_satisfying_constraint() {
    let session = session_with_lines(&["abc", "-5", "0", "7"]);

    let value = session.read_int("N", Some(Constraint::Positive)).unwrap();

    assert_eq!(value, 7);
    assert_eq!(count_lines_containing(&session, "N:"), 4);
    assert_eq!(count_lines_containing(&session, messages::INVALID_INT), 1);
    assert_eq!(count_lines_containing(&session, messages::MUST_BE_POSITIVE), 2);
}

#[test]
fn every_constraint_waits_for_a_matching_value() {
    let cases = [
        (Constraint::Positive, ["-1", "0", "1"], 1),
        (Constraint::PositiveOrZero, ["-2", "-1", "0"], 0),
        (Constraint::Negative, ["1", "0", "-1"], -1),
        (Constraint::NegativeOrZero, ["2", "1", "0"], 0),
    ];

    for (constraint, inputs, expected) in cases {
        let session = session_with_lines(&inputs);
        let value = session.read_int("N", Some(constraint)).unwrap();
        assert_eq!(value, expected, "{constraint}");
        assert_eq!(
            count_lines_containing(&session, constraint.message()),
            2,
            "{constraint}"
        );
    }
}

#[test]
fn decimal_reader_never_accepts_text() {
    let session = session_with_lines(&["siete", "7.9.1", "", "7.9"]);
    assert_eq!(session.read_decimal("D", None).unwrap(), 7.9);
    assert_eq!(count_lines_containing(&session, messages::INVALID_DECIMAL), 3);
}

#[test]
fn string_reader_returns_text_as_typed() {
    let session = session_with_lines(&["\t", "  hola mundo"]);
    assert_eq!(session.read_string("Texto").unwrap(), "  hola mundo");
    assert_eq!(count_lines_containing(&session, messages::EMPTY_INPUT), 1);
}

#[test]
fn option_selector_accepts_only_listed_numbers() {
    let options = ["Opción 1", "Opción 2", "Opción 3"];
    let session = session_with_lines(&["0", "4", "dos", "3"]);

    assert_eq!(session.read_option("Opciones", &options).unwrap(), "Opción 3");
    assert_eq!(count_lines_containing(&session, messages::INVALID_OPTION), 3);
    assert_eq!(count_lines_containing(&session, "Selecciona una opción:"), 4);
}

#[test]
fn option_selector_works_with_owned_values() {
    let options = vec![String::from("rojo"), String::from("verde")];
    let session = session_with_lines(&["2"]);
    assert_eq!(session.read_option("Color", &options).unwrap(), "verde");
}

#[test]
fn confirmation_with_custom_keys() {
    let config =
        ConsoleConfig::new().with_delay(Duration::ZERO).with_keys('Y', 'N');
    let terminal = ScriptedTerminal::new().with_keys(['s', 'y', 'n']);
    let session = Session::new(terminal, config).unwrap();

    assert!(session.confirm("¿Continuar?").unwrap());
    assert!(!session.confirm("¿Continuar?").unwrap());
    assert_eq!(count_lines_containing(&session, "¿Continuar? [Y/N]"), 3);
    assert_eq!(count_lines_containing(&session, messages::INVALID_OPTION), 1);
}

#[test]
fn closed_input_is_reported_instead_of_looping() {
    let session = session_with_lines(&["", " "]);
    assert!(matches!(session.read_string("Texto"), Err(Error::InputClosed)));

    let session = session_with_lines(&[]);
    assert!(matches!(session.confirm("¿Salir?"), Err(Error::InputClosed)));
}

#[test]
fn warnings_pause_for_configured_delay() {
    let config = ConsoleConfig::new().with_delay(Duration::from_millis(250));
    let terminal = ScriptedTerminal::new().with_lines(["x", "1"]);
    let session = Session::new(terminal, config).unwrap();

    session.read_int("N", None).unwrap();

    assert_eq!(session.terminal().pauses(), vec![Duration::from_millis(250)]);
}
