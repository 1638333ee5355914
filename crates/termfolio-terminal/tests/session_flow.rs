use termfolio_terminal::{CommandEntry, CommandRegistry, HistoryRecord, InputSession};
use termfolio_types::Payload;

fn skills_payload() -> Payload {
    Payload::text("HTML5, Rust")
}

fn small_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    reg.register(CommandEntry::new("help", "Mostra os comandos", None));
    reg.register(CommandEntry::new("clear", "Limpa o terminal", None));
    reg.register(CommandEntry::new(
        "skills",
        "Lista minhas skills",
        Some(skills_payload()),
    ));
    reg
}

#[test]
fn type_complete_commit_recall() {
    let mut session = InputSession::new(small_registry());

    session.on_text_changed("sk");
    assert_eq!(session.current_suggestion(), Some("skills"));

    session.on_request_complete();
    assert_eq!(session.current_buffer(), "skills");
    assert_eq!(session.current_suggestion(), None);

    session.on_commit();
    assert_eq!(
        session.history_log(),
        [HistoryRecord {
            input: "skills".to_string(),
            output: skills_payload(),
        }]
    );
    assert_eq!(session.current_buffer(), "");
    assert_eq!(session.history_cursor(), None);

    session.on_recall_older();
    assert_eq!(session.current_buffer(), "skills");
    assert_eq!(session.history_cursor(), Some(0));
}

#[test]
fn clear_after_several_commands() {
    let mut session = InputSession::new(small_registry());
    for line in ["help", "?", "skills", "whoami"] {
        session.on_text_changed(line);
        session.on_commit();
    }
    assert_eq!(session.history_log().len(), 4);
    assert_eq!(
        session.history_log()[3].output,
        Payload::text("Command not found: whoami")
    );

    session.on_text_changed("Clear ");
    session.on_commit();
    assert!(session.history_log().is_empty());
}

#[test]
fn builtin_registry_end_to_end() {
    let mut session = InputSession::new(termfolio_terminal::builtin_registry());
    session.on_text_changed("comm");
    assert_eq!(session.current_suggestion(), Some("commands"));
    session.on_request_complete();
    session.on_commit();
    let text = session.history_log()[0].output.as_text().unwrap().to_string();
    assert_eq!(text.lines().count(), 7);
    assert!(text.starts_with("aboutme      - "));
}

#[test]
fn tab_after_recall_keeps_recalled_command() {
    let mut session = InputSession::new(small_registry());
    session.on_text_changed("skills");
    session.on_commit();

    session.on_text_changed("he");
    assert_eq!(session.current_suggestion(), Some("help"));
    session.on_recall_older();
    session.on_request_complete();
    assert_eq!(session.current_buffer(), "skills");

    session.on_commit();
    assert_eq!(session.history_log().len(), 2);
    assert_eq!(session.history_log()[1].input, "skills");
}
