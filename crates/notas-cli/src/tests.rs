use clap::{CommandFactory, Parser};
use notas_core::editor::{EditorRequest, NoteEditor, RichContent};
use notas_core::{Note, NoteId};
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::common::{
    format_note_lines, format_timestamp, note_to_list_item, parse_note_id, truncate_with_ellipsis,
};
use crate::commands::editor::{resolve_editor, ExternalEditor};
use crate::error::CliError;

fn note(id: i64, title: &str, body: &str, completed: bool) -> Note {
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        body: body.to_string(),
        completed,
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn resolve_editor_prefers_visual_then_editor() {
    assert_eq!(
        resolve_editor(Some("code --wait".to_string()), Some("nano".to_string())),
        "code --wait"
    );
    assert_eq!(
        resolve_editor(Some("  ".to_string()), Some(" nano ".to_string())),
        "nano"
    );
    assert!(!resolve_editor(None, None).is_empty());
}

#[cfg(unix)]
#[test]
fn external_editor_keeps_body_when_editor_exits_cleanly() {
    let mut editor = ExternalEditor::default();
    editor.set_content("<p>milk</p>\n\n");

    editor.edit_with("true").unwrap();

    assert_eq!(editor.content(), "<p>milk</p>");
}

#[cfg(unix)]
#[test]
fn external_editor_reads_back_saved_file() {
    let mut saved = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut saved, b"<p>eggs</p>\n").unwrap();
    let mut editor = ExternalEditor::default();
    editor.set_content("<p>milk</p>");

    // `cp <saved> <note file>` stands in for a user saving new content.
    editor
        .edit_with(&format!("cp {}", saved.path().display()))
        .unwrap();

    assert_eq!(editor.content(), "<p>eggs</p>");
}

#[cfg(unix)]
#[test]
fn external_editor_reports_failing_command() {
    let mut editor = ExternalEditor::default();
    editor.set_content("<p>milk</p>");

    let error = editor.edit_with("false").unwrap_err();

    assert!(matches!(error, CliError::EditorFailed(_)));
    assert_eq!(editor.content(), "<p>milk</p>");
}

#[test]
fn external_editor_rejects_blank_command() {
    let error = ExternalEditor::default().edit_with("   ").unwrap_err();
    assert!(matches!(error, CliError::EditorFailed(_)));
}

#[test]
fn truncate_with_ellipsis_collapses_whitespace() {
    assert_eq!(truncate_with_ellipsis("a  b\n c", 10), "a b c");
    assert_eq!(truncate_with_ellipsis("abcdefghij", 5), "ab...");
    assert_eq!(truncate_with_ellipsis("abcde", 5), "abcde");
}

#[test]
fn parse_note_id_accepts_padded_numbers() {
    assert_eq!(parse_note_id(" 42 ").unwrap(), NoteId::new(42));
}

#[test]
fn parse_note_id_rejects_non_numeric_input() {
    let error = parse_note_id("abc").unwrap_err();
    assert!(matches!(error, CliError::InvalidNoteId(raw) if raw == "abc"));
}

#[test]
fn format_note_lines_marks_completion_and_strips_markup() {
    let lines = format_note_lines(&[
        note(7, "Groceries", "<p>milk</p>", false),
        note(12, "Done", "", true),
    ]);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("    7  [ ] Groceries"));
    assert!(lines[0].ends_with("  milk"));
    assert_eq!(lines[1], "   12  [x] Done");
}

#[test]
fn note_to_list_item_carries_plain_preview() {
    let item = note_to_list_item(&note(3, "Plan", "<b>ship</b> <i>it</i>", true));

    assert_eq!(item.id, 3);
    assert_eq!(item.title, "Plan");
    assert_eq!(item.preview, "ship it");
    assert_eq!(item.body, "<b>ship</b> <i>it</i>");
    assert!(item.completed);
}

#[test]
fn format_timestamp_renders_utc() {
    assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
}

#[test]
fn external_editor_holds_body_markup() {
    let mut editor = ExternalEditor::default();
    editor.set_content("<p>hello</p>");
    assert_eq!(editor.content(), "<p>hello</p>");
}

#[test]
fn edit_form_turns_overrides_into_update_request() {
    let existing = note(5, "Old", "<p>body</p>", false);
    let mut editor = NoteEditor::edit(ExternalEditor::default(), &existing);
    editor.completed = true;

    match editor.to_request().unwrap() {
        EditorRequest::Update(id, patch) => {
            assert_eq!(id, NoteId::new(5));
            assert_eq!(patch.title, "Old");
            assert_eq!(patch.body, "<p>body</p>");
            assert!(patch.completed);
        }
        EditorRequest::Create(_) => panic!("expected an update request"),
    }
}

#[test]
fn parses_edit_with_completion_override() {
    let cli = Cli::try_parse_from(["notas", "edit", "3", "--completed", "true"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Edit {
            ref id,
            title: None,
            body: None,
            completed: Some(true),
        } if id == "3"
    ));
}

#[test]
fn parses_global_profile_after_subcommand() {
    let cli = Cli::try_parse_from(["notas", "ls", "--json", "--profile", "work"]).unwrap();
    assert_eq!(cli.profile.as_deref(), Some("work"));
    assert!(matches!(cli.command, Commands::List { json: true }));
}

#[test]
fn parses_config_init() {
    let cli = Cli::try_parse_from([
        "notas",
        "config",
        "init",
        "--url",
        "https://notes.example.com",
        "--timeout-secs",
        "30",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Init {
                ref url,
                timeout_secs: Some(30),
                no_activate: false,
            }
        } if url == "https://notes.example.com"
    ));
}

#[test]
fn add_requires_a_title() {
    assert!(Cli::try_parse_from(["notas", "add", "--body", "text"]).is_err());
}
