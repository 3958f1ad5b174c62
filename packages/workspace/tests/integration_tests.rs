//! Editing session wired to persistence: auto-save and template round
//! trips through the filesystem store.

use std::time::Duration;

use reportcraft_editor::{ComponentPatch, EditSession};
use reportcraft_model::{ComponentKind, ReportDocument};
use reportcraft_workspace::{AutoSaver, FsTemplateStore, TemplateStore};

fn init_logs() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_edit_autosave_reload_cycle() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsTemplateStore::open(dir.path()).unwrap();
    let mut saver = AutoSaver::with_interval(Duration::ZERO);

    let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
    let heading = session.add_component(ComponentKind::Heading);
    session.update_component(&heading, ComponentPatch::content("Annual Results"));

    saver.note_change(session.document());
    assert!(saver.poll(session.document(), &mut store));

    let loaded = store.load_templates().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], *session.document());

    // Resume editing from the loaded copy; new ids must not collide.
    let mut resumed = EditSession::new(loaded.into_iter().next().unwrap());
    let fresh = resumed.add_component(ComponentKind::Text);
    assert!(resumed.document().find_component(&heading).is_some());
    assert_ne!(fresh, heading);
}

#[test]
fn test_save_now_and_delete_template() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsTemplateStore::open(dir.path()).unwrap();
    let mut saver = AutoSaver::new();

    let doc = ReportDocument::new("report-1".to_string());
    saver.note_change(&doc);
    saver.save_now(&doc, &mut store).unwrap();
    assert!(!saver.has_unsaved_changes());

    store.delete_template("report-1").unwrap();
    assert!(store.load_templates().unwrap().is_empty());
}

#[test]
fn test_undo_state_still_persists_cleanly() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsTemplateStore::open(dir.path()).unwrap();
    let mut saver = AutoSaver::with_interval(Duration::ZERO);

    let mut session = EditSession::new(ReportDocument::new("report-1".to_string()));
    session.add_component(ComponentKind::Chart);
    saver.note_change(session.document());
    assert!(saver.poll(session.document(), &mut store));

    // Undo returns to the pre-chart state; the saver sees a new change.
    session.undo();
    saver.note_change(session.document());
    assert!(saver.has_unsaved_changes());
    assert!(saver.poll(session.document(), &mut store));

    let loaded = store.load_templates().unwrap();
    assert_eq!(loaded[0], *session.document());
    assert!(loaded[0].components.is_empty());
}
