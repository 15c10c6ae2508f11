use scribble_core::db::open_db_in_memory;
use scribble_core::{NoteDraft, NoteService, NoteServiceError, SqliteNoteRepository};

#[test]
fn full_lifecycle_create_trash_restore_purge() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service
        .create(&NoteDraft::new("Shopping", "Milk, eggs"))
        .unwrap();
    assert!(!created.trashed);
    assert!(service.list_active().unwrap().iter().any(|n| n.id == created.id));
    assert!(service.list_trashed().unwrap().is_empty());

    let trashed = service.trash(created.id).unwrap();
    assert!(trashed.trashed);
    assert!(service.list_active().unwrap().is_empty());
    assert!(service
        .list_trashed()
        .unwrap()
        .iter()
        .any(|n| n.id == created.id));

    let restored = service.restore(created.id).unwrap();
    assert!(!restored.trashed);
    assert!(service.list_trashed().unwrap().is_empty());

    service.purge(created.id).unwrap();
    assert!(service.list_all().unwrap().is_empty());
    assert!(matches!(
        service.get(created.id).unwrap_err(),
        NoteServiceError::NoteNotFound(missing) if missing == created.id
    ));
}

#[test]
fn trash_restore_round_trip_preserves_title_and_content() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let before = service.create(&NoteDraft::new("keep me", "intact")).unwrap();
    service.trash(before.id).unwrap();
    let after = service.restore(before.id).unwrap();

    assert_eq!(after.title, before.title);
    assert_eq!(after.content, before.content);
    assert_eq!(after, before);
}

#[test]
fn update_returns_stored_record() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create(&NoteDraft::new("v1", "first")).unwrap();
    let updated = service
        .update(created.id, &NoteDraft::new("v2", "second"))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "v2");
    assert_eq!(updated.content, "second");
    assert_eq!(service.get(created.id).unwrap(), updated);
}

#[test]
fn single_record_operations_report_not_found_for_absent_id() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let absent = 9999;
    assert!(matches!(
        service.get(absent).unwrap_err(),
        NoteServiceError::NoteNotFound(id) if id == absent
    ));
    assert!(matches!(
        service.update(absent, &NoteDraft::new("x", "y")).unwrap_err(),
        NoteServiceError::NoteNotFound(id) if id == absent
    ));
    assert!(matches!(
        service.trash(absent).unwrap_err(),
        NoteServiceError::NoteNotFound(id) if id == absent
    ));
    assert!(matches!(
        service.restore(absent).unwrap_err(),
        NoteServiceError::NoteNotFound(id) if id == absent
    ));
    assert!(matches!(
        service.purge(absent).unwrap_err(),
        NoteServiceError::NoteNotFound(id) if id == absent
    ));
}

#[test]
fn purge_succeeds_on_active_note_without_prior_trash() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create(&NoteDraft::new("skip the bin", "")).unwrap();
    service.purge(created.id).unwrap();
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn purge_twice_reports_not_found_on_second_call() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let created = service.create(&NoteDraft::new("once", "")).unwrap();
    service.purge(created.id).unwrap();
    assert!(matches!(
        service.purge(created.id).unwrap_err(),
        NoteServiceError::NoteNotFound(id) if id == created.id
    ));
}
