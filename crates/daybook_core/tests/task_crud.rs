use daybook_core::{MemoryStore, ServiceError, Task, TaskService};

fn service() -> TaskService<MemoryStore<Task>> {
    TaskService::new(MemoryStore::new())
}

#[test]
fn create_and_get_roundtrip() {
    let service = service();

    let created = service.create("water plants", "balcony and kitchen").unwrap();
    assert_eq!(created.id(), "1");

    let fetched = service.get_by_id(created.id()).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name(), "water plants");
    assert_eq!(fetched.description(), "balcony and kitchen");
}

#[test]
fn created_tasks_receive_sequential_identifiers() {
    let service = service();

    let first = service.create("one", "first task").unwrap();
    let second = service.create("two", "second task").unwrap();

    assert_eq!(first.id(), "1");
    assert_eq!(second.id(), "2");
    assert_eq!(service.get_all().len(), 2);
}

#[test]
fn create_with_invalid_name_fails_and_stores_nothing() {
    let service = service();

    let err = service
        .create("a name that is clearly too long", "short description")
        .unwrap_err();
    match err {
        ServiceError::Invalid(validation) => assert_eq!(validation.field(), "name"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.get_all().is_empty());
}

#[test]
fn update_with_one_invalid_field_changes_nothing() {
    let service = service();
    let created = service.create("water plants", "balcony and kitchen").unwrap();

    let err = service
        .update(created.id(), "repot plants", &"x".repeat(51))
        .unwrap_err();
    match err {
        ServiceError::Invalid(validation) => assert_eq!(validation.field(), "description"),
        other => panic!("unexpected error: {other}"),
    }

    let stored = service.get_by_id(created.id()).unwrap();
    assert_eq!(stored, created);
}

#[test]
fn update_replaces_all_fields() {
    let service = service();
    let created = service.create("water plants", "balcony and kitchen").unwrap();

    let updated = service
        .update(created.id(), "repot plants", "new pots arrived")
        .unwrap();

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.name(), "repot plants");
    assert_eq!(updated.description(), "new pots arrived");
    assert_eq!(service.get_by_id(created.id()).unwrap(), updated);
}

#[test]
fn update_absent_id_reports_not_found_and_creates_no_entry() {
    let service = service();

    let err = service.update("5", "name", "description").unwrap_err();
    assert_eq!(err, ServiceError::NotFound("5".to_string()));
    assert!(service.get_all().is_empty());
}

#[test]
fn delete_removes_task_and_absent_id_returns_false() {
    let service = service();
    let created = service.create("water plants", "balcony and kitchen").unwrap();

    assert!(service.delete(created.id()));
    assert!(service.get_by_id(created.id()).is_none());
    assert!(!service.delete(created.id()));
}
