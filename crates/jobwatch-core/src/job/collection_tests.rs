use super::*;
use crate::job::JobStatus;
use std::sync::Arc;

fn spec(name: &str) -> NewJob {
    NewJob::new(name, "0 * * * *", "srv", "/data", "*.csv")
}

/// File-sensing collection seeded with ids 1..=3; id 3 is paused, id 2 failed.
fn seeded() -> JobCollection {
    let records = vec![
        JobRecord::new(1, spec("Customer Data Import")),
        JobRecord::new(2, spec("Order Processing")).with_status(JobStatus::Failed),
        JobRecord::new(3, spec("Inventory Updates")).with_status(JobStatus::Paused),
    ];
    JobCollection::with_records(JobKind::FileSensing, records).unwrap()
}

#[test]
fn test_empty_collection_starts_at_one() {
    let collection = JobCollection::new(JobKind::Filtering);
    assert!(collection.is_empty());
    let record = collection.create(spec("first")).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_create_after_seed_yields_next_id() {
    let collection = seeded();
    let record = collection.create(spec("X")).unwrap();
    assert_eq!(record.id, 4);
}

#[test]
fn test_create_then_list_shows_record_last() {
    let collection = seeded();
    collection.create(spec("X")).unwrap();

    let records = collection.list();
    assert_eq!(records.len(), 4);
    let last = records.last().unwrap();
    assert_eq!(last.job_name, "X");
    assert_eq!(last.status, JobStatus::Running);
    assert!(last.last_successful_attempt.is_none());
    assert!(last.last_sensing_attempt.is_none());
}

#[test]
fn test_list_preserves_insertion_order() {
    let collection = seeded();
    let ids: Vec<u64> = collection.list().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    // listing is non-destructive
    assert_eq!(collection.list().len(), 3);
}

#[test]
fn test_create_rejects_blank_field() {
    let collection = seeded();
    let result = collection.create(NewJob::new("", "0 * * * *", "srv", "/d", "*"));
    assert!(matches!(result, Err(JobError::Validation(_))));
    assert_eq!(collection.len(), 3);
    // a rejected create does not consume an id
    assert_eq!(collection.create(spec("ok")).unwrap().id, 4);
}

#[test]
fn test_toggle_paused_resumes() {
    let collection = seeded();
    let record = collection.toggle(3).unwrap();
    assert_eq!(record.status, JobStatus::Running);
    assert_eq!(collection.get(3).unwrap().status, JobStatus::Running);
}

#[test]
fn test_toggle_running_and_failed_pause() {
    let collection = seeded();
    assert_eq!(collection.toggle(1).unwrap().status, JobStatus::Paused);
    assert_eq!(collection.toggle(2).unwrap().status, JobStatus::Paused);
    assert_eq!(collection.toggle(2).unwrap().status, JobStatus::Running);
}

#[test]
fn test_toggle_paused_twice_is_paused() {
    let collection = seeded();
    collection.toggle(3).unwrap();
    assert_eq!(collection.toggle(3).unwrap().status, JobStatus::Paused);
}

#[test]
fn test_toggle_unknown_id_leaves_collection_unchanged() {
    let collection = seeded();
    let before = collection.list();
    assert_eq!(
        collection.toggle(99),
        Err(JobError::NotFound {
            kind: JobKind::FileSensing,
            id: 99
        })
    );
    assert_eq!(collection.list(), before);
}

#[test]
fn test_with_records_rejects_duplicate_ids() {
    let records = vec![JobRecord::new(1, spec("a")), JobRecord::new(1, spec("b"))];
    assert!(JobCollection::with_records(JobKind::Filtering, records).is_err());
}

#[test]
fn test_sparse_seed_ids_never_collide() {
    let records = vec![JobRecord::new(2, spec("a")), JobRecord::new(7, spec("b"))];
    let collection = JobCollection::with_records(JobKind::Filtering, records).unwrap();
    assert_eq!(collection.create(spec("c")).unwrap().id, 8);
}

#[test]
fn test_concurrent_creates_assign_unique_ids() {
    let collection = Arc::new(JobCollection::new(JobKind::FileSensing));
    let threads = 8;
    let per_thread = 50;

    std::thread::scope(|scope| {
        for t in 0..threads {
            let collection = collection.clone();
            scope.spawn(move || {
                for i in 0..per_thread {
                    collection.create(spec(&format!("job-{}-{}", t, i))).unwrap();
                }
            });
        }
    });

    let mut ids: Vec<u64> = collection.list().iter().map(|r| r.id).collect();
    ids.sort_unstable();
    let expected: Vec<u64> = (1..=(threads * per_thread) as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_concurrent_toggles_and_creates() {
    let collection = Arc::new(seeded());

    std::thread::scope(|scope| {
        let toggler = collection.clone();
        scope.spawn(move || {
            // even number of toggles on a paused job leaves it paused
            for _ in 0..100 {
                toggler.toggle(3).unwrap();
            }
        });
        let creator = collection.clone();
        scope.spawn(move || {
            for i in 0..100 {
                creator.create(spec(&format!("c{}", i))).unwrap();
            }
        });
    });

    assert_eq!(collection.get(3).unwrap().status, JobStatus::Paused);
    assert_eq!(collection.len(), 103);
}
