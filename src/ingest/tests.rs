use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use tempfile::tempdir;

use crate::config::LibrarySettings;

use super::job;
use super::pool::WorkerPool;
use super::types::{CancelToken, IngestEvent, JobId, ScanRequest, SubmitError};

fn garbage_files(dir: &std::path::Path, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let p = dir.join(format!("track-{i:03}.mp3"));
            fs::write(&p, b"not a real mp3").unwrap();
            p
        })
        .collect()
}

fn run_inline(request: ScanRequest, cancel: &CancelToken) -> Vec<IngestEvent> {
    let (tx, rx) = mpsc::channel();
    job::run(JobId(0), request, &LibrarySettings::default(), cancel, &tx);
    drop(tx);
    rx.into_iter().collect()
}

#[test]
fn job_preserves_input_order_and_degrades_bad_files() {
    let dir = tempdir().unwrap();
    // Deliberately unsorted input: Files requests keep caller order.
    let mut paths = garbage_files(dir.path(), 3);
    paths.reverse();

    let events = run_inline(ScanRequest::Files(paths.clone()), &CancelToken::new());

    let progress: Vec<(usize, usize)> = events
        .iter()
        .filter_map(|e| match e {
            IngestEvent::Progress {
                processed, total, ..
            } => Some((*processed, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);

    match events.last().unwrap() {
        IngestEvent::Finished {
            tracks, cancelled, ..
        } => {
            assert!(!cancelled);
            let got: Vec<_> = tracks.iter().map(|t| t.source_path.clone()).collect();
            assert_eq!(got, paths);
            // Unreadable tags degrade to empty fields, never abort the batch.
            for t in tracks {
                assert_eq!(t.metadata.title, "");
                assert!(t.metadata.cover.is_none());
            }
        }
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[test]
fn job_with_empty_input_finishes_immediately_with_empty_batch() {
    let events = run_inline(ScanRequest::Files(Vec::new()), &CancelToken::new());
    assert_eq!(events.len(), 1);
    match &events[0] {
        IngestEvent::Finished {
            tracks, cancelled, ..
        } => {
            assert!(tracks.is_empty());
            assert!(!cancelled);
        }
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[test]
fn pre_cancelled_job_terminates_normally_with_no_tracks() {
    let dir = tempdir().unwrap();
    let paths = garbage_files(dir.path(), 4);

    let cancel = CancelToken::new();
    cancel.cancel();
    let events = run_inline(ScanRequest::Files(paths), &cancel);

    assert_eq!(events.len(), 1);
    match &events[0] {
        IngestEvent::Finished {
            tracks, cancelled, ..
        } => {
            assert!(tracks.is_empty());
            assert!(cancelled, "cancellation is completion, not error");
        }
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[test]
fn unreadable_folder_fails_the_whole_batch_once() {
    let events = run_inline(
        ScanRequest::Folder(PathBuf::from("/no/such/folder")),
        &CancelToken::new(),
    );
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], IngestEvent::Failed { .. }));
}

#[test]
fn folder_request_enumerates_and_ingests_in_name_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.mp3"), b"x").unwrap();
    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    let events = run_inline(
        ScanRequest::Folder(dir.path().to_path_buf()),
        &CancelToken::new(),
    );
    match events.last().unwrap() {
        IngestEvent::Finished { tracks, .. } => {
            let names: Vec<_> = tracks.iter().map(|t| t.display_name.as_str()).collect();
            assert_eq!(names, vec!["a.mp3", "b.mp3"]);
        }
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[test]
fn pool_rejects_a_second_job_while_one_is_live() {
    let dir = tempdir().unwrap();
    let paths = garbage_files(dir.path(), 500);

    let (mut pool, rx) = WorkerPool::new(LibrarySettings::default());
    let first = pool.submit(ScanRequest::Files(paths)).unwrap();
    assert_eq!(
        pool.submit(ScanRequest::Files(Vec::new())),
        Err(SubmitError::Busy)
    );

    // The partial batch arrives as a normal Finished event after cancel.
    assert_eq!(pool.cancel_active(), Some(first));
    let finished = rx
        .iter()
        .find_map(|e| match e {
            IngestEvent::Finished {
                tracks, cancelled, ..
            } => Some((tracks, cancelled)),
            _ => None,
        })
        .unwrap();
    let (tracks, cancelled) = finished;
    assert!(cancelled);
    assert!(tracks.len() < 500);

    // Prefix-consistency: delivered tracks follow input order exactly.
    for (i, t) in tracks.iter().enumerate() {
        assert_eq!(t.display_name, format!("track-{i:03}.mp3"));
    }
}

#[test]
fn pool_accepts_a_new_job_after_the_previous_one_finished() {
    let (mut pool, rx) = WorkerPool::new(LibrarySettings::default());
    pool.submit(ScanRequest::Files(Vec::new())).unwrap();

    // Wait for the terminal event, then give the thread a moment to exit.
    let _ = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    for _ in 0..50 {
        if !pool.is_busy() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    assert!(pool.submit(ScanRequest::Files(Vec::new())).is_ok());
}

#[test]
fn cancel_with_no_active_job_is_a_no_op() {
    let (mut pool, _rx) = WorkerPool::new(LibrarySettings::default());
    assert_eq!(pool.cancel_active(), None);
}
