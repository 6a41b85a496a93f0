use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;

use crate::api::{Backend, MonitorRecord};

enum Request {
    Create(MonitorRecord),
    Delete(String),
}

/// Fire-and-forget front of a [`Backend`].
///
/// Listing runs on the caller's thread. Creates and deletes are queued to a
/// single worker thread and never awaited; every failure ends up in the log
/// and nowhere else. Dropping the `Remote` waits for queued requests to finish.
pub struct Remote {
    backend: Arc<dyn Backend>,
    sender: Option<mpsc::Sender<Request>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Remote {
    pub fn spawn(backend: Arc<dyn Backend>) -> anyhow::Result<Remote> {
        let (sender, receiver) = mpsc::channel::<Request>();

        let worker_backend = Arc::clone(&backend);
        let worker = thread::Builder::new()
            .name("roster-requests".to_owned())
            .spawn(move || {
                for request in receiver {
                    send(worker_backend.as_ref(), request);
                }
            })
            .context("Spawning request worker thread")?;

        Ok(Remote {
            backend,
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Empty on any failure.
    pub fn list_records(&self) -> Vec<MonitorRecord> {
        match self.backend.list_records() {
            Ok(records) => {
                log::info!("Loaded {} monitors", records.len());
                records
            }
            Err(err) => {
                log::error!("Listing monitors failed: {err}");
                Vec::new()
            }
        }
    }

    pub fn create_record(&self, record: MonitorRecord) {
        self.enqueue(Request::Create(record));
    }

    pub fn delete_record(&self, email: &str) {
        self.enqueue(Request::Delete(email.to_owned()));
    }

    fn enqueue(&self, request: Request) {
        let Some(sender) = &self.sender else {
            return;
        };

        if sender.send(request).is_err() {
            log::error!("Request worker has stopped, dropping request");
        }
    }
}

fn send(backend: &dyn Backend, request: Request) {
    match request {
        Request::Create(record) => {
            if let Err(err) = backend.create_record(&record) {
                log::error!("Creating monitor {} failed: {err}", record.email);
            }
        }
        Request::Delete(email) => {
            if let Err(err) = backend.delete_record(&email) {
                log::error!("Deleting monitor {email} failed: {err}");
            }
        }
    }
}

impl Drop for Remote {
    fn drop(&mut self) {
        // closing the channel ends the worker loop once the queue is drained
        self.sender.take();

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Request worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{record, Call, FakeBackend};

    #[test]
    fn lists_records_in_server_order() {
        let backend = FakeBackend::with_records(vec![
            record("Ana", "ana@example.com"),
            record("Bruno", "bruno@example.com"),
        ]);
        let remote = Remote::spawn(Arc::new(backend.clone())).unwrap();

        let names: Vec<_> = remote.list_records().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Ana", "Bruno"]);
    }

    #[test]
    fn failed_list_is_empty() {
        let remote = Remote::spawn(Arc::new(FakeBackend::failing())).unwrap();
        assert!(remote.list_records().is_empty());
    }

    #[test]
    fn queued_requests_reach_the_backend_in_order() {
        let backend = FakeBackend::default();
        let remote = Remote::spawn(Arc::new(backend.clone())).unwrap();

        remote.create_record(record("Ana", "ana@example.com"));
        remote.delete_record("ana@example.com");
        drop(remote);

        assert_eq!(
            backend.calls(),
            [
                Call::Create(record("Ana", "ana@example.com")),
                Call::Delete("ana@example.com".to_owned()),
            ]
        );
    }

    #[test]
    fn failing_requests_are_not_retried() {
        let backend = FakeBackend::failing();
        let remote = Remote::spawn(Arc::new(backend.clone())).unwrap();

        remote.create_record(record("Ana", "ana@example.com"));
        remote.delete_record("bruno@example.com");
        drop(remote);

        assert_eq!(backend.calls().len(), 2);
    }
}
