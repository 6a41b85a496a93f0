use std::sync::{Arc, Mutex};

use super::{Backend, Error, MonitorRecord, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(MonitorRecord),
    Delete(String),
}

/// In-memory backend that records every call it receives.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub records: Vec<MonitorRecord>,
    pub failing: bool,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeBackend {
    pub fn with_records(records: Vec<MonitorRecord>) -> FakeBackend {
        FakeBackend {
            records,
            ..Default::default()
        }
    }

    pub fn failing() -> FakeBackend {
        FakeBackend {
            failing: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            return Err(Error::Rejected {
                url: "fake://roster".to_owned(),
                status: 500,
                body: "backend down".to_owned(),
            });
        }
        Ok(())
    }
}

impl Backend for FakeBackend {
    fn list_records(&self) -> Result<Vec<MonitorRecord>> {
        self.record_call(Call::List)?;
        Ok(self.records.clone())
    }

    fn create_record(&self, record: &MonitorRecord) -> Result<()> {
        self.record_call(Call::Create(record.clone()))
    }

    fn delete_record(&self, email: &str) -> Result<()> {
        self.record_call(Call::Delete(email.to_owned()))
    }
}

pub fn record(name: &str, email: &str) -> MonitorRecord {
    MonitorRecord {
        name: name.to_owned(),
        email: email.to_owned(),
        skill: "rust".to_owned(),
        day: "monday".to_owned(),
        hour: "10:00".to_owned(),
    }
}
