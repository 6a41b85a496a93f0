use super::{MonitorRecord, Result};

/// The three endpoints of the roster backend.
///
/// Implementations are shared between the UI thread, which lists, and the
/// request worker, which creates and deletes.
pub trait Backend: Send + Sync {
    /// `GET /monitores`, in server order.
    fn list_records(&self) -> Result<Vec<MonitorRecord>>;

    /// `POST /monitor` with the record as form fields. The response body is ignored.
    fn create_record(&self, record: &MonitorRecord) -> Result<()>;

    /// `DELETE /monitor?email=<email>`. The response body is ignored.
    fn delete_record(&self, email: &str) -> Result<()>;
}
