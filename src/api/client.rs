use std::time::Duration;

use super::{Backend, ListResponse, MonitorRecord, Result};

pub struct Client {
    agent: ureq::Agent,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Client {
        Client {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl Backend for Client {
    fn list_records(&self) -> Result<Vec<MonitorRecord>> {
        let result_json = self.agent.get(&self.url("monitores")).call()?.into_string()?;

        let list = serde_json::from_str::<ListResponse>(&result_json).map_err(|json_err| {
            log::debug!("list_records failed to parse JSON response: {json_err:?} {result_json}");
            super::Error::from(json_err)
        })?;

        Ok(list.monitores)
    }

    fn create_record(&self, record: &MonitorRecord) -> Result<()> {
        let fields = record.form_fields();
        let form: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();

        log::debug!("POST monitor {}", record.email);
        self.agent
            .post(&self.url("monitor"))
            .send_form(&form)?
            .into_string()?;

        Ok(())
    }

    fn delete_record(&self, email: &str) -> Result<()> {
        log::debug!("DELETE monitor {email}");
        self.agent
            .delete(&self.url("monitor"))
            .query("email", email)
            .call()?
            .into_string()?;

        Ok(())
    }
}
