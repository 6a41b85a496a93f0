use crate::{config::AppConfig, remote::Remote};

pub struct AppContext {
    pub config: AppConfig,
    pub remote: Remote,
}
