use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use timetable_core::collaborators::{HospitalDirectory, HospitalLookup};
use tracing::{debug, warn};

/// Looks hospitals up in the hospital directory service.
///
/// The caller's token is forwarded because the directory only answers
/// authenticated requests.
#[derive(Clone)]
pub struct HttpHospitalDirectory {
    client: Client,
    base_url: String,
}

impl HttpHospitalDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn hospital_url(&self, hospital_id: i64) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), hospital_id)
    }
}

#[async_trait]
impl HospitalDirectory for HttpHospitalDirectory {
    async fn lookup(&self, hospital_id: i64, token: &str) -> HospitalLookup {
        let url = self.hospital_url(hospital_id);

        match self.client.get(&url).bearer_auth(token).send().await {
            Ok(response) if response.status() == StatusCode::OK => HospitalLookup::Exists,
            Ok(response) => {
                debug!("Hospital directory answered {} for {}", response.status(), url);
                HospitalLookup::Missing
            }
            Err(e) => {
                warn!("Hospital directory request to {} failed: {}", url, e);
                HospitalLookup::Unreachable
            }
        }
    }
}
