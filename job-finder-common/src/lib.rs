//! Payloads exchanged with the job recommendation service

use serde::{Deserialize, Serialize};

/// Email and password pair sent as the JSON body of `/register` and `/login`, and reused as the
/// basic auth pair of `/upload-resume`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new<E, P>(email: E, password: P) -> Self
    where
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// True when both fields hold some text. This is the only validation done before sending.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Job posting returned by the service. Treated as opaque display data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    pub url: String,
    pub score: f64,
}

impl JobRecommendation {
    /// Score as displayed in the results table, e.g. `90%` or `87.5%`
    pub fn score_label(&self) -> String {
        format!("{}%", self.score)
    }
}

/// Success body of `/upload-resume`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub job_recommendations: Vec<JobRecommendation>,
}

/// Failure body convention of the service. The field is read opportunistically.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Success body of `/register` and `/login`
#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}
