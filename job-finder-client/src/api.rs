use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use gloo_net::http::{Request, Response};
use job_finder_common::{Credentials, ErrorBody, MessageBody, UploadResponse};
use thiserror::Error;
use web_sys::{File, FormData};

/// Upload endpoint call. `credentials` is only present when uploads are authenticated.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest<F> {
    pub resume: F,
    pub credentials: Option<Credentials>,
}

/// Calls the job recommendation service can answer. Register and login return the optional
/// `message` of the success body.
#[cfg_attr(test, mockall::automock(type File = String;))]
#[async_trait(?Send)]
pub trait JobFinderApi {
    /// Browser handle of a picked resume file
    type File: Clone + 'static;

    async fn register(&self, credentials: &Credentials) -> Result<Option<String>>;

    async fn login(&self, credentials: &Credentials) -> Result<Option<String>>;

    async fn upload_resume(&self, request: UploadRequest<Self::File>) -> Result<UploadResponse>;
}

#[derive(Clone, Copy)]
pub struct HttpApi {
    url: &'static str,
}

impl HttpApi {
    pub fn new(url: &'static str) -> Self {
        Self { url }
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<String> {
        let url = format!("{}/{path}", self.url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        read_body(response).await
    }
}

#[async_trait(?Send)]
impl JobFinderApi for HttpApi {
    type File = File;

    async fn register(&self, credentials: &Credentials) -> Result<Option<String>> {
        let body = self.post_credentials("register", credentials).await?;
        Ok(parse_message(&body))
    }

    async fn login(&self, credentials: &Credentials) -> Result<Option<String>> {
        let body = self.post_credentials("login", credentials).await?;
        Ok(parse_message(&body))
    }

    async fn upload_resume(&self, request: UploadRequest<File>) -> Result<UploadResponse> {
        let url = format!("{}/upload-resume", self.url);
        let form = FormData::new().map_err(Error::browser)?;
        form.append_with_blob("resume", &request.resume).map_err(Error::browser)?;
        // Content-Type is left to the browser so the multipart boundary is included
        let mut builder = Request::post(&url);
        if let Some(credentials) = &request.credentials {
            builder = builder.header("Authorization", &basic_auth_value(credentials));
        }
        let response = builder.body(form).send().await?;
        let body = read_body(response).await?;
        parse_upload(&body)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("API error\n{0}")]
    ApiError(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Response body cannot be processed. {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Browser error. {0}")]
    Browser(String),
}

impl Error {
    fn browser(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{value:?}"))
    }

    /// Text shown to the user. Only a server provided `error` field is surfaced, everything else
    /// becomes `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::ApiError(message) => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::ApiError(value)
    }
}

/// `Authorization` header value carrying `email:password` as HTTP basic auth
pub fn basic_auth_value(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.email, credentials.password);
    format!("Basic {}", STANDARD.encode(pair))
}

async fn read_body(response: Response) -> Result<String> {
    // ensure we've got 2xx status
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await?;
    if ok {
        Ok(body)
    } else {
        Err(failure(status, &body))
    }
}

/// Classify a non-2xx response. A JSON body with an `error` field is a server reported failure,
/// anything else only keeps the status.
fn failure(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
        }) => message.into(),
        _ => Error::Status(status),
    }
}

fn parse_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|body| body.message)
}

fn parse_upload(body: &str) -> Result<UploadResponse> {
    Ok(serde_json::from_str(body)?)
}
