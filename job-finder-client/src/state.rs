//! View state of the job finder page and the transitions applied around each request.
//!
//! Every user action is split into a `begin_*` method that checks preconditions and hands back
//! the request to send (`None` means nothing is sent) and a `finish_*` method that applies the
//! outcome. Nothing here performs I/O.

use job_finder_common::{Credentials, JobRecommendation, UploadResponse};

use crate::{
    api::{self, UploadRequest},
    config::AuthMode,
};

pub const MISSING_RESUME: &str = "Please upload a resume!";
pub const LOGIN_REQUIRED: &str = "Please log in before uploading a resume!";
pub const MISSING_CREDENTIALS: &str = "Email and password are required";
pub const UPLOAD_FALLBACK: &str = "Something went wrong";
pub const REGISTER_FALLBACK: &str = "Registration failed";
pub const LOGIN_FALLBACK: &str = "Login failed";
pub const REGISTER_SUCCESS: &str = "Registration successful";
pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGOUT_MESSAGE: &str = "Logged out";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Bootstrap background class of the toast
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "text-bg-success",
            Self::Error => "text-bg-danger",
            Self::Info => "text-bg-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Errored,
}

/// Everything the page displays. `F` is the browser file handle of the picked resume.
#[derive(Debug)]
pub struct JobFinder<F> {
    auth_mode: AuthMode,
    credentials: Credentials,
    logged_in: bool,
    resume: Option<F>,
    recommendations: Vec<JobRecommendation>,
    loading: bool,
    error: Option<String>,
    notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl<F> JobFinder<F> {
    pub fn new(auth_mode: AuthMode) -> Self {
        Self {
            auth_mode,
            credentials: Credentials::default(),
            logged_in: false,
            resume: None,
            recommendations: Vec::new(),
            loading: false,
            error: None,
            notifications: Vec::new(),
            next_notification_id: 0,
        }
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn resume(&self) -> Option<&F> {
        self.resume.as_ref()
    }

    pub fn recommendations(&self) -> &[JobRecommendation] {
        &self.recommendations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn request_status(&self) -> RequestStatus {
        match (self.loading, &self.error) {
            (true, _) => RequestStatus::Loading,
            (false, Some(_)) => RequestStatus::Errored,
            (false, None) => RequestStatus::Idle,
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.credentials.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.credentials.password = password;
    }

    /// Store the picked file. No type or size check is done.
    pub fn select_resume(&mut self, resume: Option<F>) {
        self.resume = resume;
    }

    pub fn notify<S>(&mut self, kind: NotificationKind, message: S) -> u64
    where
        S: Into<String>,
    {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|notification| notification.id != id);
    }

    fn begin_credentials_request(&mut self) -> Option<Credentials> {
        self.error = None;
        if !self.credentials.is_complete() {
            log::warn!("Credentials request skipped, missing email or password");
            self.notify(NotificationKind::Error, MISSING_CREDENTIALS);
            return None;
        }
        Some(self.credentials.clone())
    }

    pub fn begin_register(&mut self) -> Option<Credentials> {
        self.begin_credentials_request()
    }

    /// Registration never touches the session flag
    pub fn finish_register(&mut self, result: api::Result<Option<String>>) {
        match result {
            Ok(message) => {
                let message = message.unwrap_or_else(|| REGISTER_SUCCESS.to_owned());
                self.notify(NotificationKind::Success, message);
            }
            Err(error) => {
                self.notify(NotificationKind::Error, error.user_message(REGISTER_FALLBACK));
            }
        }
    }

    pub fn begin_login(&mut self) -> Option<Credentials> {
        self.begin_credentials_request()
    }

    /// On success the session flag is set and the credentials are kept for later uploads
    pub fn finish_login(&mut self, result: api::Result<Option<String>>) {
        match result {
            Ok(message) => {
                self.logged_in = true;
                let message = message.unwrap_or_else(|| LOGIN_SUCCESS.to_owned());
                self.notify(NotificationKind::Success, message);
            }
            Err(error) => {
                self.logged_in = false;
                self.notify(NotificationKind::Error, error.user_message(LOGIN_FALLBACK));
            }
        }
    }

    /// Local only, the service keeps no session to invalidate
    pub fn logout(&mut self) {
        self.error = None;
        self.logged_in = false;
        self.credentials = Credentials::default();
        self.notify(NotificationKind::Info, LOGOUT_MESSAGE);
    }

    /// Apply an upload outcome. Whichever response is applied last wins, even if an older
    /// request is still in flight.
    pub fn finish_upload(&mut self, result: api::Result<UploadResponse>) {
        self.loading = false;
        match result {
            Ok(response) => self.recommendations = response.job_recommendations,
            Err(error) => self.error = Some(error.user_message(UPLOAD_FALLBACK)),
        }
    }
}

impl<F: Clone> JobFinder<F> {
    /// Check the upload preconditions. When they hold, prior results and error are cleared,
    /// loading is set and the request is returned.
    pub fn begin_upload(&mut self) -> Option<UploadRequest<F>> {
        let Some(resume) = self.resume.clone() else {
            log::warn!("Upload skipped, no resume selected");
            self.error = Some(MISSING_RESUME.to_owned());
            return None;
        };
        if self.auth_mode.requires_login() && !self.logged_in {
            log::warn!("Upload skipped, user is not logged in");
            self.error = Some(LOGIN_REQUIRED.to_owned());
            return None;
        }
        self.error = None;
        self.recommendations.clear();
        self.loading = true;
        let credentials = self
            .auth_mode
            .requires_login()
            .then(|| self.credentials.clone());
        Some(UploadRequest {
            resume,
            credentials,
        })
    }
}

#[cfg(test)]
mod test {
    use job_finder_common::{Credentials, JobRecommendation, UploadResponse};
    use rstest::{fixture, rstest};

    use super::{
        JobFinder, NotificationKind, RequestStatus, LOGIN_REQUIRED, LOGOUT_MESSAGE,
        MISSING_CREDENTIALS, MISSING_RESUME, UPLOAD_FALLBACK,
    };
    use crate::{api::Error, config::AuthMode};

    type State = JobFinder<&'static str>;

    fn job(title: &str, score: f64) -> JobRecommendation {
        JobRecommendation {
            title: title.to_owned(),
            company: "B".to_owned(),
            url: "http://x".to_owned(),
            score,
        }
    }

    fn response(titles: &[&str]) -> UploadResponse {
        UploadResponse {
            job_recommendations: titles.iter().map(|title| job(title, 50.0)).collect(),
        }
    }

    #[fixture]
    fn logged_in() -> State {
        let mut state = State::new(AuthMode::Basic);
        state.set_email("a@b.c".to_owned());
        state.set_password("secret".to_owned());
        state.finish_login(Ok(None));
        state.select_resume(Some("resume.pdf"));
        state
    }

    #[rstest]
    #[case::anonymous(AuthMode::Anonymous)]
    #[case::basic(AuthMode::Basic)]
    fn begin_upload_should_fail_without_resume(#[case] auth_mode: AuthMode) {
        let mut state = State::new(auth_mode);

        assert!(state.begin_upload().is_none());
        assert_eq!(state.error(), Some(MISSING_RESUME));
        assert!(!state.is_loading());
        assert_eq!(state.request_status(), RequestStatus::Errored);
    }

    #[test]
    fn begin_upload_should_require_login_when_basic() {
        let mut state = State::new(AuthMode::Basic);
        state.select_resume(Some("resume.pdf"));

        assert!(state.begin_upload().is_none());
        assert_eq!(state.error(), Some(LOGIN_REQUIRED));
    }

    #[test]
    fn begin_upload_should_send_no_credentials_when_anonymous() {
        let mut state = State::new(AuthMode::Anonymous);
        state.set_email("a@b.c".to_owned());
        state.select_resume(Some("resume.pdf"));

        let request = state.begin_upload().unwrap();

        assert_eq!(request.resume, "resume.pdf");
        assert!(request.credentials.is_none());
        assert_eq!(state.request_status(), RequestStatus::Loading);
    }

    #[rstest]
    fn begin_upload_should_clear_previous_results(mut logged_in: State) {
        logged_in.begin_upload();
        logged_in.finish_upload(Err(Error::ApiError("bad file".to_owned())));
        logged_in.begin_upload();
        logged_in.finish_upload(Ok(response(&["A"])));

        let request = logged_in.begin_upload().unwrap();

        assert_eq!(request.credentials, Some(Credentials::new("a@b.c", "secret")));
        assert!(logged_in.recommendations().is_empty());
        assert!(logged_in.error().is_none());
        assert!(logged_in.is_loading());
    }

    #[rstest]
    fn finish_upload_should_replace_recommendations(mut logged_in: State) {
        logged_in.begin_upload();
        let body = UploadResponse {
            job_recommendations: vec![job("A", 90.0)],
        };

        logged_in.finish_upload(Ok(body));

        let jobs = logged_in.recommendations();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "A");
        assert_eq!(jobs[0].company, "B");
        assert_eq!(jobs[0].url, "http://x");
        assert_eq!(jobs[0].score_label(), "90%");
        assert_eq!(logged_in.request_status(), RequestStatus::Idle);
    }

    #[rstest]
    #[case::server(Error::ApiError("bad file".to_owned()), "bad file")]
    #[case::status(Error::Status(500), UPLOAD_FALLBACK)]
    #[case::browser(Error::Browser("FormData".to_owned()), UPLOAD_FALLBACK)]
    fn finish_upload_should_set_error_text(
        mut logged_in: State,
        #[case] error: Error,
        #[case] expected: &str,
    ) {
        logged_in.begin_upload();

        logged_in.finish_upload(Err(error));

        assert_eq!(logged_in.error(), Some(expected));
        assert!(logged_in.recommendations().is_empty());
        assert!(!logged_in.is_loading());
    }

    #[rstest]
    fn overlapping_uploads_should_keep_last_applied_response(mut logged_in: State) {
        logged_in.begin_upload().unwrap();
        logged_in.begin_upload().unwrap();

        logged_in.finish_upload(Ok(response(&["second"])));
        assert!(!logged_in.is_loading());
        logged_in.finish_upload(Ok(response(&["first", "first again"])));

        let titles: Vec<&str> = logged_in
            .recommendations()
            .iter()
            .map(|job| job.title.as_str())
            .collect();
        assert_eq!(titles, ["first", "first again"]);
    }

    #[test]
    fn finish_register_should_not_touch_session() {
        let mut state = State::new(AuthMode::Basic);
        state.set_email("a@b.c".to_owned());
        state.set_password("secret".to_owned());

        let credentials = state.begin_register().unwrap();
        state.finish_register(Ok(Some("User registered successfully".to_owned())));

        assert_eq!(credentials, Credentials::new("a@b.c", "secret"));
        assert!(!state.is_logged_in());
        assert_eq!(state.credentials(), &credentials);
        let notification = &state.notifications()[0];
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "User registered successfully");
    }

    #[rstest]
    #[case::server(Error::ApiError("Email already exists".to_owned()), "Email already exists")]
    #[case::status(Error::Status(500), "Registration failed")]
    fn finish_register_should_notify_failure(#[case] error: Error, #[case] expected: &str) {
        let mut state = State::new(AuthMode::Basic);

        state.finish_register(Err(error));

        assert!(!state.is_logged_in());
        let notification = &state.notifications()[0];
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, expected);
    }

    #[rstest]
    fn finish_login_should_keep_credentials(logged_in: State) {
        assert!(logged_in.is_logged_in());
        assert_eq!(logged_in.credentials(), &Credentials::new("a@b.c", "secret"));
        let notification = &logged_in.notifications()[0];
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, "Login successful");
    }

    #[test]
    fn finish_login_should_stay_anonymous_on_failure() {
        let mut state = State::new(AuthMode::Basic);

        state.finish_login(Err(Error::ApiError("Invalid credentials".to_owned())));

        assert!(!state.is_logged_in());
        assert_eq!(state.notifications()[0].message, "Invalid credentials");
        assert_eq!(state.notifications()[0].kind, NotificationKind::Error);
    }

    #[rstest]
    #[case::no_email("", "secret")]
    #[case::no_password("a@b.c", "")]
    fn begin_login_should_require_both_fields(#[case] email: &str, #[case] password: &str) {
        let mut state = State::new(AuthMode::Basic);
        state.set_email(email.to_owned());
        state.set_password(password.to_owned());

        assert!(state.begin_login().is_none());
        assert_eq!(state.notifications()[0].message, MISSING_CREDENTIALS);
    }

    #[rstest]
    fn logout_should_clear_session_and_credentials(mut logged_in: State) {
        logged_in.logout();

        assert!(!logged_in.is_logged_in());
        assert_eq!(logged_in.credentials(), &Credentials::default());
        let last = logged_in.notifications().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Info);
        assert_eq!(last.message, LOGOUT_MESSAGE);
    }

    #[test]
    fn logout_should_work_when_anonymous() {
        let mut state = State::new(AuthMode::Basic);
        state.set_email("typed@b.c".to_owned());

        state.logout();

        assert!(!state.is_logged_in());
        assert!(state.credentials().email.is_empty());
    }

    #[rstest]
    fn logout_should_clear_upload_error(mut logged_in: State) {
        logged_in.select_resume(None);
        logged_in.begin_upload();
        assert_eq!(logged_in.error(), Some(MISSING_RESUME));

        logged_in.logout();

        assert!(logged_in.error().is_none());
        assert_eq!(logged_in.request_status(), RequestStatus::Idle);
    }

    #[test]
    fn dismiss_should_remove_only_matching_notification() {
        let mut state = State::new(AuthMode::Anonymous);
        let first = state.notify(NotificationKind::Info, "one");
        let second = state.notify(NotificationKind::Info, "two");

        state.dismiss(first);

        assert_ne!(first, second);
        assert_eq!(state.notifications().len(), 1);
        assert_eq!(state.notifications()[0].id, second);
    }
}
