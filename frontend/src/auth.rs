//! Authentication screen state
//!
//! `AuthScreen` is the whole screen state as a plain value; the component keeps
//! it in one signal and calls the transition methods. `authenticate` runs one
//! submission against the API and records a successful session.

use crate::api::TurfApi;
use crate::session::SessionStore;
use crate::web::HttpClient;
use crate::web::route::AppRoute;
use leptos::logging::{error, log, warn};
use turf_shared::{LoginRequest, Session, SignupRequest};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Book your favorite cricket turf",
            AuthMode::Signup => "Create Your Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Logging in...",
            AuthMode::Signup => "Creating account...",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Signup => "Already have an account?",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Create Account",
            AuthMode::Signup => "Login Instead",
        }
    }

    /// Shown when the server gives no explanation or cannot be reached
    pub fn fallback_error(self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed. Please try again.",
            AuthMode::Signup => "Signup failed. Please try again.",
        }
    }
}

/// Observable screen states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    AnonymousLogin,
    AnonymousSignup,
    Submitting,
    Error,
}

/// Form inputs. Signup-only fields are ignored in login mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// A validated submission, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthRequest {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthRequest::Login(_) => AuthMode::Login,
            AuthRequest::Signup(_) => AuthMode::Signup,
        }
    }

    fn email(&self) -> &str {
        match self {
            AuthRequest::Login(req) => &req.email,
            AuthRequest::Signup(req) => &req.email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A previous submission has not finished
    InFlight,
    /// A required field is blank
    MissingFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub form: AuthForm,
    submitting: bool,
    error: Option<String>,
}

impl AuthScreen {
    pub fn phase(&self) -> AuthPhase {
        if self.submitting {
            AuthPhase::Submitting
        } else if self.error.is_some() {
            AuthPhase::Error
        } else {
            match self.mode {
                AuthMode::Login => AuthPhase::AnonymousLogin,
                AuthMode::Signup => AuthPhase::AnonymousSignup,
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            self.mode.pending_label()
        } else {
            self.mode.submit_label()
        }
    }

    /// Switch between login and signup. Clears every field and the error;
    /// ignored while a submission is in flight.
    pub fn toggle_mode(&mut self) {
        if self.submitting {
            return;
        }
        self.mode = self.mode.toggled();
        self.form = AuthForm::default();
        self.error = None;
    }

    /// Validate the form and enter `Submitting`.
    pub fn begin_submit(&mut self) -> Result<AuthRequest, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }
        let request = match self.build_request() {
            Some(request) => request,
            None => {
                self.error = Some(MISSING_FIELDS_MESSAGE.to_string());
                return Err(SubmitRejection::MissingFields);
            }
        };
        self.submitting = true;
        self.error = None;
        Ok(request)
    }

    /// Submission failed: back to the same mode, showing `message`.
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Submission succeeded; returns where the app goes next.
    pub fn succeed(&mut self) -> AppRoute {
        self.submitting = false;
        self.error = None;
        AppRoute::Home
    }

    fn build_request(&self) -> Option<AuthRequest> {
        let form = &self.form;
        let email = non_blank(&form.email)?;
        if form.password.is_empty() {
            return None;
        }
        let password = form.password.clone();

        match self.mode {
            AuthMode::Login => Some(AuthRequest::Login(LoginRequest { email, password })),
            AuthMode::Signup => Some(AuthRequest::Signup(SignupRequest {
                email,
                password,
                first_name: non_blank(&form.first_name)?,
                last_name: non_blank(&form.last_name)?,
                phone_number: non_blank(&form.phone_number),
            })),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Send a validated submission and store the resulting session.
///
/// # Returns
/// The new session, or the single message to show on the screen.
pub async fn authenticate<C: HttpClient>(
    api: &TurfApi<C>,
    session: &SessionStore,
    request: AuthRequest,
) -> Result<Session, String> {
    let mode = request.mode();
    let result = match &request {
        AuthRequest::Login(req) => api.login(req).await,
        AuthRequest::Signup(req) => api.signup(req).await,
    };

    match result {
        Ok(new_session) => {
            if let Err(e) = session.save(&new_session) {
                error!("[Auth] session for {} not stored: {}", request.email(), e);
                return Err(mode.fallback_error().to_string());
            }
            log!("[Auth] {:?} succeeded for {}", mode, request.email());
            Ok(new_session)
        }
        Err(e) => {
            warn!("[Auth] {:?} failed for {}: {}", mode, request.email(), e);
            Err(e.user_message(mode.fallback_error()))
        }
    }
}
