use serde::{Deserialize, Serialize};

/// Accepted by the backend; the account may still be unverified.
pub const STATUS_ACCEPTED: i32 = 20;
/// Rejected with an application-level reason (bad credentials, locked, ...).
pub const STATUS_REJECTED: i32 = 40;

/// Which identifier the user is signing in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierMode {
    Email,
    Phone,
}

/// Login form state. Exactly one of email/phone is non-empty at any time,
/// determined by `mode`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub mode: IdentifierMode,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Default for IdentifierMode {
    fn default() -> Self {
        IdentifierMode::Email
    }
}

impl LoginForm {
    /// Switch between email and phone sign-in, clearing the other
    /// identifier's stored value.
    pub fn set_mode(&mut self, mode: IdentifierMode) {
        self.mode = mode;
        match mode {
            IdentifierMode::Email => self.phone.clear(),
            IdentifierMode::Phone => self.email.clear(),
        }
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.phone.clear();
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
        self.email.clear();
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// The identifier that will be submitted.
    pub fn identifier(&self) -> &str {
        match self.mode {
            IdentifierMode::Email => &self.email,
            IdentifierMode::Phone => &self.phone,
        }
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.phone.clear();
        self.password.clear();
    }
}

/// What the authentication endpoint answered. Application-level rejection
/// travels in-band as `status_code` 40; only infrastructure failure is an
/// `Err` at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub status_code: i32,
    pub message: String,
    pub verified: bool,
    pub token: Option<String>,
    pub email: Option<String>,
}

impl LoginOutcome {
    pub fn rejected(message: impl Into<String>) -> Self {
        LoginOutcome {
            status_code: STATUS_REJECTED,
            message: message.into(),
            verified: false,
            token: None,
            email: None,
        }
    }
}

/// Next move after the authentication endpoint answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// Stay on the page and show the message inline.
    ShowError(String),
    /// Navigate to the verification page for this token.
    VerifyAccount(String),
    /// Show success, then establish a session for this email and go home.
    EstablishSession { email: String, message: String },
}

/// Map a login response onto the next step of the submission flow.
///
/// `status_code` takes precedence over the verification flag: an accepted
/// response that is missing the field its branch needs (token when
/// unverified, email when verified) is treated as an application error.
pub fn next_step(outcome: &LoginOutcome) -> SubmitStep {
    if outcome.status_code != STATUS_ACCEPTED {
        return SubmitStep::ShowError(outcome.message.clone());
    }
    if !outcome.verified {
        return match &outcome.token {
            Some(token) => SubmitStep::VerifyAccount(token.clone()),
            None => SubmitStep::ShowError("Verification token missing from response".into()),
        };
    }
    match &outcome.email {
        Some(email) => SubmitStep::EstablishSession {
            email: email.clone(),
            message: outcome.message.clone(),
        },
        None => SubmitStep::ShowError("Account identifier missing from response".into()),
    }
}

/// Kind of inline feedback shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Dismissible feedback alert state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feedback {
    pub open: bool,
    pub kind: Option<FeedbackKind>,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Feedback {
            open: true,
            kind: Some(FeedbackKind::Success),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Feedback {
            open: true,
            kind: Some(FeedbackKind::Error),
            message: message.into(),
        }
    }

    pub fn dismiss(&mut self) {
        *self = Feedback::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(verified: bool, token: Option<&str>, email: Option<&str>) -> LoginOutcome {
        LoginOutcome {
            status_code: STATUS_ACCEPTED,
            message: "ok".into(),
            verified,
            token: token.map(Into::into),
            email: email.map(Into::into),
        }
    }

    #[test]
    fn default_mode_is_email() {
        assert_eq!(LoginForm::default().mode, IdentifierMode::Email);
    }

    #[test]
    fn switching_mode_clears_other_identifier() {
        let mut form = LoginForm::default();
        form.set_email("a@b.com".into());
        form.set_mode(IdentifierMode::Phone);
        assert!(form.email.is_empty());

        form.set_phone("07700900000".into());
        form.set_mode(IdentifierMode::Email);
        assert!(form.phone.is_empty());
    }

    #[test]
    fn typing_identifier_clears_opposite_field() {
        let mut form = LoginForm::default();
        form.set_email("a@b.com".into());
        form.set_phone("07700900000".into());
        assert!(form.email.is_empty());
        form.set_mode(IdentifierMode::Phone);
        assert_eq!(form.identifier(), "07700900000");
    }

    #[test]
    fn password_edits_touch_only_password() {
        let mut form = LoginForm::default();
        form.set_email("a@b.com".into());
        form.set_password("hunter2".into());
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "hunter2");
    }

    #[test]
    fn rejected_status_stays_on_page_with_message() {
        let outcome = LoginOutcome::rejected("Invalid credentials");
        assert_eq!(
            next_step(&outcome),
            SubmitStep::ShowError("Invalid credentials".into())
        );
    }

    #[test]
    fn unverified_account_goes_to_verification() {
        let outcome = accepted(false, Some("tok-123"), None);
        assert_eq!(next_step(&outcome), SubmitStep::VerifyAccount("tok-123".into()));
    }

    #[test]
    fn verified_account_establishes_session() {
        let outcome = accepted(true, None, Some("a@b.com"));
        assert_eq!(
            next_step(&outcome),
            SubmitStep::EstablishSession {
                email: "a@b.com".into(),
                message: "ok".into(),
            }
        );
    }

    #[test]
    fn accepted_but_incomplete_response_is_an_error() {
        assert!(matches!(
            next_step(&accepted(false, None, None)),
            SubmitStep::ShowError(_)
        ));
        assert!(matches!(
            next_step(&accepted(true, None, None)),
            SubmitStep::ShowError(_)
        ));
    }

    #[test]
    fn dismissing_feedback_resets_it() {
        let mut alert = Feedback::error("boom");
        assert!(alert.open);
        alert.dismiss();
        assert_eq!(alert, Feedback::default());
    }
}
