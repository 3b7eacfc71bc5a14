pub mod auth;

pub use auth::{
    next_step, Feedback, FeedbackKind, IdentifierMode, LoginForm, LoginOutcome, SubmitStep,
    STATUS_ACCEPTED, STATUS_REJECTED,
};
