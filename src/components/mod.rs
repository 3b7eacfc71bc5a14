mod alert;
mod auth_guard;
mod nav;

pub use alert::AlertFeedback;
pub use auth_guard::AuthGuard;
pub use nav::Nav;
