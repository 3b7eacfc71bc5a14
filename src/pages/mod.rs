mod classroom;
mod error;
mod home;
mod login;
mod password_recovery;
mod register;
mod reset_password;
mod verify;

pub use classroom::ClassroomPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use password_recovery::PasswordRecoveryPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use verify::VerifyPage;
