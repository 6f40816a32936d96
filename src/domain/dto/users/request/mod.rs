pub mod availability;
pub mod login;
pub mod register;
pub mod update_user;

pub use availability::{CheckEmailRequest, CheckUsernameRequest};
pub use login::{Credentials, LoginRequest};
pub use register::{RegisterRequest, Registration};
pub use update_user::{ProfileChanges, UpdateUserRequest};
