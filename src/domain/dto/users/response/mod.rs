pub mod user_response;

pub use user_response::{CurrentUserResponse, SIGN_UP_SUCCESS};
