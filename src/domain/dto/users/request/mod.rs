pub mod current_user_request;
pub mod sign_up_request;

pub use current_user_request::CurrentUserRequest;
pub use sign_up_request::SignUpRequest;
