mod login_user;

pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use login_user::__path_login_user_handler;
