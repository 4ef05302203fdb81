mod bootstrap_superuser;
mod login_user;

pub use bootstrap_superuser::{
    BootstrapOutcome, BootstrapSuperuserCommand, BootstrapSuperuserError,
    BootstrapSuperuserUseCase,
};
pub use login_user::{
    LoginError, LoginRequest, LoginRequestError, LoginUserResponse, LoginUserUseCase, UserInfo,
};
