mod bootstrap_superuser_service;
mod login_user_service;

pub use bootstrap_superuser_service::BootstrapSuperuserService;
pub use login_user_service::LoginUserService;
