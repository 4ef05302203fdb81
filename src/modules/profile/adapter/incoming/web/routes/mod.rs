pub mod dto;
mod profile;

pub use profile::{
    __path_get_own_profile_handler, __path_get_public_profile_handler,
    __path_upsert_own_profile_handler, get_own_profile_handler, get_public_profile_handler,
    upsert_own_profile_handler,
};
