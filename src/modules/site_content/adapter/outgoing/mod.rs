mod content_table;
pub mod sea_orm_entity;
mod singleton_content_postgres;

pub use content_table::ContentTable;
pub use singleton_content_postgres::SingletonContentRepository;

pub type HomeContentRepository = SingletonContentRepository<sea_orm_entity::home_contents::Entity>;
pub type AboutContentRepository =
    SingletonContentRepository<sea_orm_entity::about_contents::Entity>;
