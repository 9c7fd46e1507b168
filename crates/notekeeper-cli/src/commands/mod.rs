//! Command implementations.

pub mod diary;
pub mod draft;
pub mod index;
pub mod integrate;
pub mod titles;

pub use self::diary::execute_diary;
pub use self::draft::execute_draft;
pub use self::index::execute_index;
pub use self::integrate::{execute_integrate, execute_integrate_all};
pub use self::titles::execute_titles;
