pub mod configuration;
pub mod error;
pub mod release_status;
pub mod repository_ref;
pub mod table;

pub use configuration::{CONFIG_FILE_NAME, Configuration, ReleaseApiConfig};
pub use error::AppError;
pub use release_status::{NO_RELEASE_FOUND, NO_TAG_FOUND, ReleaseStatus};
pub use repository_ref::RepositoryRef;
