mod release_source;

pub use release_source::ReleaseSource;
