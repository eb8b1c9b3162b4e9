mod fake_release_source;

pub use fake_release_source::FakeReleaseSource;
