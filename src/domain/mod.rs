//! Domain logic - pure release rules independent of git and the filesystem

pub mod bump;
pub mod commit;
pub mod commit_type;
pub mod prerelease;
pub mod version;

pub use bump::BumpLevel;
pub use commit::{CommitRecord, ConventionalCommit};
pub use commit_type::{CommitTypeSpec, CommitTypes};
pub use prerelease::PreRelease;
pub use version::Version;
