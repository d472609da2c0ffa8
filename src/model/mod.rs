pub use self::assessment::{Assessment, DEFAULT_PRECISION};
pub use self::mark::Mark;
pub use self::student::{Group, StudentId};

mod assessment;
mod mark;
mod student;
