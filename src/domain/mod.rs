pub mod candidate_url;
pub mod prompt;

pub use candidate_url::*;
pub use prompt::*;
