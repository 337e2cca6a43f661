pub mod org_grouper;
pub mod pipeline;
pub mod ranking;

pub use org_grouper::group_org_contributions;
pub use pipeline::ResumePipeline;
pub use ranking::{rank_repositories, LanguageTally};
