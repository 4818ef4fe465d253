use rusoto_core::Region;

pub const DEFAULT_MAX_PAGES: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerConfig {
    pub region: Region,
    /// Upper bound on `DescribeInstances` pages per invocation.
    pub max_pages: usize,
}

impl HandlerConfig {
    /// Region comes from `AWS_DEFAULT_REGION` / `AWS_REGION`, falling back to us-east-1.
    pub fn from_env() -> Self {
        HandlerConfig {
            region: Region::default(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
