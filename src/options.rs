use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeOptions {
    pub roots: Vec<PathBuf>,
    pub follow_links: bool,
}
#[derive(Debug, Default)]
pub struct MergeBuilder {
    options: MergeOptions,
}
impl MergeBuilder {
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            options: MergeOptions {
                roots: roots.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.roots.push(root.into());
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> MergeOptions {
        self.options
    }
}
