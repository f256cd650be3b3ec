use std::collections::HashSet;

/// Input to a similarity ranking: which image to compare against, which
/// names to leave out, and how many results to keep.
#[derive(Debug, Clone, Default)]
pub struct RankRequest {
    pub query_name: String,
    pub excluded: HashSet<String>,
    pub limit: usize,
}

impl RankRequest {
    pub fn new(query_name: impl Into<String>, limit: usize) -> Self {
        Self {
            query_name: query_name.into(),
            excluded: HashSet::new(),
            limit,
        }
    }

    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether `name` must be left out of the results.
    pub fn skips(&self, name: &str) -> bool {
        name == self.query_name || self.excluded.contains(name)
    }
}
