use crate::domain::entities::feature_record::FeatureRecord;
use crate::domain::error::GalleryError;
use std::collections::HashMap;

/// In-memory collection of feature records, keyed by image name.
///
/// Iteration follows insertion order. Inserting a name that is already
/// present replaces its vector in place, so the record keeps the position
/// of its first occurrence.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    records: Vec<FeatureRecord>,
    index: HashMap<String, usize>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: FeatureRecord) {
        match self.index.get(&record.name) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FeatureRecord> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn lookup(&self, name: &str) -> Result<&FeatureRecord, GalleryError> {
        self.get(name)
            .ok_or_else(|| GalleryError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Dimension of the first record, `None` for an empty store.
    pub fn dimension(&self) -> Option<usize> {
        self.records.first().map(FeatureRecord::dimension)
    }

    /// Whether every record shares one dimension. Not enforced at load;
    /// mismatched pairs simply score 0.0.
    pub fn is_uniform(&self) -> bool {
        match self.dimension() {
            Some(dim) => self.records.iter().all(|r| r.dimension() == dim),
            None => true,
        }
    }
}

impl FromIterator<FeatureRecord> for FeatureStore {
    fn from_iter<I: IntoIterator<Item = FeatureRecord>>(iter: I) -> Self {
        let mut store = FeatureStore::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}
