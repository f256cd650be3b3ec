use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Image feature vector as written by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f32>);

impl Vector {
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Deref for Vector {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for Vector {
    fn from(values: Vec<f32>) -> Self {
        Vector(values)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    pub vector: Vector,
}

impl FeatureRecord {
    pub fn new(name: impl Into<String>, vector: impl Into<Vector>) -> Self {
        Self {
            name: name.into(),
            vector: vector.into(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.vector.dimension()
    }
}
