use crate::domain::entities::feature_record::FeatureRecord;
use crate::domain::entities::feature_store::FeatureStore;
use crate::domain::error::GalleryError;
use crate::domain::ports::feature_source::FeatureSource;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Feature file written by the extractor: one image per line,
/// `<name> <f1> <f2> ... <fN>`, whitespace separated.
pub struct TextFeatureFile {
    path: PathBuf,
}

impl TextFeatureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeatureSource for TextFeatureFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<FeatureStore, GalleryError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GalleryError::AbsentSource(self.path.clone()),
            _ => GalleryError::Io(format!("Failed to read {}: {e}", self.path.display())),
        })?;
        parse_features(&bytes)
    }
}

/// Parse a whole feature file. Any malformed line, including one that is not
/// valid UTF-8, fails the parse.
pub fn parse_features(input: impl AsRef<[u8]>) -> Result<FeatureStore, GalleryError> {
    let mut store = FeatureStore::new();
    for (idx, raw) in input.as_ref().split(|b| *b == b'\n').enumerate() {
        let line = std::str::from_utf8(raw)
            .map_err(|e| GalleryError::parse(idx + 1, format!("line is not valid UTF-8: {e}")))?;
        if let Some(record) = parse_line(idx + 1, line)? {
            store.insert(record);
        }
    }
    Ok(store)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<FeatureRecord>, GalleryError> {
    let mut tokens = line.split_whitespace();
    let name = match tokens.next() {
        Some(name) => name,
        None => return Ok(None),
    };

    let values = tokens
        .enumerate()
        .map(|(pos, token)| match token.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(GalleryError::parse(
                line_no,
                format!("non-finite value '{token}' at position {} for '{name}'", pos + 1),
            )),
            Err(_) => Err(GalleryError::parse(
                line_no,
                format!("invalid number '{token}' at position {} for '{name}'", pos + 1),
            )),
        })
        .collect::<Result<Vec<f32>, _>>()?;

    Ok(Some(FeatureRecord::new(name, values)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extractor_output() {
        let text = "cat.jpg 0.100000 0.200000 0.300000\ndog.png 1.000000 0.000000 -0.500000\n";
        let store = parse_features(text).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("cat.jpg").unwrap().vector.as_slice(), &[0.1, 0.2, 0.3]);
        assert_eq!(store.get("dog.png").unwrap().dimension(), 3);
    }

    #[test]
    fn test_name_only_line_is_empty_vector() {
        let store = parse_features("lonely.bmp\n").unwrap();
        assert_eq!(store.get("lonely.bmp").unwrap().dimension(), 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let store = parse_features("\na 1 2\n   \nb 3 4\n\n").unwrap();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_bad_token_reports_line() {
        let err = parse_features("img1 0.1 0.2\nimg2 notanumber 0.3").unwrap_err();
        match err {
            GalleryError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("notanumber"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = parse_features("a 1.0\nb NaN 1.0\n").unwrap_err();
        assert!(matches!(err, GalleryError::Parse { line: 2, .. }));
        let err = parse_features("a inf\n").unwrap_err();
        assert!(matches!(err, GalleryError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_mixed_dimensions_accepted() {
        let store = parse_features("a 1 0\nb 1 0 0\n").unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.is_uniform());
    }

    #[test]
    fn test_crlf_line_endings() {
        let store = parse_features("a 1 0\r\nb 0 1\r\n").unwrap();
        assert_eq!(store.get("b").unwrap().vector.as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image_features.txt");
        std::fs::write(&path, b"ok.jpg 1 0\ncaf\xe9.jpg 0 1\n").unwrap();

        let err = TextFeatureFile::new(&path).load().unwrap_err();
        match err {
            GalleryError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("UTF-8"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_absent_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = TextFeatureFile::new(dir.path().join("image_features.txt"));
        let err = source.load().unwrap_err();
        assert!(err.is_absent_source());
    }
}
