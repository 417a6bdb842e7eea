//! Loading quiz data files from disk.

use crate::error::LoadError;
use crate::parser::parse;
use crate::tokenizer::tokenize;
use crate::types::RecordSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open, tokenize and parse a data file.
///
/// The path as given is used as the source name in parse errors.
pub fn load(path: impl AsRef<Path>) -> Result<RecordSet, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading quiz data");

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tokens = tokenize(BufReader::new(file))?;
    let records = parse(tokens, &path.display().to_string())?;

    tracing::info!(path = %path.display(), records = records.len(), "loaded quiz data");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionRecord;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn load_valid_file() {
        let file = data_file("ア : a ;\nシ:shi,si;\n".as_bytes());
        let records = load(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], QuestionRecord::new("シ", "shi").with_answer("si"));
    }

    #[test]
    fn load_missing_file() {
        let result = load("definitely/not/here.quiz");
        match result {
            Err(LoadError::Io { path, .. }) => {
                assert_eq!(path, Path::new("definitely/not/here.quiz"))
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn load_reports_path_in_parse_error() {
        let file = data_file(b"a:b;\nbadrow");
        let error = load(file.path()).unwrap_err();
        assert!(matches!(error, LoadError::Parse(_)));
        let message = error.to_string();
        assert!(message.contains(&format!("{}:2:1", file.path().display())));
    }

    #[test]
    fn load_rejects_invalid_utf8() {
        let file = data_file(&[0xff, 0xfe, b':']);
        assert!(matches!(load(file.path()), Err(LoadError::Lex(_))));
    }
}
