//! 读取存储导出的提交记录

use std::fs;
use std::path::Path;
use tracing::{debug, error};

use crate::entity::submissions;
use crate::errors::{PeerEvalError, Result};

/// 从 JSON 数组文件读取提交记录
pub fn load_submissions(path: impl AsRef<Path>) -> Result<Vec<submissions::Model>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read submissions file {}: {}", path.display(), e);
        PeerEvalError::file_operation(format!("{}: {e}", path.display()))
    })?;

    let rows: Vec<submissions::Model> = serde_json::from_str(&content)?;
    debug!("Loaded {} submissions from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_submissions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"course_id": "CS101", "evaluation_name": "Midterm", "team_name": "Team 1",
                  "reviewer_email": "a@x.com", "reviewee_email": "b@x.com", "points": 100,
                  "justification": "solid", "peer_feedback": null}},
                {{"id": 3, "course_id": "CS101", "evaluation_name": "Midterm", "team_name": "Team 1",
                  "reviewer_email": "b@x.com", "reviewee_email": "a@x.com"}}
            ]"#
        )
        .unwrap();

        let rows = load_submissions(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 0);
        assert_eq!(rows[0].justification.as_deref(), Some("solid"));
        assert_eq!(rows[0].peer_feedback, None);
        assert_eq!(rows[1].id, 3);
        assert_eq!(rows[1].points, 0);
        assert_eq!(rows[1].justification, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_submissions(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(err.message().contains("missing.json"));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();

        let err = load_submissions(file.path()).unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
