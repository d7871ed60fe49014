// ABOUTME: Loads a RegistrySnapshot from a JSON or YAML file exported from the host document.
// ABOUTME: The format is chosen by file extension; .json, .yaml and .yml are accepted.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::registry::RegistrySnapshot;

/// Errors that can occur while loading a registry snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<RegistrySnapshot, SnapshotError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path)?;
    let snapshot: RegistrySnapshot = match extension.as_str() {
        "json" => serde_json::from_str(&contents)?,
        "yaml" | "yml" => serde_yaml::from_str(&contents)?,
        _ => return Err(SnapshotError::UnsupportedFormat(path.display().to_string())),
    };

    tracing::debug!(
        path = %path.display(),
        paint_styles = snapshot.paint_styles.len(),
        text_styles = snapshot.text_styles.len(),
        effect_styles = snapshot.effect_styles.len(),
        variables = snapshot.variables.len(),
        "loaded registry snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Effect, Paint};

    #[test]
    fn load_json_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(
            &path,
            r#"{
                "paintStyles": [
                    { "name": "Brand/Primary", "paints": [ { "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 }, "opacity": 1 } ] }
                ],
                "effectStyles": [
                    { "name": "Glass", "effects": [ { "type": "BACKGROUND_BLUR", "radius": 8 } ] }
                ]
            }"#,
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.paint_styles.len(), 1);
        assert!(matches!(snapshot.paint_styles[0].paints[0], Paint::Solid { .. }));
        assert!(matches!(snapshot.effect_styles[0].effects[0], Effect::BackgroundBlur(_)));
        assert!(snapshot.text_styles.is_empty());
    }

    #[test]
    fn load_yaml_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("registry.yml");
        fs::write(
            &path,
            "textStyles:\n  - name: Body\n    fontSize: 16\n    fontName:\n      family: Inter\n      style: Regular\nvariables:\n  - name: space/sm\n    resolvedType: FLOAT\n    valuesByMode:\n      \"1:0\": 4\n",
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.text_styles[0].font_size, 16.0);
        assert_eq!(snapshot.variables[0].name, "space/sm");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("registry.toml");
        fs::write(&path, "").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }

    #[test]
    fn invalid_json_is_json_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"paintStyles\": [").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
