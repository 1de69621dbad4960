//! Command-line settings file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rill_renderer::{RenderConfig, DEFAULT_BUCKET_SIZE};
use serde::{Deserialize, Serialize};

use crate::scenes::SceneKind;

/// Everything the `rill` binary needs to produce an image.
///
/// Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub scene: SceneKind,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    /// Render buckets on all cores instead of pixel by pixel
    pub parallel: bool,
    pub bucket_size: u32,
    /// OBJ file for the `mesh` scene
    pub mesh: Option<PathBuf>,
    /// Image applied to the mesh, when it has texture coordinates
    pub texture: Option<PathBuf>,
    pub render: RenderConfig,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scene: SceneKind::Spheres,
            width: 640,
            height: 480,
            output: PathBuf::from("output.png"),
            parallel: true,
            bucket_size: DEFAULT_BUCKET_SIZE,
            mesh: None,
            texture: None,
            render: RenderConfig::default(),
        }
    }
}

impl RenderSettings {
    /// Read settings from a JSON file.
    ///
    /// Relative asset paths are resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let mut settings: RenderSettings = serde_json::from_str(&text)
            .with_context(|| format!("invalid settings in {}", path.display()))?;

        if let Some(base) = path.parent() {
            settings.mesh = settings.mesh.map(|p| base.join(p));
            settings.texture = settings.texture.map(|p| base.join(p));
        }
        Ok(settings)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width.max(1) as f64 / self.height.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let settings: RenderSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_load_resolves_asset_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{
                "scene": "mesh",
                "width": 32,
                "height": 16,
                "parallel": false,
                "mesh": "models/bunny.obj",
                "render": { "recursion_depth_limit": 6, "enable_shadows": false }
            }"#,
        )
        .unwrap();

        let settings = RenderSettings::load(&path).unwrap();
        assert_eq!(settings.scene, SceneKind::Mesh);
        assert_eq!((settings.width, settings.height), (32, 16));
        assert!(!settings.parallel);
        assert_eq!(settings.mesh, Some(dir.path().join("models/bunny.obj")));
        assert_eq!(settings.texture, None);
        assert_eq!(settings.render.recursion_depth_limit, 6);
        assert!(!settings.render.enable_shadows);
        assert_eq!(settings.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"width\": \"wide\" }").unwrap();

        let err = RenderSettings::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid settings"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderSettings::load("/nonexistent/rill/settings.json").unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }
}
