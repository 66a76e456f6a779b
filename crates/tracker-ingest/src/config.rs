//! Dashboard profile loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use tracker_model::{PRESET_NAMES, TrackerConfig};

use crate::error::{IngestError, Result};

/// Reads a TOML profile.
///
/// A relative `source` is resolved against the directory holding the
/// profile, so profiles can sit next to their data.
pub fn load_tracker_config(path: &Path) -> Result<TrackerConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: TrackerConfig =
        toml::from_str(&text).map_err(|source| IngestError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(source) = config.source.take() {
        config.source = Some(resolve_relative(path, source));
    }
    debug!(
        path = %path.display(),
        profile = %config.name,
        facets = config.facets.len(),
        metrics = config.metrics.len(),
        "profile loaded"
    );
    Ok(config)
}

/// Picks the profile for a run.
///
/// An explicit profile file wins over the preset name. `data` replaces the
/// profile's source table when given.
pub fn resolve_tracker_config(
    config_path: Option<&Path>,
    preset: &str,
    data: Option<&Path>,
) -> Result<TrackerConfig> {
    let mut config = match config_path {
        Some(path) => load_tracker_config(path)?,
        None => TrackerConfig::preset(preset).ok_or_else(|| IngestError::UnknownPreset {
            name: preset.to_string(),
            available: PRESET_NAMES.join(", "),
        })?,
    };
    if let Some(data) = data {
        config.source = Some(data.to_path_buf());
    }
    Ok(config)
}

fn resolve_relative(profile_path: &Path, source: PathBuf) -> PathBuf {
    if source.is_absolute() {
        return source;
    }
    match profile_path.parent() {
        Some(parent) => parent.join(source),
        None => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_keeps_absolute_paths() {
        let resolved = resolve_relative(
            Path::new("/srv/profiles/kf.toml"),
            PathBuf::from("/data/sample.csv"),
        );
        assert_eq!(resolved, PathBuf::from("/data/sample.csv"));
    }

    #[test]
    fn test_resolve_relative_joins_profile_dir() {
        let resolved = resolve_relative(
            Path::new("/srv/profiles/kf.toml"),
            PathBuf::from("data/sample.csv"),
        );
        assert_eq!(resolved, PathBuf::from("/srv/profiles/data/sample.csv"));
    }

    #[test]
    fn test_preset_with_data_override() {
        let config =
            resolve_tracker_config(None, "cbttc-ngs", Some(Path::new("manifest.csv"))).unwrap();
        assert_eq!(config.name, "cbttc-ngs");
        assert_eq!(config.source, Some(PathBuf::from("manifest.csv")));
    }

    #[test]
    fn test_unknown_preset() {
        let err = resolve_tracker_config(None, "nope", None).unwrap_err();
        assert!(matches!(err, IngestError::UnknownPreset { .. }));
    }
}
