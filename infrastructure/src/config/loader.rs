//! Configuration file loader with multi-source merging

use super::file_config::{API_KEY_ENV, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "commons-council";
const PROJECT_FILES: &[&str] = &["commons.toml", ".commons.toml"];
const ENV_PREFIX: &str = "COMMONS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `COMMONS_SECTION__KEY` (e.g. `COMMONS_PROVIDER__MODEL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./commons.toml` or `./.commons.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/commons-council/config.toml`
    /// 5. Default values
    ///
    /// `DEEPSEEK_API_KEY` fills `provider.api_key` when no source set it.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        let mut config: FileConfig = Self::figment(
            global.as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)?;

        config
            .provider
            .resolve_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// File layers only, lowest priority first.
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        config
            .provider
            .resolve_api_key(std::env::var(API_KEY_ENV).ok());
        config
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/commons-council/config.toml` if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources in priority order (for --show-config)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}SECTION__KEY, {}", ENV_PREFIX, API_KEY_ENV));

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./commons.toml or ./.commons.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.model, "deepseek-chat");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains(APP_DIR));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = write_toml(
            dir.path(),
            "global.toml",
            "[provider]\nmodel = \"global-model\"\ntimeout_seconds = 5\n",
        );
        let explicit = write_toml(
            dir.path(),
            "explicit.toml",
            "[provider]\nmodel = \"explicit-model\"\n",
        );

        let config: FileConfig = ConfigLoader::figment(Some(&global), None, Some(&explicit))
            .extract()
            .unwrap();

        assert_eq!(config.provider.model, "explicit-model");
        // Untouched keys survive from the lower layer
        assert_eq!(config.provider.timeout_seconds, 5);
        // And from defaults
        assert_eq!(config.generation.max_tokens, 300);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_toml(dir.path(), "bad.toml", "[provider\nmodel = ");
        let result: Result<FileConfig, _> = ConfigLoader::figment(None, None, Some(&bad)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_describe_sources_lists_explicit() {
        let explicit = PathBuf::from("/definitely/missing/commons.toml");
        let lines = ConfigLoader::describe_sources(Some(&explicit));
        assert!(lines.iter().any(|l| l.contains("Explicit") && l.contains("MISS")));
        assert!(lines.last().unwrap().contains("Default"));
    }
}
