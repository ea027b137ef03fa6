use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::Config;

/// Base name of the configuration file, without extension.
pub const CONFIG_NAME: &str = "enterprise";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("configuration file {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing configuration file {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("parsing configuration file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported configuration format for {}, expected a .toml or .json file", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// File formats the loader understands, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub const ALL: [ConfigFormat; 2] = [ConfigFormat::Toml, ConfigFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;

        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    fn parse(self, path: &Path, input: &str) -> Result<Config, ConfigError> {
        match self {
            ConfigFormat::Toml => toml::from_str(input).map_err(|source| ConfigError::Toml {
                path: path.to_owned(),
                source: Box::new(source),
            }),
            ConfigFormat::Json => serde_json::from_str(input).map_err(|source| ConfigError::Json {
                path: path.to_owned(),
                source,
            }),
        }
    }
}

/// A configuration together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: Config,
}

/// Finds and reads the configuration file.
///
/// Each search directory is checked for `<name>.toml`, then `<name>.json`.
/// The first existing file wins. Finding nothing is not an error.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    name: String,
    search_paths: Vec<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            name: CONFIG_NAME.to_string(),
            search_paths: vec![PathBuf::from(".")],
        }
    }
}

impl ConfigLoader {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the directories searched for the configuration file.
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Loads the configuration.
    ///
    /// With an explicit `path`, that file must exist. Without one, the search
    /// paths are scanned and `Ok(None)` is returned when no file is found.
    pub fn load(&self, path: Option<impl AsRef<Path>>) -> Result<Option<LoadedConfig>, ConfigError> {
        let path = match path {
            Some(path) => {
                let path = path.as_ref();

                if !path.exists() {
                    return Err(ConfigError::Missing(path.to_owned()));
                }

                path.to_owned()
            }
            None => match self.discover() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        let format = ConfigFormat::from_path(&path).ok_or_else(|| ConfigError::UnsupportedFormat(path.clone()))?;

        let input = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config = format.parse(&path, &input)?;

        Ok(Some(LoadedConfig { path, config }))
    }

    /// The first configuration file present on the search paths.
    pub fn discover(&self) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .flat_map(|directory| {
                ConfigFormat::ALL
                    .into_iter()
                    .map(move |format| directory.join(format!("{}.{}", self.name, format.extension())))
            })
            .find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use tempfile::tempdir;

    fn loader(directory: &Path) -> ConfigLoader {
        Config::loader().search_paths([directory])
    }

    #[test]
    fn nothing_found() {
        let directory = tempdir().unwrap();

        let loaded = loader(directory.path()).load(None::<&Path>).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn toml_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("enterprise.toml");

        fs::write(
            &path,
            indoc! {r#"
                ENTERPRISE_WEB = "/srv/www"

                [network]
                listen_address = "127.0.0.1:9000"
            "#},
        )
        .unwrap();

        let loaded = loader(directory.path()).load(None::<&Path>).unwrap().unwrap();

        assert_eq!(path, loaded.path);
        assert_eq!(PathBuf::from("/srv/www"), loaded.config.enterprise_web);
        assert_eq!("127.0.0.1:9000", loaded.config.listen_address().to_string());
    }

    #[test]
    fn json_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("enterprise.json");

        fs::write(&path, r#"{"ENTERPRISE_WEB": "/srv/json", "graph": {"introspection": false}}"#).unwrap();

        let loaded = loader(directory.path()).load(None::<&Path>).unwrap().unwrap();

        assert_eq!(path, loaded.path);
        assert_eq!(PathBuf::from("/srv/json"), loaded.config.enterprise_web);
        assert!(!loaded.config.graph.introspection);
    }

    #[test]
    fn toml_wins_over_json() {
        let directory = tempdir().unwrap();

        fs::write(directory.path().join("enterprise.json"), r#"{"ENTERPRISE_WEB": "/json"}"#).unwrap();
        fs::write(directory.path().join("enterprise.toml"), r#"ENTERPRISE_WEB = "/toml""#).unwrap();

        let loaded = loader(directory.path()).load(None::<&Path>).unwrap().unwrap();

        assert_eq!(PathBuf::from("/toml"), loaded.config.enterprise_web);
    }

    #[test]
    fn search_paths_in_order() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();

        fs::write(second.path().join("enterprise.toml"), r#"ENTERPRISE_WEB = "/second""#).unwrap();

        let loaded = Config::loader()
            .search_paths([first.path(), second.path()])
            .load(None::<&Path>)
            .unwrap()
            .unwrap();

        assert_eq!(PathBuf::from("/second"), loaded.config.enterprise_web);
    }

    #[test]
    fn custom_name() {
        let directory = tempdir().unwrap();

        fs::write(directory.path().join("staging.toml"), r#"ENTERPRISE_WEB = "/staging""#).unwrap();

        assert!(loader(directory.path()).load(None::<&Path>).unwrap().is_none());

        let loaded = loader(directory.path())
            .name("staging")
            .load(None::<&Path>)
            .unwrap()
            .unwrap();

        assert_eq!(PathBuf::from("/staging"), loaded.config.enterprise_web);
    }

    #[test]
    fn malformed_file() {
        let directory = tempdir().unwrap();

        fs::write(directory.path().join("enterprise.toml"), "[network\nlisten_address = ").unwrap();

        let error = loader(directory.path()).load(None::<&Path>).unwrap_err();

        assert!(matches!(error, ConfigError::Toml { .. }), "{error:?}");
    }

    #[test]
    fn malformed_json_file() {
        let directory = tempdir().unwrap();

        fs::write(directory.path().join("enterprise.json"), "{").unwrap();

        let error = loader(directory.path()).load(None::<&Path>).unwrap_err();

        assert!(matches!(error, ConfigError::Json { .. }), "{error:?}");
    }

    #[test]
    fn explicit_path_missing() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("enterprise.toml");

        let error = Config::loader().load(Some(&path)).unwrap_err();

        assert!(matches!(error, ConfigError::Missing(ref missing) if missing == &path), "{error:?}");
    }

    #[test]
    fn explicit_path_skips_discovery() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("custom.toml");

        fs::write(&path, r#"ENTERPRISE_WEB = "/custom""#).unwrap();

        let loaded = Config::loader().load(Some(&path)).unwrap().unwrap();

        assert_eq!(path, loaded.path);
        assert_eq!(PathBuf::from("/custom"), loaded.config.enterprise_web);
    }

    #[test]
    fn unsupported_format() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("enterprise.yaml");

        fs::write(&path, "ENTERPRISE_WEB: /yaml").unwrap();

        let error = Config::loader().load(Some(&path)).unwrap_err();

        assert!(matches!(error, ConfigError::UnsupportedFormat(_)), "{error:?}");
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let directory = tempdir().unwrap();

        fs::create_dir(directory.path().join("enterprise.toml")).unwrap();

        assert!(loader(directory.path()).load(None::<&Path>).unwrap().is_none());
    }
}
