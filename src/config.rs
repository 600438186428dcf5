use crate::error::{ArcPickError, Result};
use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub discovery: DiscoveryConfig,
    pub display: DisplayConfig,
    pub tools: ToolConfig,
}

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub root: PathBuf,
    /// `None` means the session asks once at startup.
    pub recursive: Option<bool>,
    pub include_multipart: bool,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub unzip: String,
    pub tar: String,
    pub unrar: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: None,
            include_multipart: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            unzip: "unzip".to_string(),
            tar: "tar".to_string(),
            unrar: "unrar".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref root) = cli_args.root {
            self.discovery.root = root.clone();
        }

        if cli_args.recursive.is_some() {
            self.discovery.recursive = cli_args.recursive;
        }

        if let Some(include_multipart) = cli_args.include_multipart {
            self.discovery.include_multipart = include_multipart;
        }

        if let Some(page_size) = cli_args.page_size {
            self.display.page_size = page_size;
        }

        if let Some(ref unzip) = cli_args.unzip {
            self.tools.unzip = unzip.clone();
        }

        if let Some(ref tar) = cli_args.tar {
            self.tools.tar = tar.clone();
        }

        if let Some(ref unrar) = cli_args.unrar {
            self.tools.unrar = unrar.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let root = &self.discovery.root;
        if !root.is_dir() {
            return Err(ArcPickError::InvalidPath {
                path: root.display().to_string(),
            });
        }

        if self.display.page_size == 0 {
            return Err(ArcPickError::Config {
                message: "Page size must be greater than 0".to_string(),
            });
        }

        for (flag, program) in [
            ("--unzip", &self.tools.unzip),
            ("--tar", &self.tools.tar),
            ("--unrar", &self.tools.unrar),
        ] {
            if program.trim().is_empty() {
                return Err(ArcPickError::Config {
                    message: format!("{} needs a program name", flag),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub include_multipart: Option<bool>,
    pub page_size: Option<usize>,
    pub unzip: Option<String>,
    pub tar: Option<String>,
    pub unrar: Option<String>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    pub fn with_recursive(mut self, recursive: Option<bool>) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_include_multipart(mut self, include_multipart: Option<bool>) -> Self {
        self.include_multipart = include_multipart;
        self
    }

    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_tools(
        mut self,
        unzip: Option<String>,
        tar: Option<String>,
        unrar: Option<String>,
    ) -> Self {
        self.unzip = unzip;
        self.tar = tar;
        self.unrar = unrar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.discovery.root, PathBuf::from("."));
        assert_eq!(config.discovery.recursive, None);
        assert!(!config.discovery.include_multipart);
        assert_eq!(config.display.page_size, 10);
        assert_eq!(config.tools.unzip, "unzip");
        assert_eq!(config.tools.tar, "tar");
        assert_eq!(config.tools.unrar, "unrar");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.display.page_size = 0;
        assert!(matches!(config.validate(), Err(ArcPickError::Config { .. })));

        let mut config = Config::default();
        config.tools.tar = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.discovery.root = PathBuf::from("/definitely/not/here");
        assert!(matches!(
            config.validate(),
            Err(ArcPickError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_root_must_be_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.zip");
        std::fs::write(&file, b"").unwrap();

        let mut config = Config::default();
        config.discovery.root = file;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        let overrides = CliOverrides::new()
            .with_root(Some(PathBuf::from("/tmp")))
            .with_recursive(Some(true))
            .with_include_multipart(Some(true))
            .with_page_size(Some(25))
            .with_tools(Some("bsdtar-unzip".to_string()), None, Some("unar".to_string()));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.discovery.root, PathBuf::from("/tmp"));
        assert_eq!(config.discovery.recursive, Some(true));
        assert!(config.discovery.include_multipart);
        assert_eq!(config.display.page_size, 25);
        assert_eq!(config.tools.unzip, "bsdtar-unzip");
        assert_eq!(config.tools.tar, "tar");
        assert_eq!(config.tools.unrar, "unar");
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let mut config = Config::default();
        config.merge_with_cli_args(&CliOverrides::new());
        assert_eq!(config.discovery.recursive, None);
        assert_eq!(config.display.page_size, DEFAULT_PAGE_SIZE);
    }
}
