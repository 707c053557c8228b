// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Byte origin used when neither the command line nor an annotation file
/// gives one.
pub const DEFAULT_ORIGIN: u32 = 0x1000;
pub const DEFAULT_COMMENT_CHAR: char = '#';

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rom: Option<PathBuf>,
    pub annotations: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Byte address of the first ROM byte. Overrides any `org` annotation.
    pub origin: Option<u32>,
    pub comment_char: char,
    pub dump_symbols: bool,
    pub dump_xrefs: bool,
    pub export_symbols: Option<PathBuf>,
    pub verbosity: u8,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rom: None,
            annotations: None,
            output: None,
            origin: None,
            comment_char: DEFAULT_COMMENT_CHAR,
            dump_symbols: true,
            dump_xrefs: true,
            export_symbols: None,
            verbosity: 0,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn with_rom(mut self, rom: PathBuf) -> Self {
        self.rom = Some(rom);
        self
    }

    pub fn with_annotations(mut self, annotations: PathBuf) -> Self {
        self.annotations = Some(annotations);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_origin(mut self, origin: u32) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_comment_char(mut self, comment_char: char) -> Self {
        self.comment_char = comment_char;
        self
    }

    pub fn with_dump_symbols(mut self, dump: bool) -> Self {
        self.dump_symbols = dump;
        self
    }

    pub fn with_dump_xrefs(mut self, dump: bool) -> Self {
        self.dump_xrefs = dump;
        self
    }

    pub fn with_export_symbols(mut self, path: PathBuf) -> Self {
        self.export_symbols = Some(path);
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.comment_char.is_ascii_graphic() {
            return Err(format!(
                "comment_char must be a printable ASCII character, got {:?}",
                self.comment_char
            ));
        }
        if let Some(origin) = self.origin {
            if origin > 0xFFFF {
                return Err(format!("origin ${:X} is outside the 16-bit address space", origin));
            }
            if origin % 4 != 0 {
                return Err(format!("origin ${:04X} must be a multiple of 4 bytes", origin));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.dump_symbols && config.dump_xrefs);
        assert_eq!(config.comment_char, '#');
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Config::new().with_comment_char(' ').validate().is_err());
        assert!(Config::new().with_comment_char('é').validate().is_err());
        assert!(Config::new().with_origin(0x1002).validate().is_err());
        assert!(Config::new().with_origin(0x10000).validate().is_err());
        assert!(Config::new().with_origin(0x0800).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "origin": 4096, "comment_char": ";" }"#).unwrap();
        assert_eq!(config.origin, Some(0x1000));
        assert_eq!(config.comment_char, ';');
        assert!(config.show_progress);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("bitdasm-config-{}.json", std::process::id()));
        let config = Config::new().with_origin(0x2000).with_dump_xrefs(false);
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);

        assert!(matches!(Config::from_file(&path), Err(ConfigError::NotFound(_))));
    }
}
