use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Full `generateContent` endpoint URL, model included.
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "gemini:\n  api_url: https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent\n  api_key: test-key"
        )
        .unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.gemini.api_url.ends_with(":generateContent"));
        assert_eq!(config.gemini.api_key, "test-key");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::from_file("/does/not/exist.yaml").is_err());
    }
}
