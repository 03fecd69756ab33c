use crate::config::profile::FormatProfile;
use crate::core::FormatOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "joinfmt")]
#[command(about = "Joins values into a single delimited string")]
pub struct CliConfig {
    /// Values to join; read from stdin, one per line, when omitted
    pub values: Vec<String>,

    /// Text inserted between consecutive values
    #[arg(long)]
    pub separator: Option<String>,

    /// Text emitted before the first value
    #[arg(long)]
    pub prefix: Option<String>,

    /// Text emitted after the last value
    #[arg(long)]
    pub postfix: Option<String>,

    /// TOML file with separator/prefix/postfix defaults
    #[arg(long)]
    pub options_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the effective options: defaults, then the profile file, then flags.
    pub fn format_options(&self) -> Result<FormatOptions> {
        let mut options = match &self.options_file {
            Some(path) => {
                tracing::debug!("Loading format profile from {}", path);
                FormatProfile::from_file(path)?.apply(FormatOptions::default())
            }
            None => FormatOptions::default(),
        };

        if let Some(separator) = &self.separator {
            options.separator = separator.clone();
        }
        if let Some(prefix) = &self.prefix {
            options.prefix = prefix.clone();
        }
        if let Some(postfix) = &self.postfix {
            options.postfix = postfix.clone();
        }

        Ok(options)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.options_file {
            validate_path("options_file", path)?;
            validate_file_extension("options_file", path, "toml")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            values: vec!["1".to_string(), "2".to_string()],
            separator: None,
            prefix: None,
            postfix: None,
            options_file: None,
            verbose: false,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let mut config = base_config();
        config.separator = Some(" - ".to_string());
        let options = config.format_options().unwrap();
        assert_eq!(options.separator, " - ");
        assert_eq!(options.prefix, "[");
    }

    #[test]
    fn test_validate_rejects_non_toml_options_file() {
        let mut config = base_config();
        config.options_file = Some("format.yaml".to_string());
        assert!(config.validate().is_err());

        config.options_file = Some("format.toml".to_string());
        assert!(config.validate().is_ok());
    }
}
