//! every available configuration option and its type is listed in this file
use {
    crate::config::validate::{Validate, format_validation_errors},
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::debug,
};

/// the name of config files, both global and local
pub const CONFIG_FILE_NAME: &str = "huewheel.toml";

/// Settings for theme switching
///
/// The starting theme is not configurable, the first render
/// always uses the registry's first theme.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ThemeCfg {
    /// Seconds each theme stays up while auto-switching
    #[schemars(range(min = 1, max = 3600))]
    #[default(Some(15))]
    pub auto_switch_secs: Option<u64>,

    /// Replace the default theme with a random one once the app is up
    #[default(Some(true))]
    pub randomize_on_start: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, SmartDefault, PartialEq, Eq)]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    Compact,

    /// Use an excessively pretty output format
    #[default]
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// Use extra pretty logging
    #[default(Some(LoggingFormat::Pretty))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// The huewheel configuration
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct HueWheel {
    /// Configuration file version (do not modify manually)
    #[default(Some(1))]
    pub version: Option<u32>,

    /// Theme switching settings
    #[default(Some(ThemeCfg::default()))]
    pub theme: Option<ThemeCfg>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl HueWheel {
    /// load config from default locations
    ///
    /// sources, lowest priority first: the embedded defaults, the global
    /// config file, the nearest `huewheel.toml` in the current directory or
    /// one of its ancestors, then `HUEWHEEL_*` environment variables
    ///
    /// # Errors
    ///
    /// returns an error if a source can't be read or parsed, or if the
    /// merged config fails validation
    pub fn load() -> Result<Self> {
        let defaults = Self::load_defaults()?;
        let mut builder = Self::create_builder(&defaults)?;

        if let Some(global_config) = Self::global_config_path() {
            builder = builder.add_source(config::File::from(global_config).required(false));
        }

        if let Some(local_config) = Self::find_local_config()? {
            debug!(path = %local_config.display(), "using local config");
            builder = builder.add_source(config::File::from(local_config).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HUEWHEEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: HueWheel = settings
            .try_deserialize::<HueWheel>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        Ok(cfg)
    }

    /// load a single config file on top of the embedded defaults
    ///
    /// # Errors
    ///
    /// returns an error if the file can't be read, parsed or validated
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let defaults = Self::load_defaults()?;
        let settings = Self::create_builder(&defaults)?
            .add_source(config::File::from(path.to_path_buf()).required(true))
            .build()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: HueWheel = settings
            .try_deserialize()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        Ok(cfg)
    }

    /// get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("huewheel").join(CONFIG_FILE_NAME))
    }

    /// load default config from the embedded default config file
    fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/huewheel.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &HueWheel) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default config struct to config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| {
                let formatted = format_validation_errors(&errors);
                eyre!(formatted)
            })
            .wrap_err("config validation failed")
            .suggestion("Check your huewheel.toml for invalid values")
            .suggestion("Run `huewheel config` to see the defaults")
    }

    /// find the local config file
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(curr_dir
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|path| path.exists()))
    }

    /// render the config as TOML
    ///
    /// # Errors
    ///
    /// returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")
    }

    /// save config to a file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// returns an error if the directory or file can't be written
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str = self.to_toml()?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .wrap_err("Failed to create config directory")
                .with_section(|| format!("{}", dir.display()).header("Directory:"))?;
        }

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }

    /// save config to the global config location
    ///
    /// # Errors
    ///
    /// returns an error if there is no config directory or the write fails
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::global_config_path()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        self.save_to_file(&path)?;
        Ok(path)
    }
}
