//! the core app
use {
    super::{
        cli::{Cli, Command},
        logging, render,
    },
    crate::{
        config::{
            instance::{config_mut, init_config},
            options::HueWheel,
        },
        controller::ThemeController,
        error::Result,
        getopt,
        style::project,
        theme::{ThemeKey, ThemeRegistry},
    },
    color_eyre::eyre::Context,
    rand::{SeedableRng, rngs::StdRng},
    schemars::generate::SchemaSettings,
    std::{sync::Arc, time::Duration},
    tracing::{info, warn},
};

/// the huewheel app
pub struct HueApp {
    /// the themes every command works on
    registry: Arc<ThemeRegistry>,
}

impl HueApp {
    /// initialize huewheel
    ///
    /// - 1. installs the miette error handler hook
    /// - 2. loads the config file given on the command line, or the usual ones
    /// - 3. sets up logging
    ///
    /// # Errors
    ///
    /// returns an error if the miette hook is already installed
    /// returns an error if an explicitly given config file can't be loaded
    /// returns an error if it fails to setup logging
    pub fn init(cli: &Cli) -> Result<Self> {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(true)
                    .unicode(true)
                    .context_lines(3)
                    .tab_width(4)
                    .build(),
            )
        }))?;

        let load_error = match &cli.config {
            Some(path) => {
                let loaded = HueWheel::load_from_file(path)?;
                *config_mut()? = loaded;
                None
            }
            None => init_config().err(),
        };

        logging::setup(cli.verbose)?;

        if let Some(e) = load_error {
            warn!(error = %e, "failed to load configuration, using defaults");
        }

        info!(
            "Starting {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        Ok(Self {
            registry: ThemeRegistry::builtin(),
        })
    }

    /// run a command, listing the themes if there is none
    ///
    /// # Errors
    ///
    /// returns an error if the command fails
    pub async fn run(&self, command: Option<Command>) -> Result<()> {
        match command.unwrap_or(Command::List) {
            Command::List => print!("{}", render::theme_table(&self.registry)),
            Command::Show { theme, json } => self.show(theme, json)?,
            Command::Css { theme, bare } => self.css(theme, bare)?,
            Command::Rotate {
                ticks,
                interval,
                seed,
            } => self.rotate(ticks, interval, seed).await?,
            Command::Config { schema, save } => Self::config(schema, save)?,
        }

        Ok(())
    }

    /// print a theme's style bundle
    fn show(&self, theme: ThemeKey, json: bool) -> Result<()> {
        let bundle = project(self.registry.get(theme)?);

        if json {
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        } else {
            print!("{}", render::bundle_report(&bundle));
        }

        Ok(())
    }

    /// print a theme's css variables
    fn css(&self, theme: Option<ThemeKey>, bare: bool) -> Result<()> {
        let key = theme.unwrap_or_else(|| self.registry.first());
        let bundle = project(self.registry.get(key)?);

        if bare {
            print!("{}", bundle.to_css_vars());
        } else {
            print!("{}", bundle.to_root_block());
        }

        Ok(())
    }

    /// drive a controller through its startup sequence and auto-switching,
    /// printing every switch until `ticks` have happened or ctrl+c
    async fn rotate(&self, ticks: usize, interval: Option<u64>, seed: Option<u64>) -> Result<()> {
        let secs = interval.unwrap_or(getopt!(theme.auto_switch_secs));
        let mut controller = ThemeController::new(Arc::clone(&self.registry))
            .with_interval(Duration::from_secs(secs))?;

        let first = controller.initialize();
        self.print_switch("start", first)?;

        if seed.is_some() || getopt!(theme.randomize_on_start) {
            let picked = match seed {
                Some(seed) => controller.randomize_with(&mut StdRng::seed_from_u64(seed))?,
                None => controller.randomize()?,
            };
            self.print_switch("random", picked)?;
        }

        controller.toggle_auto_switch()?;
        println!("switching every {}s, ctrl+c to stop", secs);

        let mut seen = 0usize;
        while seen < ticks {
            tokio::select! {
                switched = controller.recv_tick() => {
                    let Some(key) = switched else { break };
                    seen += 1;
                    self.print_switch(&format!("{:>3}", seen), key)?;
                }
                signal = tokio::signal::ctrl_c() => {
                    signal.wrap_err("failed to listen for ctrl+c")?;
                    info!("interrupted");
                    break;
                }
            }
        }

        if controller.is_auto_switching() {
            controller.toggle_auto_switch()?;
        }

        Ok(())
    }

    /// print a single theme switch
    fn print_switch(&self, label: &str, key: ThemeKey) -> Result<()> {
        let entry = self.registry.get(key)?;
        println!("{}  {}", label, render::styled_name(entry));
        Ok(())
    }

    /// print the defaults, the json schema, or save the defaults globally
    fn config(schema: bool, save: bool) -> Result<()> {
        if schema {
            let settings = SchemaSettings::draft2020_12().for_serialize();
            let generator = settings.into_generator();
            let schema = generator.into_root_schema_for::<HueWheel>();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        } else if save {
            let path = HueWheel::default().save()?;
            println!("wrote {}", path.display());
        } else {
            print!("{}", HueWheel::default().to_toml()?);
        }

        Ok(())
    }
}
