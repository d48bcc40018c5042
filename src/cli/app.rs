//! Main CLI application

use crate::config::{load_settings, read_credential, validate_settings};
use crate::error::{MapdnError, Result};
use crate::mapping::RequestArgs;
use crate::runner::{run_request, Context, Outcome, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// Parsed command line
    matches: ArgMatches,
    /// Context used for diagnostics and error reporting
    ctx: Context,
}

impl App {
    /// Parse the process arguments
    pub fn new() -> Self {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        Self::from_args(std::env::args_os())
    }

    /// Parse the provided arguments
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_command().get_matches_from(args);
        let ctx = Context::new().with_verbosity(get_verbosity(&matches));
        App { matches, ctx }
    }

    /// Run the application
    ///
    /// Flag combinations are checked before settings are loaded, so a usage
    /// error is reported as such whatever state the settings file is in.
    pub fn run(&self) -> Result<Outcome> {
        let args = request_args(&self.matches);
        args.check_flags()?;

        let explicit = self.matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
        let (settings, config_path) = load_settings(explicit)?;
        let rules = validate_settings(&settings)?;

        let ctx = self.ctx.clone().with_config_path(config_path);
        match &ctx.config_path {
            Some(path) => ctx.print_debug(&format!("Loaded settings from {}", path.display())),
            None => ctx.print_debug("Using default settings"),
        }

        let request = args.validate(&rules)?;
        let credential = read_credential(&settings.password_file)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_request(&settings, &credential, &request, &mut out, &ctx)
    }

    /// Print an error to stderr with its severity prefix
    ///
    /// Warnings are dropped in quiet mode; errors are always shown.
    pub fn report(&self, err: &MapdnError) {
        if err.is_warning() {
            self.ctx.print_warning(&err.to_string());
        } else {
            self.ctx.print_error(&err.to_string());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("mapdn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Modify the DN mapping database")
        .arg(
            Arg::new("add")
                .short('a')
                .long("add")
                .help("Add the distinguished name to the database")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("delete")
                .short('d')
                .long("delete")
                .help("Delete the distinguished name from the database")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Export the contents of the database as a grid-mapfile")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dn")
                .long("dn")
                .value_name("DN")
                .allow_hyphen_values(true)
                .help("The distinguished name"),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .value_name("USER")
                .allow_hyphen_values(true)
                .help("The local account name"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to mapdn.yml settings file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print export output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Collect the request flags from parsed arguments
pub fn request_args(matches: &ArgMatches) -> RequestArgs {
    RequestArgs {
        add: matches.get_flag("add"),
        delete: matches.get_flag("delete"),
        export: matches.get_flag("export"),
        dn: matches.get_one::<String>("dn").cloned(),
        user: matches.get_one::<String>("user").cloned(),
    }
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}
