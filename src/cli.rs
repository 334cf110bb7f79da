//! The command line arguments

use crate::utils::wants_color;
use clap::{crate_description, crate_version, AppSettings, Parser, ValueHint};
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Options for the `lwm-randr` program
#[derive(Parser, Default, Clone, Debug, PartialEq, Eq)]
#[clap(
    version = crate_version!(),
    author = <String as AsRef<str>>::as_ref(&APP_AUTHORS),
    about = <String as AsRef<str>>::as_ref(&APP_ABOUT),
    after_help =  <String as AsRef<str>>::as_ref(&AFTER_HELP),
    override_usage =  <String as AsRef<str>>::as_ref(&OVERRIDE_HELP),
    max_term_width = 100,
    color = clap::ColorChoice::Auto,
    global_setting = AppSettings::DeriveDisplayOrder,
)]
pub struct Opts {
    /// Display debugging messages on various levels
    #[clap(
        long,
        short,
        parse(from_occurrences),
        long_help = "
        Set the verbosity level of the program. There are 2 extra levels after the default (INFO). \
                     If `-v` is used, DEBUG messages are displayed, and if `-vv` is used TRACE \
                     messages are displayed. The verbosity can also be set with the \
                     `LWM_RANDR_LOG` environment variable"
    )]
    pub verbose: u8,

    /// Location of configuration file
    #[clap(
        long,
        short,
        takes_value = true,
        number_of_values = 1,
        value_name = "file",
        value_hint = ValueHint::FilePath,
        long_help = "\
        Specify the location of the configuration file. The default location is \
                `$XDG_CONFIG_HOME/lwm-randr/lwm-randr.yml`"
    )]
    pub config: Option<PathBuf>,

    /// Print the screens once and exit
    #[clap(
        long,
        short,
        long_help = "Print the screens found at startup and exit instead of following changes"
    )]
    pub list: bool,

    /// Print screens as JSON
    #[clap(long, short)]
    pub json: bool,
}

// =============== Prettify Help ==================

/// Yellow ansi code
const YELLOW: &str = "\x1b[0;33m";
/// Green ansi code
const GREEN: &str = "\x1b[0;32m";
/// Bright-green ansi code
const BRGREEN: &str = "\x1b[38;5;10m";
/// Bright-red ansi code
const BRRED: &str = "\x1b[38;5;9m";
/// Bold-red ansi code
const BRED: &str = "\x1b[01;38;5;1m";
/// Reset colors
const RES: &str = "\x1b[0m";

/// Colored options used in the output of `--help`
pub(crate) static APP_ABOUT: Lazy<String> = Lazy::new(|| {
    wants_color()
        .then(|| {
            format!(
                "{}DESCRIPTION: {}{}{}",
                YELLOW,
                GREEN,
                crate_description!(),
                RES
            )
        })
        .unwrap_or_else(|| crate_description!().to_owned())
});

/// Colorized message to override the generated help message
pub(crate) static OVERRIDE_HELP: Lazy<String> = Lazy::new(|| {
    wants_color()
        .then(|| {
            format!(
                "{}{}{} [{}FLAGS{}/{}OPTIONS{}]",
                BRED,
                crate::WM_NAME!(),
                RES,
                GREEN,
                RES,
                GREEN,
                RES
            )
        })
        .unwrap_or_else(|| format!("{} [FLAGS/OPTIONS]", crate::WM_NAME!()))
});

/// Colorized message displayed after the help message
pub(crate) static AFTER_HELP: Lazy<String> = Lazy::new(|| {
    wants_color()
        .then(|| {
            format!(
                "See {}{}{} {}--help{} for longer explanations of some options.",
                BRED,
                crate::WM_NAME!(),
                RES,
                GREEN,
                RES
            )
        })
        .unwrap_or_else(|| {
            format!(
                "See {} --help for longer explanations of some options.",
                crate::WM_NAME!()
            )
        })
});

/// Colorized message about the app's authors
pub(crate) static APP_AUTHORS: Lazy<String> = Lazy::new(|| {
    wants_color()
        .then(|| {
            format!(
                "{}Lucas Burns{}   <{}lmb@lmburns.com{}>",
                BRRED, RES, BRGREEN, RES,
            )
        })
        .unwrap_or_else(|| String::from("Lucas Burns   <lmb@lmburns.com>"))
});
