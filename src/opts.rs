use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;

use crate::tabulated::backend::Backend;

/// Trapezoidal integration of tabulated and elementary functions.
#[derive(FromArgs)]
pub struct Opts {
    /// JSON file with task generation parameters
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// number of generated tasks, overrides the configuration
    #[argh(option, short = 'n')]
    pub tasks: Option<usize>,

    /// storage used for the tabulated sine table: array or linked-list
    #[argh(option, short = 'b', default = "Backend::Array")]
    pub backend: Backend,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Info")]
    pub log_level: LevelFilter,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}
