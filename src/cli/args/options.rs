use clap::ValueEnum;

/// Selection behaviours accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SelectArg {
	Alert,
	Exit,
}

impl SelectArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			SelectArg::Alert => "alert",
			SelectArg::Exit => "exit",
		}
	}
}

/// Log levels accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LevelArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LevelArg::Off => "off",
			LevelArg::Error => "error",
			LevelArg::Warn => "warn",
			LevelArg::Info => "info",
			LevelArg::Debug => "debug",
			LevelArg::Trace => "trace",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
