use clap::{Parser, Subcommand, ValueEnum};
use conditio_kernel::DialectFamily;

#[derive(Parser)]
#[command(
    name = "conditio",
    about = "Conditio: evaluate script conditionals against pluggable script engines",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a conditional file and report the decision
    Eval {
        /// Conditional file (.toml or .json)
        file: String,

        /// Configuration parameter (repeatable)
        #[arg(long = "config", value_name = "KEY=VALUE")]
        config: Vec<String>,

        /// Evaluate without an execution context
        #[arg(long)]
        no_context: bool,

        /// Exit with status 3 when the conditional disables execution
        #[arg(long)]
        fail_on_disabled: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the script text synthesized for a conditional file
    Synthesize {
        /// Conditional file (.toml or .json)
        file: String,

        /// Dialect family; defaults to the family of the resolved engine
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,

        /// Configuration parameter (repeatable)
        #[arg(long = "config", value_name = "KEY=VALUE")]
        config: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered script engines
    Engines {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FamilyArg {
    Javascript,
    Groovy,
    Generic,
}

impl From<FamilyArg> for DialectFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Javascript => DialectFamily::JavaScriptLike,
            FamilyArg::Groovy => DialectFamily::GroovyLike,
            FamilyArg::Generic => DialectFamily::Generic,
        }
    }
}
