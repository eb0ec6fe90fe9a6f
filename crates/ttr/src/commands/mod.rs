pub(crate) mod aggregate;
pub(crate) mod analyze;
pub(crate) mod chunks;
pub(crate) mod tokenize;

use anyhow::Result;
use ttr_config::{Commands, Settings};

pub(crate) fn dispatch(command: Commands, settings: Settings) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle(args, settings),
        Commands::Aggregate(args) => aggregate::handle(args),
        Commands::Chunks(args) => chunks::handle(args, settings),
        Commands::Tokenize(args) => tokenize::handle(args, settings),
    }
}
