mod cli;
mod run;

use anyhow::Result;
use cli::Command;

fn main() -> Result<()> {
    let cli = cli::parse();
    run::initialise_tracing();

    match cli.command {
        Command::List(args) => run::run_list(args),
        Command::Show(args) => run::run_show(args),
        Command::Export(args) => run::run_export(args),
        Command::Preview(args) => run::run_preview(args),
    }
}
