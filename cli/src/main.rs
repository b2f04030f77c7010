mod commands;
mod terminal;

use commands::{CommandLine, Commands, list, show};
use solid_common::config::Config;
use terminal::{logging, print, sink::TerminalSink};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init()?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        contrast: commands.command.contrast(),
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::List => {
            print::header("the principles", cfg.quiet);
            list::list(&cfg)
        }
        Commands::Show { principle, .. } => {
            show::show(principle, &cfg, &TerminalSink).map(|_| ())
        }
        Commands::Tour { .. } => show::tour(&cfg, &TerminalSink).map(|_| ()),
    }
}
