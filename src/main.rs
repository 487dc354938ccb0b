use std::io::IsTerminal;

use runnable_gen::cli::CommandLineInterface;
use runnable_gen::logging;

fn main() -> anyhow::Result<()> {
    let command_line_interface = CommandLineInterface::load();
    logging::init_logging(command_line_interface.verbosity(), std::io::stderr().is_terminal());
    command_line_interface.run()
}
