use crate::cli::{Cli, Command};

pub mod browse;
pub mod categories;
pub mod copy;
pub mod list;
pub mod source_args;
pub mod theme;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Browse(args) => browse::run(args).await,
        Command::List(args) => list::run(args).await,
        Command::Categories(args) => categories::run(args).await,
        Command::Theme(args) => theme::run(args).await,
        Command::Copy(args) => copy::run(args).await,
    }
}
