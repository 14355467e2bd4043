mod print;
mod tokens;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::output_utils;
use print::PrintCmd;
use std::path::Path;
use tokens::TokensCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlparse")]
pub(crate) enum CommandEnum {
    /// Parse a GraphQL file and print it back in canonical form.
    Print(Box<PrintCmd>),

    /// Lex a GraphQL file and list its tokens.
    Tokens(Box<TokensCmd>),

    /// Parse and validate GraphQL files or directories of GraphQL files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

/// Reads a single input file, turning a failure into the command's result.
async fn read_source_file(path: &Path) -> Result<String, CommandResult> {
    log::debug!("Reading {path:#?}...");
    tokio::fs::read_to_string(path).await.map_err(|err| {
        CommandResult::stderr(format_args!(
            "{} Failed to read {}: {err}",
            output_utils::RED_X,
            path.display(),
        ))
    })
}
