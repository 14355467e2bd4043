use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Path to the GraphQL file to print.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match super::read_source_file(&self.file_path).await {
            Ok(source) => source,
            Err(result) => return result,
        };

        match gqlparse::parse(&source) {
            Ok(document) => {
                let printed = gqlparse::print_document(&document);
                CommandResult::stdout(format_args!("{}", printed.trim_end()))
            },

            Err(err) => CommandResult::stderr(format_args!(
                "{} {}:\n{}",
                output_utils::RED_X,
                self.file_path.display(),
                err.format_detailed(Some(&source)),
            )),
        }
    }
}
