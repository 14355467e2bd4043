use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlparse::token::TokenKind;
use gqlparse::token_source::Lexer;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to lex.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    /// Lists one token per line as `line:position kind literal`.
    ///
    /// Lexing never stops early, so every illegal token is listed. The exit
    /// code is a failure if there was at least one.
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match super::read_source_file(&self.file_path).await {
            Ok(source) => source,
            Err(result) => return result,
        };

        let mut num_illegal = 0;
        let lines: Vec<String> = Lexer::new(&source)
            .map(|token| {
                if token.kind == TokenKind::Illegal {
                    num_illegal += 1;
                }
                format!(
                    "{}:{} {} {:?}",
                    token.line,
                    token.position,
                    token.kind.describe(),
                    token.literal,
                )
            })
            .collect();
        log::debug!("Lexed {} tokens ({num_illegal} illegal).", lines.len());

        CommandResult {
            exit_code: if num_illegal == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE },
            stderr: None,
            stdout: Some(lines.join("\n")),
        }
    }
}
