pub mod ast;
pub mod check;
pub mod complete;
pub mod dimensions;
pub mod health;
pub mod highlight;
pub mod input;
pub mod lint;

#[cfg(test)]
mod complete_tests;
#[cfg(test)]
mod input_tests;

use std::process::ExitCode;

use crate::cli::Command;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Backend(#[from] filterlang_ide::Error),

    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            CommandError::Io { .. } => 1,
            CommandError::Backend(err) => u8::try_from(err.exit_code()).unwrap_or(1),
            CommandError::Usage(_) => 2,
        };
        ExitCode::from(code)
    }
}

pub type CommandResult = Result<ExitCode, CommandError>;

pub async fn run(command: Command) -> CommandResult {
    match command {
        Command::Ast {
            input,
            trivia,
            spans,
            pretty,
        } => ast::run(ast::AstArgs {
            filter: input::load(&input)?,
            trivia,
            spans,
            pretty,
        }),
        Command::Check {
            input,
            strict,
            color,
        } => check::run(check::CheckArgs {
            path: input.file.as_ref().map(|p| p.display().to_string()),
            filter: input::load(&input)?,
            strict,
            color: color.should_colorize(),
        }),
        Command::Highlight { input, json } => highlight::run(highlight::HighlightArgs {
            filter: input::load(&input)?,
            json,
        }),
        Command::Complete {
            input,
            cursor,
            json,
            backend,
        } => {
            let (filter, cursor) = complete::locate_cursor(input::load(&input)?, cursor)?;
            complete::run(
                complete::CompleteArgs {
                    filter,
                    cursor,
                    json,
                },
                &backend.connect()?,
            )
            .await
        }
        Command::Lint {
            input,
            json,
            backend,
        } => {
            lint::run(
                lint::LintArgs {
                    filter: input::load(&input)?,
                    json,
                },
                &backend.connect()?,
            )
            .await
        }
        Command::Health { backend } => health::run(&backend.connect()?).await,
        Command::Dimensions { prefix, backend } => {
            dimensions::run(prefix.as_deref().unwrap_or(""), &backend.connect()?).await
        }
    }
}
