use std::process::ExitCode;

use filterlang_ide::HttpBackend;

use super::CommandResult;

pub async fn run(prefix: &str, backend: &HttpBackend) -> CommandResult {
    for dimension in backend.dimensions(prefix).await? {
        println!("{dimension}");
    }
    Ok(ExitCode::SUCCESS)
}
