use std::process::ExitCode;

use filterlang_ide::HttpBackend;

use super::CommandResult;

pub async fn run(backend: &HttpBackend) -> CommandResult {
    backend.health_check().await?;
    println!("ok: {}", backend.base_url());
    Ok(ExitCode::SUCCESS)
}
