//! `list-domains`: table of every domain on the account

use std::process::ExitCode;

use dldns::output::render_table;
use dldns::{Context, commands};
use dldns_core::Result;

async fn list_domains(ctx: Context) -> Result<String> {
    let domains = commands::list_domains(&ctx.client).await?;
    Ok(render_table(&domains))
}

fn main() -> ExitCode {
    dldns::run(list_domains)
}
