//! `list-records domain_id=<id>`: table of every record of a domain

use std::process::ExitCode;

use dldns::output::render_table;
use dldns::{Context, commands};
use dldns_core::Result;

async fn list_records(ctx: Context) -> Result<String> {
    let records = commands::list_records(&ctx.client, &ctx.args).await?;
    Ok(render_table(&records))
}

fn main() -> ExitCode {
    dldns::run(list_records)
}
