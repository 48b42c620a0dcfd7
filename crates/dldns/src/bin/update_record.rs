//! `update-record domain_id=<id> record_id=<id> [target_ip=<ip>]`

use std::process::ExitCode;

use dldns::commands::{self, UpdateRecord};
use dldns::output::render_value;
use dldns::Context;
use dldns_core::Result;

async fn update_record(ctx: Context) -> Result<String> {
    let request = UpdateRecord::from_args(&ctx.args)?;
    let updated = commands::update_record(&ctx.client, &ctx.resolver, &request).await?;
    Ok(render_value(&updated))
}

fn main() -> ExitCode {
    dldns::run(update_record)
}
