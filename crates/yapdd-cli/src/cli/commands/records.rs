//! `pdd list|add|edit|del` - DNS record management.

use anyhow::Result;
use tracing::debug;

use super::Context;
use crate::cli::args::{AddArgs, EditArgs};
use crate::output;

pub async fn list(ctx: Context, domain: &str) -> Result<()> {
    let client = ctx.client()?;

    let resp = client.dns().list(domain).await?.into_result()?;
    debug!(count = resp.records.len(), "records listed");

    let domain = if resp.domain.is_empty() {
        domain
    } else {
        resp.domain.as_str()
    };
    output::print_records(ctx.output_format, domain, &resp.records)
}

pub async fn add(ctx: Context, args: AddArgs) -> Result<()> {
    let client = ctx.client()?;

    let resp = client
        .dns()
        .add(&args.domain, args.record_type, args.fields.into_params())
        .await?
        .into_result()?;

    output::print_record(ctx.output_format, "added", resp.record.as_ref())
}

pub async fn edit(ctx: Context, args: EditArgs) -> Result<()> {
    let params = args.fields.into_params();
    if params.is_empty() {
        anyhow::bail!("Nothing to change: pass at least one field, e.g. --content or --ttl");
    }

    let client = ctx.client()?;

    let resp = client
        .dns()
        .edit(&args.domain, args.record_id, params)
        .await?
        .into_result()?;

    output::print_record(ctx.output_format, "edited", resp.record.as_ref())
}

pub async fn delete(ctx: Context, domain: &str, record_id: u32) -> Result<()> {
    let client = ctx.client()?;

    let resp = client.dns().delete(domain, record_id).await?.into_result()?;

    output::print_delete(ctx.output_format, &resp)
}
