//! Headless commands - one catalog call, one JSON document on stdout

use std::io::Write;

use serde::Serialize;

use cloudcmp_client::CatalogSource;
use cloudcmp_core::prelude::*;
use cloudcmp_core::Category;

use crate::cli::Command;

/// `categories` output wrapper, matching the backend's shape
#[derive(Debug, Serialize)]
struct CategoryList {
    categories: Vec<Category>,
}

/// Run `command` against `source` and write its result to `out` as pretty JSON
pub async fn execute<C, W>(source: &C, command: &Command, out: &mut W) -> Result<()>
where
    C: CatalogSource,
    W: Write,
{
    debug!("Headless command: {:?}", command);

    match command {
        Command::Services { .. } => {
            let criteria = command.criteria().unwrap_or_default();
            emit(out, &source.list_services(&criteria).await?)
        }
        Command::Service { id } => emit(out, &source.get_service(id).await?),
        Command::Categories => {
            let categories = source.list_categories().await?;
            emit(out, &CategoryList { categories })
        }
        Command::Category { category } => {
            emit(out, &source.services_by_category(*category).await?)
        }
        Command::Compare { ids } => emit(out, &source.compare(ids).await?),
        Command::Health => emit(out, &source.health().await?),
    }
}

fn emit<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
