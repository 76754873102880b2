use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::info_span;

use bom_cli::pipeline::{
    load_batch, load_schema, normalize_batch, resolve_inputs, source_summaries,
};
use bom_model::MergeOptions;
use bom_output::export_outcome;

use crate::cli::{HeadersArgs, MergeArgs, SchemaArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::MergeReport;

pub fn run_merge(args: &MergeArgs) -> Result<MergeReport> {
    let span = info_span!("merge", inputs = args.inputs.len());
    let _guard = span.enter();
    if args.no_merged && args.no_condensed && !args.dry_run {
        bail!("nothing to export: both --no-merged and --no-condensed were given");
    }
    let schema = load_schema(args.schema.aliases.as_deref())?;
    let paths = resolve_inputs(&args.inputs)?;
    let batch = load_batch(&paths)?;
    let sources = source_summaries(&batch, &schema);
    let outcome = normalize_batch(&batch, &schema)?;

    let export = if args.dry_run {
        None
    } else {
        let options = merge_options(args);
        Some(export_outcome(
            &args.output_dir,
            &outcome,
            &options,
            sources.clone(),
        )?)
    };

    Ok(MergeReport {
        outcome,
        sources,
        output_dir: args.output_dir.clone(),
        export,
    })
}

fn merge_options(args: &MergeArgs) -> MergeOptions {
    MergeOptions::new()
        .with_format(args.format.into())
        .with_merged(!args.no_merged)
        .with_condensed(!args.no_condensed)
}

pub fn run_headers(args: &HeadersArgs) -> Result<()> {
    let schema = load_schema(args.schema.aliases.as_deref())?;
    let paths = resolve_inputs(&args.inputs)?;
    let batch = load_batch(&paths)?;
    for (name, inventory) in batch.header_inventories(&schema) {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Header"), header_cell("Canonical field")]);
        apply_table_style(&mut table);
        for entry in &inventory.entries {
            let target = entry
                .canonical
                .clone()
                .unwrap_or_else(|| "(passthrough)".to_string());
            table.add_row(vec![format!("{:?}", entry.raw), target]);
        }
        println!("{name}");
        println!("{table}");
        for (field, raws) in inventory.collisions() {
            println!(
                "note: {} all map to '{field}'; the rightmost column wins in each row",
                raws.join(", ")
            );
        }
    }
    Ok(())
}

pub fn run_fields(args: &SchemaArgs) -> Result<()> {
    let schema = load_schema(args.aliases.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Aliases")]);
    apply_table_style(&mut table);
    for field in &schema.fields {
        table.add_row(vec![field.name.clone(), field.aliases.join(", ")]);
    }
    println!("{table}");
    Ok(())
}
