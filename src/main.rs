use request_filter::{
    Commands, build_filters, cli_parse, demo_records, display, load_records, run_filters,
};

fn main() -> anyhow::Result<()> {
    let cli = cli_parse();

    match &cli.command {
        Commands::Filter {
            file,
            expression,
            saved,
            format,
        } => {
            let records = load_records(file)?;
            let filters = build_filters(expression.as_deref(), saved.as_deref())?;
            run_filters(&records, &filters, *format)?;
        }
        Commands::Info { file } => {
            let records = load_records(file)?;
            display::display_record_info(&records);
        }
        Commands::Demo { expression, format } => {
            let records = demo_records();
            let filters = build_filters(expression.as_deref(), None)?;
            run_filters(&records, &filters, *format)?;
        }
    }

    Ok(())
}
