// Entry point: read the timesheet export, print the JSON result.
//
// The library never fails a batch with an error; the only exits with a
// non-zero status are an unreadable input file or an invalid config.
use clap::Parser;
use fee_reminders::{logger, output, process_csv_str, CliArgs, ProcessingResult};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);
    tracing::info!("Reading {}", args.input.display());

    let config = args.email_config();
    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        print_result(&ProcessingResult::failure(e.to_string()), &args)?;
        std::process::exit(1);
    }

    let content = match std::fs::read_to_string(&args.input) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to load file: {}", e);
            let result = ProcessingResult::failure(format!("Error leyendo archivo: {}", e));
            print_result(&result, &args)?;
            std::process::exit(1);
        }
    };
    let result = process_csv_str(&content, &config);
    if args.preview && result.success {
        output::preview_table_rows(&output::summary_rows(&result), usize::MAX);
    }
    print_result(&result, &args)?;
    Ok(())
}

fn print_result(result: &ProcessingResult, args: &CliArgs) -> anyhow::Result<()> {
    println!("{}", output::to_json(result)?);
    if let Some(path) = &args.output {
        output::write_json(path, result)?;
        tracing::info!("Result saved to {}", path.display());
    }
    Ok(())
}
