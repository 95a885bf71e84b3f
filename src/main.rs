use std::env;
use std::path::PathBuf;
use tarot_localizer::{run, CliOptions};

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--data tarot_data.json] [--translations tarot_translations.json] [--check]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                opts.data_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--data requires a path (e.g. --data tarot_data.json)")
                })?;
            }
            "--translations" => {
                opts.translations_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!(
                        "--translations requires a path (e.g. --translations tarot_translations.json)"
                    )
                })?;
            }
            "--check" => opts.check = true,
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
