use crate::{
    itinerary_schema, DeliveryAdapter, ExportConfig, Exporter, FileDelivery, Renderer,
    StdoutDelivery, Validator,
};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing::{error, info};

fn command() -> Command {
    Command::new("itinerary-export")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a JSON travel itinerary into a standalone HTML document")
        .arg(
            Arg::new("input")
                .help("Path to the itinerary JSON file, or - for stdin")
                .index(1)
                .required_unless_present("schema"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory to write the document into (or set ITINERARY_OUTPUT_DIR)"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Write the document to standard output instead of a file")
                .action(ArgAction::SetTrue)
                .conflicts_with("output-dir"),
        )
        .arg(
            Arg::new("locale")
                .short('l')
                .long("locale")
                .value_name("LOCALE")
                .help("Locale for the generated-on date, e.g. de_DE (or set ITINERARY_LOCALE / LANG)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Validate the input against the itinerary JSON Schema first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .help("Print the itinerary JSON Schema and exit")
                .action(ArgAction::SetTrue),
        )
}

fn resolve_config(matches: &ArgMatches) -> anyhow::Result<ExportConfig> {
    let mut config = ExportConfig::from_env();

    if let Some(tag) = matches.get_one::<String>("locale") {
        config = config.with_locale_tag(tag)?;
    }
    if let Some(dir) = matches.get_one::<String>("output-dir") {
        config = config.with_output_dir(dir);
    }
    if matches.get_flag("strict") {
        config = config.with_strict(true);
    }

    Ok(config)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read itinerary from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read itinerary `{}`", input))
    }
}

fn export_with<D: DeliveryAdapter>(
    delivery: D,
    renderer: Renderer,
    itinerary: &crate::ItineraryResponse,
) -> anyhow::Result<String> {
    let exporter = Exporter::new(delivery).with_renderer(renderer);
    match exporter.export(itinerary) {
        Ok(exported) => Ok(exported.filename),
        Err(e) => {
            error!("Itinerary export failed: {}", e);
            Err(e.into())
        }
    }
}

/// CLI entry point for the itinerary-export tool
pub fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let matches = command().get_matches();

    if matches.get_flag("schema") {
        println!("{}", itinerary_schema().to_pretty_string()?);
        return Ok(());
    }

    let config = resolve_config(&matches)?;
    let input = matches
        .get_one::<String>("input")
        .context("an input file is required")?;

    let validator = if config.strict {
        Validator::strict()?
    } else {
        Validator::SerdeFirst
    };

    let raw = read_input(input)?;
    let itinerary = validator
        .parse(&raw)
        .with_context(|| format!("`{}` is not a usable itinerary", input))?;
    info!(
        "Rendering {} day(s) for {}",
        itinerary.itinerary.len(),
        itinerary.destination
    );

    let renderer = Renderer::new(config.locale);

    if matches.get_flag("stdout") {
        export_with(StdoutDelivery::new(), renderer, &itinerary)?;
    } else {
        let delivery = FileDelivery::new(config.output_dir.clone());
        let filename = export_with(&delivery, renderer, &itinerary)?;
        let written: PathBuf = delivery.target_path(&filename);
        println!("{}", written.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_schema_flag_needs_no_input() {
        let matches = command()
            .try_get_matches_from(["itinerary-export", "--schema"])
            .unwrap();
        assert!(matches.get_flag("schema"));
    }

    #[test]
    fn test_input_required_otherwise() {
        assert!(command()
            .try_get_matches_from(["itinerary-export"])
            .is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output_dir() {
        assert!(command()
            .try_get_matches_from(["itinerary-export", "trip.json", "--stdout", "-o", "out"])
            .is_err());
    }

    #[test]
    fn test_resolve_config_flags() {
        let matches = command()
            .try_get_matches_from([
                "itinerary-export",
                "trip.json",
                "--locale",
                "de_DE",
                "-o",
                "exports",
                "--strict",
            ])
            .unwrap();

        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert!(config.strict);
        assert_eq!(format!("{:?}", config.locale), "de_DE");
    }

    #[test]
    fn test_resolve_config_rejects_unknown_locale() {
        let matches = command()
            .try_get_matches_from(["itinerary-export", "trip.json", "--locale", "zz_ZZ"])
            .unwrap();
        assert!(resolve_config(&matches).is_err());
    }
}
