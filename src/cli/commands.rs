//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::Branch;
use crate::parser::{FigtreeReader, ParseOptions};
use crate::writer::{FigtreeWriter, InternalWriter, JsonWriter, TreeWriter, YamlWriter};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Print { file, sort } => cmd_print(cli, file, *sort),
        Commands::Convert {
            file,
            format,
            output,
            sort,
        } => cmd_convert(cli, file, *format, output.as_deref(), *sort),
        Commands::Get { file, key_path } => cmd_get(cli, file, key_path),
        Commands::Query { file, key_path } => cmd_query(cli, file, key_path),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn read_merged(cli: &Cli, file: &Path) -> CliResult<Branch> {
    let mut reader = FigtreeReader::with_options(ParseOptions {
        strict_braces: cli.strict,
    });
    Ok(reader.read_config(file)?)
}

fn cmd_print(cli: &Cli, file: &Path, sort: bool) -> CliResult<()> {
    let mut root = read_merged(cli, file)?;
    if sort {
        root.sort_items();
    }
    output::document(&root.write_to_string(&FigtreeWriter));
    Ok(())
}

fn cmd_convert(
    cli: &Cli,
    file: &Path,
    format: OutputFormat,
    out_file: Option<&Path>,
    sort: bool,
) -> CliResult<()> {
    let mut root = read_merged(cli, file)?;
    if sort {
        root.sort_items();
    }

    let writer: &dyn TreeWriter = match format {
        OutputFormat::Figtree => &FigtreeWriter,
        OutputFormat::Internal => &InternalWriter,
        OutputFormat::Json => &JsonWriter,
        OutputFormat::Yaml => &YamlWriter,
    };

    match out_file {
        Some(path) => {
            root.write_to_file(writer, path)?;
            output::action("wrote", &path.display());
        }
        None => output::document(&root.write_to_string(writer)),
    }
    Ok(())
}

fn cmd_get(cli: &Cli, file: &Path, key_path: &str) -> CliResult<()> {
    let root = read_merged(cli, file)?;
    let value = root.get_value(key_path)?;
    output::info(&value);
    Ok(())
}

fn cmd_query(cli: &Cli, file: &Path, key_path: &str) -> CliResult<()> {
    let root = read_merged(cli, file)?;

    let rendered = root
        .find_all(key_path)
        .into_iter()
        .map(|item| match item.value() {
            Ok(value) => value.to_string(),
            // a branch match prints as its own figtree document
            Err(_) => {
                let mut section = Branch::new();
                section.append_item(item.clone());
                section.write_to_string(&FigtreeWriter)
            }
        })
        .join("\n");

    if !rendered.is_empty() {
        output::info(&rendered);
    }
    Ok(())
}
