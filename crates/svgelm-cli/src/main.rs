use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use svgelm::elm::{module_source, ElmModule};
use svgelm::{parse_module, parse_svg, ModuleOptions, ParserResult};

#[derive(Debug, Parser)]
#[command(
    name = "svgelm",
    version,
    about = "Generate Elm view modules from SVG icons"
)]
struct Args {
    /// Input SVG file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Elm module name (defaults to the PascalCase input file stem)
    #[arg(short, long, value_name = "NAME")]
    module_name: Option<String>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let module_name = match args.module_name.or_else(|| infer_module_name(&args.input)) {
        Some(name) => name,
        None => {
            bail!("could not infer module name; pass --module-name or provide an input file");
        }
    };

    let module = match &args.input {
        Some(path) => match parse_module(path, &ModuleOptions::new(module_name)) {
            ParserResult::Module(module) => module,
            ParserResult::Failure { error } => bail!("{error}"),
        },
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            let svg = parse_svg(&buffer)?;
            ElmModule {
                module_name,
                view_body: svgelm::elm::view_body(&svg),
            }
        }
    };

    write_output(&args.output, module_source(&module).as_bytes())?;
    Ok(())
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

/// `search-icon.svg` becomes `SearchIcon`
fn infer_module_name(path: &Option<PathBuf>) -> Option<String> {
    let path = path.as_ref()?;
    let stem = path.file_stem().and_then(|s| s.to_str())?;

    let name: String = stem
        .split(['-', '_', ' ', '.'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
