use anyhow::Result;
use clap::Args;
use class_transform::apply_transform;
use class_transform_context::config::OutputFormat;
use class_transform_context::source::SourceFile;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct TransformArgs {
    /// Template file holding the binding
    pub file: PathBuf,
    /// 1-based cursor line
    #[arg(short, long)]
    pub line: usize,
    /// Rewrite the file in place
    #[arg(short, long)]
    pub write: bool,
    /// Print the edit as JSON instead of the document
    #[arg(long)]
    pub json: bool,
    /// Config file (defaults to ./.class-transform.json)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: TransformArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    config.write |= args.write;
    if args.json {
        config.output = OutputFormat::Json;
    }

    let cursor = super::cursor_line(args.line)?;
    let mut source = SourceFile::load(&args.file)?;
    let edit = apply_transform(&mut source.document, cursor)?;
    info!(range = %edit.range, file = %source.path.display(), "applied class binding edit");

    if config.write {
        source.save()?;
    }

    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&edit)?),
        OutputFormat::Text if config.write => {
            println!("Updated {}:{}", source.path.display(), edit.range.start.line + 1)
        }
        OutputFormat::Text => print!("{}", source.document),
    }

    Ok(())
}
