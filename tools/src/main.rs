mod cli;

use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, LineCommand};
use common::FsExt;
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use tools::{
    create_output, ensure_distinct, load_options, open_input, Overrides, RunSummary, ToolOptions,
};

type LineTool = fn(BufReader<File>, &mut BufWriter<File>, &ToolOptions) -> Result<RunSummary>;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::FilterTime(args) => {
            let overrides = Overrides {
                min_time: args.min_time,
                ..overrides(&args.line)
            };
            let options = options_for(&args.line, "filter_time", &overrides)?;

            run_line_tool(&args.line, &options, tools::filter_time::filter_time)?
        }
        Commands::Convert(args) => {
            let options = options_for(args, "convert", &overrides(args))?;
            run_line_tool(args, &options, tools::convert::convert)?
        }
        Commands::Prefixes(args) => {
            let options = options_for(args, "prefixes", &overrides(args))?;
            run_line_tool(args, &options, tools::prefixes::prefixes)?
        }
        Commands::Dedup(args) => {
            let overrides = Overrides {
                mirrors: args.mirrors,
                ..overrides(&args.line)
            };
            let options = options_for(&args.line, "dedup", &overrides)?;

            run_line_tool(&args.line, &options, tools::dedup::dedup)?
        }
        Commands::Extend(args) => {
            let options = options_for(args, "extend", &overrides(args))?;
            run_line_tool(args, &options, tools::extend::extend)?
        }
        Commands::StripWins(args) => {
            let options = options_for(args, "strip_wins", &overrides(args))?;
            run_line_tool(args, &options, tools::strip_wins::strip_wins)?
        }
        Commands::Enumerate(args) => {
            let out_dir = args.out_dir.relative_to_cwd()?;

            let summary = tools::enumerate::enumerate(&out_dir, args.max_ply)?;

            info!("{}", serde_json::to_string(&summary)?);
        }
        Commands::SplitByPly(args) => {
            let input = args.input.relative_to_cwd()?;
            let out_dir = args
                .out_dir
                .as_ref()
                .map(|dir| dir.relative_to_cwd())
                .transpose()?;

            let summary = tools::split_by_ply::split_by_ply(&input, out_dir.as_deref())?;

            info!("{}", serde_json::to_string(&summary)?);
        }
        Commands::Print(args) => {
            let rendered = tools::print::render_board(&args.sequence, args.encoding)
                .with_context(|| format!("Cannot print {:?}", args.sequence))?;

            print!("{}", rendered);
        }
    }

    Ok(())
}

fn overrides(args: &LineCommand) -> Overrides {
    Overrides {
        skip_invalid: args.skip_invalid,
        ..Overrides::default()
    }
}

fn options_for(args: &LineCommand, scope: &str, overrides: &Overrides) -> Result<ToolOptions> {
    let config = args
        .config
        .as_ref()
        .map(|path| path.relative_to_cwd())
        .transpose()?;

    let options = load_options(config.as_deref(), scope, overrides)?;

    info!("{:?}", options);

    Ok(options)
}

fn run_line_tool(args: &LineCommand, options: &ToolOptions, tool: LineTool) -> Result<()> {
    let input = args.input.relative_to_cwd()?;
    let output = args.output.relative_to_cwd()?;

    ensure_distinct(&input, &output)?;

    let reader = open_input(&input)?;
    let mut writer = create_output(&output)?;

    info!("Reading {:?}, writing {:?}", input, output);

    let summary = tool(reader, &mut writer, options)?;

    info!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
