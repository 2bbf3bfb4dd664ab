use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "c4tools")]
#[clap(about = "Tools for Connect-Four move-sequence lists used to build the opening book", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keep the sequences of a timing file whose search time exceeds a threshold.
    FilterTime(FilterTimeCommand),
    /// Convert `<sequence> <value>` lines to `<012 encoding> <value>`.
    Convert(LineCommand),
    /// Write every prefix of every sequence.
    Prefixes(LineCommand),
    /// Keep one sequence per distinct board position.
    Dedup(DedupCommand),
    /// Write every legal one-ply continuation of every sequence.
    Extend(LineCommand),
    /// Generate the transposition list of every ply up to a depth, mirrors excluded.
    Enumerate(EnumerateCommand),
    /// Drop positions where the player to move can win immediately.
    StripWins(LineCommand),
    /// Split a sequence list into one file per ply.
    SplitByPly(SplitByPlyCommand),
    /// Print the board reached by a move sequence.
    Print(PrintCommand),
}

#[derive(Args)]
pub struct LineCommand {
    /// File to read.
    pub input: String,

    /// File to write to.
    pub output: String,

    #[clap(short, long)]
    pub config: Option<String>,

    /// Skip and log lines that cannot be processed instead of stopping.
    #[clap(long)]
    pub skip_invalid: bool,
}

#[derive(Args)]
pub struct FilterTimeCommand {
    #[clap(flatten)]
    pub line: LineCommand,

    /// Overrides `min_time` from the config.
    #[clap(long)]
    pub min_time: Option<i64>,
}

#[derive(Args)]
pub struct DedupCommand {
    #[clap(flatten)]
    pub line: LineCommand,

    /// Also drop positions whose mirror image was already kept.
    #[clap(long)]
    pub mirrors: bool,
}

#[derive(Args)]
pub struct EnumerateCommand {
    /// Directory for the `transposition_list_<ply>_ply` files.
    #[clap(short, long, default_value_t = String::from("."))]
    pub out_dir: String,

    /// Deepest ply to generate.
    #[clap(long, default_value_t = 12)]
    pub max_ply: usize,
}

#[derive(Args)]
pub struct SplitByPlyCommand {
    /// File to read. Output files are named `<file>_<ply>_ply`.
    pub input: String,

    /// Directory for the ply files. Defaults to the directory of the input.
    #[clap(short, long)]
    pub out_dir: Option<String>,
}

#[derive(Args)]
pub struct PrintCommand {
    /// Move sequence such as `3344`.
    #[clap(default_value_t = String::new())]
    pub sequence: String,

    /// Also print the 012 encoding of the board.
    #[clap(short, long)]
    pub encoding: bool,
}
