use clap::Parser;
use magic_icons::icon_gen::{self, Options, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(
    name = "magic-icons",
    about = "Draw the Silas Learns Chinese app icon at every iOS AppIcon size",
    long_about = "Draw the Silas Learns Chinese app icon at every iOS AppIcon size.\n\n\
                  Run without arguments to write exactly the nine AppIcon PNGs into the \
                  default asset catalog directory. Both options are optional extras."
)]
struct Args {
    /// Optional: write the icons somewhere other than the default asset catalog.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Optional: also write an Xcode Contents.json. Off by default, so a plain run
    /// leaves only the nine PNGs.
    #[clap(long)]
    contents_json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = Options {
        output: args.output,
        contents_json: args.contents_json,
    };

    match icon_gen::generate_icons(&options) {
        Ok(()) => {
            println!();
            println!("🎉 All app icons created in {}", options.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("❌ Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
