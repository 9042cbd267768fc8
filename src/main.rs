use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use env_logger::Env;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the layout that would be created without writing anything")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_filter = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if matches.get_flag("dry-run") {
        stackgen::api::preview_current_dir()?;
    } else {
        stackgen::api::scaffold_current_dir()?;
    }

    Ok(())
}
