//! Url command - expose the filter-state query string codec

use crate::{FacetrError, cli::UrlCommands, urlstate};

type Result<T> = std::result::Result<T, FacetrError>;

/// Execute the url command
pub fn execute(command: &UrlCommands, quiet: bool) -> Result<()> {
    match command {
        UrlCommands::Encode { filter_args } => {
            let state = filter_args.to_state();
            println!("{}", urlstate::encode(&state));
        }
        UrlCommands::Decode { query } => {
            let state = urlstate::decode(query);
            if quiet {
                // Canonical re-encoding, handy for normalizing shared links.
                println!("{}", urlstate::encode(&state));
            } else {
                print!("{state}");
            }
        }
    }
    Ok(())
}
