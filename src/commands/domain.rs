//! Domain command - check emails against the registration allow-list

use crate::{FacetrError, auth::DomainPolicy, cli::DomainCommands, config::FacetrConfig};
use colored::Colorize;

type Result<T> = std::result::Result<T, FacetrError>;

/// Execute the domain command
pub fn execute(config: &FacetrConfig, command: &DomainCommands, quiet: bool) -> Result<()> {
    match command {
        DomainCommands::Check { email } => {
            let policy = DomainPolicy::new(&config.allowed_domains);
            let allowed = policy.allows(email);

            if quiet {
                println!("{}", if allowed { "allowed" } else { "denied" });
            } else if allowed {
                if policy.domains().is_empty() {
                    println!("{}: no allow-list configured, all domains accepted", "allowed".green());
                } else {
                    println!("{}: {email}", "allowed".green());
                }
            } else {
                println!("{}: {email}", "denied".red());
                println!("Allowed domains: {}", policy.domains().join(", "));
            }
        }
    }
    Ok(())
}
