use clap::{crate_authors, crate_description, crate_name, crate_version, Command};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    env_logger::init();

    Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .get_matches();

    uitleg::print_structure()?;

    Ok(())
}
