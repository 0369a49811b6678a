use std::io::Write;

use anyhow::{Context, Result};

use crate::lib::config::Config;

/// Report where the scaffold for the given configuration would be generated.
///
/// Writes a single status line to `out`. The scaffold itself is not created
/// yet, this is the seam where directory creation and template rendering
/// would hang off the configuration.
pub fn generate_scaffold<W: Write>(out: &mut W, conf: &Config) -> Result<()> {
    log::trace!("Reporting scaffold for project '{}'", conf.name);

    writeln!(
        out,
        "Generating {} scaffold at {}...",
        conf.name, conf.directory
    )
    .context("Failed to write the scaffold status line.")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_generation_status_line() {
        let mut out = Vec::new();
        let conf = Config {
            name: "project1".into(),
            directory: "./project1".into(),
            repository: "github.com/username/project1".into(),
            has_static_assets: false,
        };

        generate_scaffold(&mut out, &conf).expect("didn't expect an error");

        assert_eq!(
            String::from_utf8(out).expect("output is not valid utf-8"),
            "Generating project1 scaffold at ./project1...\n"
        );
    }
}
