use crate::bmd::*;

/// Writes to the given file, or to the standard output for `None` and `stdout`.
pub fn write_output(out: Option<&str>, content: &str) -> BmdResult<()> {
    match out {
        None | Some("stdout") => {
            println!("{}", content);
            Ok(())
        }
        Some(path) => {
            info!("Writing output to {:?}", path);
            fs::write(path, content).context(WritingFileSnafu { path })
        }
    }
}

#[cfg(test)]
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}
