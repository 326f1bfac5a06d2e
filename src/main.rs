use std::{
    env, fs,
    io::{self, Write},
};

use anyhow::Context;
use log::info;
use word_frequency::word_frequency_all;

const SAMPLE_TEXT: &str = "Four, One two two three Three three four  four   four";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let file_names = env::args().skip(1).collect::<Vec<String>>();
    let stdout = io::stdout();
    run(&file_names, &mut stdout.lock())
}

/// Counts the given files together, or the sample sentence when there are
/// none, and writes one `word => count` line per word in key order.
fn run(file_names: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    let texts = if file_names.is_empty() {
        info!("No input files given, counting the sample text");
        vec![SAMPLE_TEXT.to_owned()]
    } else {
        file_names
            .iter()
            .map(|file_name| {
                info!("Reading {}", file_name);
                fs::read_to_string(file_name)
                    .with_context(|| format!("Error reading file {}", file_name))
            })
            .collect::<anyhow::Result<Vec<String>>>()?
    };

    for (word, count) in word_frequency_all(&texts) {
        writeln!(out, "{} => {}", word, count)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(file_names: &[String]) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(file_names, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn counts_the_sample_without_arguments() {
        assert_eq!(
            output_of(&[]).unwrap(),
            "four => 4\none => 1\nthree => 3\ntwo => 2\n"
        );
    }

    #[test]
    fn counts_files_together() {
        let tmp = tempfile::tempdir().unwrap();
        let first = tmp.path().join("first.txt");
        let second = tmp.path().join("second.txt");
        fs::write(&first, "Apple, banana.").unwrap();
        fs::write(&second, "BANANA apple cherry").unwrap();

        let names = [first, second]
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<String>>();
        assert_eq!(
            output_of(&names).unwrap(),
            "apple => 2\nbanana => 2\ncherry => 1\n"
        );
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.txt");
        let names = vec![missing.to_string_lossy().into_owned()];

        let mut out = Vec::new();
        let err = run(&names, &mut out).unwrap_err();
        assert!(err.to_string().contains(&names[0]), "{:#}", err);
        assert!(out.is_empty());
    }
}
