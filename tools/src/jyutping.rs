//! `improve_jyutping`: backfill missing frequencies in `jyutping.txt` from a
//! Cantonese table and add tone-letter keys derived from Unihan readings.

use crate::output::write_atomic;
use anyhow::{Context, Result};
use clap::Parser;
use libjyutping::{build_corpus, merge, read_readings, Converter, JyutpingConfig, MergeStats};
use libtable_core::TableFile;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "improve_jyutping", about = "Improve the jyutping.txt table")]
pub struct Args {
    /// Input file
    #[arg(short = 'i', long = "inputfilename", default_value = "jyutping.txt")]
    pub input: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "outputfilename", default_value = "jyutping.txt.new")]
    pub output: PathBuf,

    /// File to use for the readings
    #[arg(short = 'u', long = "unihanreadingsfilename", default_value = "Unihan_Readings.txt")]
    pub readings: PathBuf,

    /// File to use for the frequencies
    #[arg(short = 'f', long = "frequencyfilename", default_value = "cantonese.txt")]
    pub frequencies: PathBuf,

    /// TOML file with initials/finals/overrides replacing the built-in tables
    #[arg(short = 'r', long = "rules")]
    pub rules: Option<PathBuf>,

    /// Look up the regional usage of characters still lacking a frequency
    #[cfg(feature = "cloud")]
    #[arg(long = "classify-url")]
    pub classify_url: Option<String>,

    /// Maximum number of characters sent to the classifier
    #[cfg(feature = "cloud")]
    #[arg(long = "classify-limit", default_value_t = 100)]
    pub classify_limit: usize,

    /// Print debugging output
    #[arg(short = 'd', long)]
    pub debug: bool,
}

pub fn run(args: &Args) -> Result<MergeStats> {
    let config = match &args.rules {
        Some(path) => JyutpingConfig::load_toml(path)?,
        None => JyutpingConfig::default(),
    };

    let frequencies = TableFile::read(&args.frequencies)
        .with_context(|| format!("reading frequencies from {}", args.frequencies.display()))?;
    let readings = read_readings(&args.readings)
        .with_context(|| format!("reading readings from {}", args.readings.display()))?;

    let mut converter = Converter::from_config(&config);
    let corpus = build_corpus(&readings, &frequencies.table, &mut converter)
        .context("building the frequency corpus")?;
    info!(
        "{} corpus records, {} syllables converted",
        corpus.len(),
        converter.cache().len()
    );

    let mut file = TableFile::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let stats = merge(&mut file.table, &corpus);

    #[cfg(feature = "cloud")]
    {
        let mut config = config;
        if args.classify_url.is_some() {
            config.classify_url = args.classify_url.clone();
        }
        classify::report_unweighted(&config, &file.table, &corpus, args.classify_limit);
    }

    write_atomic(&args.output, &file.to_text())?;
    Ok(stats)
}

#[cfg(feature = "cloud")]
mod classify {
    use libjyutping::{FrequencyCorpus, JyutpingConfig, RegionClassifier};
    use libtable_core::Table;
    use std::collections::BTreeSet;
    use tracing::info;

    /// Characters whose toneless entry still has weight 0, in code point
    /// order, at most `limit` of them.
    pub fn unweighted_characters<'a>(
        table: &Table,
        corpus: &'a FrequencyCorpus,
        limit: usize,
    ) -> Vec<&'a str> {
        let chars: BTreeSet<&str> = corpus
            .iter()
            .filter(|r| table.get(&r.toneless, &r.character) == Some(0))
            .map(|r| r.character.as_str())
            .collect();
        chars.into_iter().take(limit).collect()
    }

    /// Log the regional usage of [`unweighted_characters`]. Never fails;
    /// lookups that fail are skipped. Returns the number of characters sent
    /// to the classifier.
    pub fn report_unweighted(
        config: &JyutpingConfig,
        table: &Table,
        corpus: &FrequencyCorpus,
        limit: usize,
    ) -> usize {
        let Some(classifier) = RegionClassifier::from_config(config) else {
            return 0;
        };
        let chars = unweighted_characters(table, corpus, limit);
        for ch in &chars {
            if let Some(usage) = classifier.classify(ch) {
                info!("no frequency for {}: regional usage {:?}", ch, usage);
            }
        }
        chars.len()
    }
}

#[cfg(all(test, feature = "cloud"))]
mod tests {
    use super::classify::{report_unweighted, unweighted_characters};
    use super::*;
    use libjyutping::{FrequencyCorpus, FrequencyRecord};
    use libtable_core::Table;
    use std::fs;

    // nothing listens on the discard port
    const DEAD_URL: &str = "http://127.0.0.1:9/usage";

    fn record(toneless: &str, ch: &str) -> FrequencyRecord {
        FrequencyRecord {
            toneless: toneless.into(),
            character: ch.into(),
            jyutping: format!("{toneless}1"),
            tone_letters: format!("{toneless}v"),
            cantonese: toneless.into(),
            frequency: 0,
        }
    }

    fn fixture() -> (Table, FrequencyCorpus) {
        let mut table = Table::new();
        table.insert("si", "詩", 0);
        table.insert("si", "時", 42);
        table.insert("gwok", "國", 0);
        table.insert("jat", "一", 0);
        let mut corpus = FrequencyCorpus::new();
        for (k, c) in [("si", "詩"), ("si", "時"), ("gwok", "國"), ("jat", "一"), ("zou", "做")] {
            corpus.insert(record(k, c));
        }
        (table, corpus)
    }

    #[test]
    fn only_zero_weight_entries_are_selected() {
        let (table, corpus) = fixture();
        // 時 has a weight, 做 is not in the table
        assert_eq!(unweighted_characters(&table, &corpus, 100), vec!["一", "國", "詩"]);
    }

    #[test]
    fn limit_caps_the_selection() {
        let (table, corpus) = fixture();
        assert_eq!(unweighted_characters(&table, &corpus, 2), vec!["一", "國"]);
        assert!(unweighted_characters(&table, &corpus, 0).is_empty());
    }

    #[test]
    fn unreachable_service_does_not_fail() {
        let (table, corpus) = fixture();
        let mut config = JyutpingConfig::default();
        assert_eq!(report_unweighted(&config, &table, &corpus, 100), 0);

        config.classify_url = Some(DEAD_URL.to_string());
        config.classify_timeout_ms = 200;
        assert_eq!(report_unweighted(&config, &table, &corpus, 2), 2);
    }

    #[test]
    fn run_writes_output_with_unreachable_classifier() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jyutping.txt");
        let output = dir.path().join("jyutping.txt.new");
        let readings = dir.path().join("Unihan_Readings.txt");
        let freqs = dir.path().join("cantonese.txt");
        fs::write(&input, "BEGIN_TABLE\nsi\t時\t0\ngwok\t國\t0\nEND_TABLE\n").unwrap();
        fs::write(&freqs, "BEGIN_TABLE\nsi\t時\t42\nEND_TABLE\n").unwrap();
        fs::write(&readings, "U+6642\tkCantonese\tsi4\nU+570B\tkCantonese\tgwok3\n").unwrap();

        let args = Args::parse_from([
            "improve_jyutping",
            "-i", input.to_str().unwrap(),
            "-o", output.to_str().unwrap(),
            "-u", readings.to_str().unwrap(),
            "-f", freqs.to_str().unwrap(),
            "--classify-url", DEAD_URL,
            "--classify-limit", "1",
        ]);
        let stats = run(&args).unwrap();
        assert_eq!(stats.backfilled, 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "BEGIN_TABLE\ngwok\t國\t0\ngwokq\t國\t0\nsi\t時\t42\nsivv\t時\t42\nEND_TABLE\n"
        );
    }
}
