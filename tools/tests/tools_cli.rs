// Runs each tool the way its binary does, against files in a temp dir.

use clap::Parser;
use std::fs;
use std::path::Path;
use table_tools::{cangjie, compat, jyutping};

fn p(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn cangjie_demotes_and_writes_sorted_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cangjie5.txt");
    let output = dir.path().join("cangjie5.txt.new");
    fs::write(
        &input,
        "### header\nBEGIN_TABLE\nxab\tX\t1000\nab\tX\t1000\nabc\tX\t1000\nab\tY\t1000\nEND_TABLE\nfooter\n",
    )
    .unwrap();

    let args = cangjie::Args::parse_from(["improve_cangjie5", "-i", p(&input), "-o", p(&output)]);
    let summary = cangjie::run(&args).unwrap();
    assert_eq!(summary.entries, 4);
    assert_eq!(summary.demoted, 2);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "### header\nBEGIN_TABLE\nab\tY\t1000\nab\tX\t900\nabc\tX\t900\nxab\tX\t1000\nEND_TABLE\nfooter\n"
    );
}

#[test]
fn cangjie_twice_gives_same_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let once = dir.path().join("once.txt");
    let twice = dir.path().join("twice.txt");
    fs::write(&input, "BEGIN_TABLE\nxab\tX\t1000\nab\tX\t1000\nEND_TABLE\n").unwrap();

    cangjie::run(&cangjie::Args::parse_from(["t", "-i", p(&input), "-o", p(&once)])).unwrap();
    let summary =
        cangjie::run(&cangjie::Args::parse_from(["t", "-i", p(&once), "-o", p(&twice)])).unwrap();
    assert_eq!(summary.demoted, 0);
    assert_eq!(fs::read_to_string(&once).unwrap(), fs::read_to_string(&twice).unwrap());
}

#[test]
fn cangjie_rule_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    let config = dir.path().join("rule.toml");
    fs::write(&input, "BEGIN_TABLE\nzab\tX\t10\nab\tX\t10\nEND_TABLE\n").unwrap();
    fs::write(&config, "marker = \"z\"\ndemoted_weight = 1\n").unwrap();

    let args = cangjie::Args::parse_from(["t", "-i", p(&input), "-o", p(&output), "-c", p(&config)]);
    cangjie::run(&args).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "BEGIN_TABLE\nab\tX\t1\nzab\tX\t10\nEND_TABLE\n"
    );
}

#[test]
fn malformed_table_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "BEGIN_TABLE\nxab\tX\tmany\nEND_TABLE\n").unwrap();

    let args = cangjie::Args::parse_from(["t", "-i", p(&input), "-o", p(&output)]);
    assert!(cangjie::run(&args).is_err());
    assert!(!output.exists());
}

fn write_jyutping_inputs(dir: &Path, unihan: &str) -> (String, String, String, String) {
    let input = dir.join("jyutping.txt");
    let output = dir.join("jyutping.txt.new");
    let readings = dir.join("Unihan_Readings.txt");
    let freqs = dir.join("cantonese.txt");
    fs::write(&input, "NAME = jyutping\nBEGIN_TABLE\nsi\t時\t0\nEND_TABLE\n").unwrap();
    fs::write(&freqs, "BEGIN_TABLE\nsi\t時\t42\nEND_TABLE\n").unwrap();
    fs::write(&readings, unihan).unwrap();
    (
        p(&input).to_string(),
        p(&output).to_string(),
        p(&readings).to_string(),
        p(&freqs).to_string(),
    )
}

#[test]
fn jyutping_merge_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let (input, output, readings, freqs) =
        write_jyutping_inputs(dir.path(), "U+6642\tkCantonese\tsi4\n");

    let args = jyutping::Args::parse_from([
        "improve_jyutping", "-i", &input, "-o", &output, "-u", &readings, "-f", &freqs,
    ]);
    let stats = jyutping::run(&args).unwrap();
    assert_eq!(stats.backfilled, 1);
    assert_eq!(stats.added, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "NAME = jyutping\nBEGIN_TABLE\nsi\t時\t42\nsivv\t時\t42\nEND_TABLE\n"
    );
}

#[test]
fn jyutping_unrecognized_syllable_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let (input, output, readings, freqs) = write_jyutping_inputs(
        dir.path(),
        "U+6642\tkCantonese\tsi4\nU+0041\tkCantonese\tqx1\n",
    );

    let args = jyutping::Args::parse_from([
        "improve_jyutping", "-i", &input, "-o", &output, "-u", &readings, "-f", &freqs,
    ]);
    let err = jyutping::run(&args).unwrap_err();
    assert!(format!("{err:#}").contains("unrecognized syllable"));
    assert!(!Path::new(&output).exists());
}

#[test]
fn jyutping_missing_frequency_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (input, output, readings, _) =
        write_jyutping_inputs(dir.path(), "U+6642\tkCantonese\tsi4\n");
    let missing = dir.path().join("nope.txt");

    let args = jyutping::Args::parse_from([
        "improve_jyutping", "-i", &input, "-o", &output, "-u", &readings, "-f", p(&missing),
    ]);
    assert!(jyutping::run(&args).is_err());
    assert!(!Path::new(&output).exists());
}

#[test]
fn compat_filter_drops_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wubi.txt");
    let output = dir.path().join("wubi.txt.new");
    fs::write(&input, "head\nBEGIN_TABLE\naaaa\t\u{F900}\t1\naaaa\t工\t1\nEND_TABLE\n").unwrap();

    let args = compat::Args::parse_from(["t", "-i", p(&input), "-o", p(&output), "-d"]);
    assert!(args.debug);
    assert_eq!(compat::run(&args).unwrap(), 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "head\nBEGIN_TABLE\naaaa\t工\t1\nEND_TABLE\n"
    );
}

#[test]
fn default_file_names() {
    let c = cangjie::Args::parse_from(["t"]);
    assert_eq!(c.input, Path::new("cangjie5.txt"));
    assert_eq!(c.output, Path::new("cangjie5.txt.new"));
    let j = jyutping::Args::parse_from(["t"]);
    assert_eq!(j.readings, Path::new("Unihan_Readings.txt"));
    assert_eq!(j.frequencies, Path::new("cantonese.txt"));
    let w = compat::Args::parse_from(["t", "--inputfilename", "x"]);
    assert_eq!(w.input, Path::new("x"));
    assert_eq!(w.output, Path::new("wubi-haifeng86.UTF-8.new"));
}
