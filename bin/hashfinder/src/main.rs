use clap::Parser;
use colored::Colorize;

use hashcomb::{algorithms, find_probable_values, generate_combinations, hash_all, DigestRecord};

const BANNER: &str = r"
  _    _           _     ______ _           _
 | |  | |         | |   |  ____(_)         | |
 | |__| | __ _ ___| |__ | |__   _ _ __   __| | ___ _ __
 |  __  |/ _` / __| '_ \|  __| | | '_ \ / _` |/ _ \ '__|
 | |  | | (_| \__ \ | | | |    | | | | | (_| |  __/ |
 |_|  |_|\__,_|___/_| |_|_|    |_|_| |_|\__,_|\___|_|
";

const DEFAULT_SPLITTERS: [&str; 7] = ["-", ":", "|", "&", ",", " ", ""];

/// Calculates all possible hashes for given text combinations. Use it for
/// finding weak tokens!
#[derive(Parser)]
#[clap(version)]
pub struct Hashfinder {
  /// Comma-separated list of texts to hash.
  #[clap(long)]
  text: String,
  /// Target hash to compare generated hashes with.
  #[clap(long)]
  hash: Option<String>,
  /// Comma-separated list of splitters. Default: '-', ':', '|', '&', ',', ' ' and concatenation.
  #[clap(long)]
  splitter: Option<String>,
  /// Combine splitters.
  #[clap(long)]
  combine: bool,
  /// Print all possible hashes for the given text combinations to the terminal.
  #[clap(long)]
  print: bool,
  /// Do not print the banner.
  #[clap(long)]
  silent: bool,
}

impl Hashfinder {
  pub fn execute(&self) -> anyhow::Result<()> {
    if !self.silent {
      println!("{}", BANNER);
    }

    let texts = split_list(&self.text);
    let splitters = match &self.splitter {
      None => DEFAULT_SPLITTERS
        .iter()
        .map(|splitter| splitter.to_string())
        .collect(),
      Some(splitter) => {
        let splitters = split_list(splitter);
        println!("{} {:?}", "[*] Using provided splitters:".bold(), splitters);
        splitters
      }
    };

    let text_combinations = generate_combinations(&texts);
    let algorithms = algorithms();

    if self.print {
      for record in hash_all(&text_combinations, &splitters, self.combine, &algorithms) {
        print_record(&record);
      }

      return Ok(());
    }

    let target = match &self.hash {
      None => {
        println!(
          "{} Please provide the target hash for comparison.",
          "[!]".yellow()
        );
        return Ok(());
      }
      Some(target) => target,
    };

    match find_probable_values(
      &text_combinations,
      &splitters,
      target,
      self.combine,
      &algorithms,
    ) {
      None => println!("{}", "[!] No matches found.".bright_red()),
      Some(found) => {
        println!("{}", "[*] Match found:".bright_green());
        println!(
          "\t{}",
          format!("{} : {} : {}", found.candidate, found.digest, found.algorithm).bright_green()
        );
      }
    }

    Ok(())
  }
}

fn split_list(list: &str) -> Vec<String> {
  list.split(',').map(|entry| entry.trim().to_string()).collect()
}

fn print_record(record: &DigestRecord) {
  println!();
  println!("Hashtable for {}:", record.candidate.bold());
  println!();
  println!("{:<17} | {}", "Hash".bold(), "Digest".bold());
  println!("------------------+---------------------------------------------------------------------------------------------------------------------------------");

  for (name, digest) in &record.digests {
    println!("{0:<17} | {1}", name.bright_green(), digest);
  }

  println!();
}

fn main() -> anyhow::Result<()> {
  Hashfinder::parse().execute()
}
