use indexmap::IndexMap;

use crate::algo::Algorithm;
use crate::combine::expand_splitters;

/// First candidate whose digest contains the target hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
  pub candidate: String,
  pub digest: String,
  pub algorithm: String,
}

/// Every digest of one candidate string, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
  pub candidate: String,
  pub digests: IndexMap<String, String>,
}

/// Joins `combination` with `splitter` and hashes the result under every
/// algorithm in the registry. Keys are algorithm names, values lowercase hex.
pub fn compute_digests(
  combination: &[String],
  splitter: &str,
  algorithms: &[Box<dyn Algorithm>],
) -> IndexMap<String, String> {
  let candidate = combination.join(splitter);

  let mut digests = IndexMap::new();
  for algo in algorithms {
    let digest = hex::encode(algo.hash(candidate.as_bytes()));
    digests.insert(algo.name().to_string(), digest);
  }

  digests
}

/// Walks the full (text combination, splitter combination, algorithm) cross
/// product and returns the first digest that contains `target_hash` as a
/// substring, or `None` once the search space is exhausted.
///
/// The substring comparison is deliberate: it lets a truncated or partially
/// known hash still find its scheme.
pub fn find_probable_values(
  text_combinations: &[Vec<String>],
  splitters: &[String],
  target_hash: &str,
  combine_splitters: bool,
  algorithms: &[Box<dyn Algorithm>],
) -> Option<Match> {
  let splitter_combinations = expand_splitters(splitters, combine_splitters);

  for combination in text_combinations {
    for split_combo in &splitter_combinations {
      let splitter = split_combo.concat();

      for (algorithm, digest) in compute_digests(combination, &splitter, algorithms) {
        if digest.contains(target_hash) {
          return Some(Match {
            candidate: combination.join(&splitter),
            digest,
            algorithm,
          });
        }
      }
    }
  }

  None
}

/// Computes every digest for every (text combination, splitter combination)
/// pair, in the same enumeration order as the search. No early exit.
pub fn hash_all(
  text_combinations: &[Vec<String>],
  splitters: &[String],
  combine_splitters: bool,
  algorithms: &[Box<dyn Algorithm>],
) -> Vec<DigestRecord> {
  let splitter_combinations = expand_splitters(splitters, combine_splitters);

  let mut records = Vec::new();
  for combination in text_combinations {
    for split_combo in &splitter_combinations {
      let splitter = split_combo.concat();

      records.push(DigestRecord {
        candidate: combination.join(&splitter),
        digests: compute_digests(combination, &splitter, algorithms),
      });
    }
  }

  records
}
