/// Enumerates every combination with replacement of `items`, taken
/// `items.len()` at a time.
///
/// Combinations are produced as non-decreasing index sequences in
/// lexicographic order, so two selections of the same multiset only ever show
/// up in one element order. The membership check on top of that only matters
/// when `items` itself contains repeated values; those collapse into a single
/// entry.
pub fn generate_combinations<T: Clone + PartialEq>(items: &[T]) -> Vec<Vec<T>> {
  let mut results: Vec<Vec<T>> = Vec::new();

  for indices in index_combinations(items.len()) {
    let combination: Vec<T> = indices.iter().map(|&index| items[index].clone()).collect();
    if !results.contains(&combination) {
      results.push(combination);
    }
  }

  results
}

/// All non-decreasing sequences of length `len` over `0..len`, in
/// lexicographic order. `len == 0` yields the single empty sequence.
fn index_combinations(len: usize) -> Vec<Vec<usize>> {
  let mut results = Vec::new();

  if len == 0 {
    results.push(Vec::new());
    return results;
  }

  let mut indices = vec![0; len];
  loop {
    results.push(indices.clone());

    // rightmost position that can still be incremented
    let mut position = len;
    while position > 0 && indices[position - 1] + 1 >= len {
      position -= 1;
    }

    if position == 0 {
      return results;
    }

    let next = indices[position - 1] + 1;
    for slot in indices.iter_mut().skip(position - 1) {
      *slot = next;
    }
  }
}

/// Expands the splitter list into the splitter combinations the search
/// iterates over.
///
/// Without `combine` every splitter is tried on its own, as a combination of
/// length 1. With `combine` the full multiset enumeration runs over the
/// splitter list; the search later concatenates each combination into one
/// compound splitter string.
pub fn expand_splitters(splitters: &[String], combine: bool) -> Vec<Vec<String>> {
  if combine {
    generate_combinations(splitters)
  } else {
    splitters
      .iter()
      .map(|splitter| vec![splitter.clone()])
      .collect()
  }
}
