/// Similarity ratio between two strings as an integer percentage.
///
/// The ratio is the normalised indel distance: `2 * lcs / (len(a) + len(b))`, where `lcs` is
/// the length of the longest common subsequence, scaled to `0..=100` and rounded half to even.
/// Identical strings score 100; an empty input scores 0.
pub fn ratio(a: &str, b: &str) -> u8 {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  let total = a.len() + b.len();
  if a.is_empty() || b.is_empty() {
    return 0;
  }

  let lcs = longest_common_subsequence(&a, &b);
  ((200 * lcs) as f64 / total as f64).round_ties_even() as u8
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
  let mut previous = vec![0usize; b.len() + 1];
  let mut current = vec![0usize; b.len() + 1];

  for &left in a {
    for (j, &right) in b.iter().enumerate() {
      current[j + 1] = if left == right {
        previous[j] + 1
      } else {
        current[j].max(previous[j + 1])
      };
    }
    std::mem::swap(&mut previous, &mut current);
  }

  previous[b.len()]
}

#[cfg(test)]
mod tests {
  use super::ratio;

  #[test]
  fn identical_strings_score_full_marks() {
    assert_eq!(ratio("ashe_q.png", "ashe_q.png"), 100);
  }

  #[test]
  fn empty_inputs_score_zero() {
    assert_eq!(ratio("", "ashe_q.png"), 0);
    assert_eq!(ratio("ashe_q.png", ""), 0);
  }

  #[test]
  fn disjoint_strings_score_zero() {
    assert_eq!(ratio("abc", "xyz"), 0);
  }

  #[test]
  fn partial_overlap_is_proportional() {
    // lcs("abcd", "abxd") = 3 -> 6 / 8
    assert_eq!(ratio("abcd", "abxd"), 75);
    // lcs("ahri_q.png", "ahri_w.png") = 9 -> 18 / 20
    assert_eq!(ratio("ahri_q.png", "ahri_w.png"), 90);
  }

  #[test]
  fn halfway_ratios_round_to_even() {
    // lcs = 5 -> 10 / 16 = 62.5
    assert_eq!(ratio("abcdefgh", "abcdexyz"), 62);
    // lcs = 2 -> 4 / 5 = 80.0
    assert_eq!(ratio("ab", "abc"), 80);
  }

  #[test]
  fn ratio_is_symmetric() {
    assert_eq!(ratio("gnar_e.png", "gnarbig_e.png"), ratio("gnarbig_e.png", "gnar_e.png"));
  }
}
