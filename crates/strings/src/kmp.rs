/// `pi[i]` is the length of the longest proper border of `s[..=i]`.
pub fn prefix_function(s: &[u8]) -> Vec<usize> {
    let mut pi = vec![0; s.len()];
    for i in 1..s.len() {
        let mut k = pi[i - 1];
        while k > 0 && s[i] != s[k] {
            k = pi[k - 1];
        }
        if s[i] == s[k] {
            k += 1;
        }
        pi[i] = k;
    }
    pi
}

/// Start positions of every (possibly overlapping) occurrence of `needle`.
pub fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() {
        return (0..=haystack.len()).collect();
    }

    let pi = prefix_function(needle);
    let mut found = Vec::new();
    let mut k = 0;
    for (i, &c) in haystack.iter().enumerate() {
        while k > 0 && c != needle[k] {
            k = pi[k - 1];
        }
        if c == needle[k] {
            k += 1;
        }
        if k == needle.len() {
            found.push(i + 1 - k);
            k = pi[k - 1];
        }
    }
    found
}

pub fn find_first(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let pi = prefix_function(needle);
    let mut k = 0;
    for (i, &c) in haystack.iter().enumerate() {
        while k > 0 && c != needle[k] {
            k = pi[k - 1];
        }
        if c == needle[k] {
            k += 1;
        }
        if k == needle.len() {
            return Some(i + 1 - k);
        }
    }
    None
}
