use previewer_config::constants::DNS_LABEL_MAX_LEN;

/// Turns a raw branch name into a single DNS label.
pub fn sanitize_branch_for_domain(branch: &str) -> String {
    let mut safe: String = branch
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '_' | '.' => '-',
            c => c,
        })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    safe.truncate(DNS_LABEL_MAX_LEN);
    safe.trim_matches('-').to_string()
}
