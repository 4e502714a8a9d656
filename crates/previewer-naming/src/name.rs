use previewer_config::constants::{APP_NAME_HASH_LEN, APP_NAME_MAX_LEN};
use sha2::{Digest, Sha256};

/// Generates a unique app name from the repository owner, repository and ref.
///
/// The normalized `owner-repo-ref` string is hashed before truncation, so two
/// identities sharing a long common prefix still get distinct names.
pub fn generate_app_name(owner: &str, repo: &str, git_ref: &str) -> String {
    let base = normalize(&format!("{owner}-{repo}-{git_ref}"));

    let digest = hex::encode(Sha256::digest(base.as_bytes()));
    let suffix = format!("-{}", &digest[..APP_NAME_HASH_LEN]);

    let limit = APP_NAME_MAX_LEN - suffix.len();
    format!("{}{}", truncate(&base, limit), suffix)
}

fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|&c| c != ':')
        .map(|c| match c {
            '/' | '_' | '.' => '-',
            c => c,
        })
        .collect()
}

fn truncate(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
