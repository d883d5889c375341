//! Delimited string merge
//!
//! Strings are treated as delimiter-separated token lists. Target tokens are
//! kept exactly as written; source tokens are trimmed before the
//! case-sensitive membership check and appended trimmed.

use tracing::debug;

use super::policy::MergePolicy;

/// Default token delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Merge `source` into `target` under `policy`
pub fn merge_strings(target: &str, source: &str, policy: MergePolicy, delimiter: char) -> String {
    match policy {
        MergePolicy::Clobber => source.to_string(),
        MergePolicy::Merge => {
            let mut tokens: Vec<&str> = target.split(delimiter).collect();

            for token in source.split(delimiter) {
                let token = token.trim();
                if tokens.contains(&token) {
                    continue;
                }
                debug!(token, "appending string token");
                tokens.push(token);
            }

            let separator = delimiter.to_string();
            tokens.join(separator.as_str())
        }
    }
}
