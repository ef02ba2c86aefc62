/// Compute effective limit with precedence: global flag -> config default.
///
/// Zero is treated as unset so a stray `--limit 0` does not return empty pages.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> u32 {
    global.filter(|limit| *limit > 0).unwrap_or(fallback)
}
