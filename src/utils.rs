use crate::config::SearchConfig;
use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:?&=#%*"<>|]"#).expect("static regex must compile"));

/// Replace characters that are not allowed in file names
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}

/// Name of the results file for a run, derived from its search filters.
///
/// `linkedin_jobs_{keyword}_{regions}_{experience}_{workplace}_{recency}.csv`,
/// with spaces in the keyword turned into underscores, spaces in regions
/// removed, and `all` standing in for an empty filter list.
pub fn results_file_name(config: &SearchConfig) -> String {
    let keyword = config.keyword.trim().replace(' ', "_");
    let regions = config
        .regions
        .iter()
        .map(|r| r.replace(' ', ""))
        .collect::<Vec<_>>()
        .join("_");
    let experience = join_or_all(config.experience_levels.iter().map(|e| e.code()));
    let workplace = join_or_all(config.workplace_types.iter().map(|w| w.code()));

    sanitize_filename(&format!(
        "linkedin_jobs_{}_{}_{}_{}_{}.csv",
        keyword, regions, experience, workplace, config.date_posted
    ))
}

fn join_or_all(codes: impl Iterator<Item = u8>) -> String {
    let codes: Vec<String> = codes.map(|c| c.to_string()).collect();
    if codes.is_empty() {
        "all".to_string()
    } else {
        codes.join("_")
    }
}
