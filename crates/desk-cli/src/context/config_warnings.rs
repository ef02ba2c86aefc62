use desk_config::DeskConfig;

/// Config sections and the example key shown when their env vars look mistyped.
const SECTIONS: [(&str, &str); 3] = [
    ("API", "DESKHUB_API__BASE_URL"),
    ("CONFIGURATOR", "DESKHUB_CONFIGURATOR__PURCHASE_MIN_SCORE"),
    ("GENERAL", "DESKHUB_GENERAL__DEFAULT_LIMIT"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DeskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = DeskConfig::default();

    let mut warnings = Vec::new();
    for (section, example) in SECTIONS {
        let prefix = format!("DESKHUB_{section}");
        let unchanged = match section {
            "API" => config.api.base_url == defaults.api.base_url,
            "CONFIGURATOR" => {
                config.configurator.purchase_min_score == defaults.configurator.purchase_min_score
            }
            _ => config.general.default_limit == defaults.general.default_limit,
        };
        if unchanged && has_single_underscore_key(&env_keys, &prefix) {
            warnings.push(format!(
                "{section} config appears default while {prefix}_* env vars exist. Use double underscores (example: {example})."
            ));
        }
    }
    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let single = format!("{prefix}_");
    let double = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
