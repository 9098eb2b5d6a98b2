use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug)]
pub struct Settings {
    /// Overrides the embedded seed dataset. The dataset is still fixed for
    /// the lifetime of the process.
    pub seed_path: Option<PathBuf>,
    pub ui_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_path: None,
            ui_scale: 1.0,
        }
    }
}

/// Defaults, then `momfog.toml` in the working directory, then `APP__*`
/// environment variables. Last writer wins; malformed values are ignored.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("momfog.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("APP__SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Ok(v) = std::env::var("APP__UI_SCALE") {
        if let Ok(parsed) = v.parse::<f32>() {
            settings.ui_scale = parsed;
        }
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("seed_path") {
            settings.seed_path = Some(PathBuf::from(v));
        }
        if let Some(v) = file_cfg.get("ui_scale") {
            if let Ok(parsed) = v.parse::<f32>() {
                settings.ui_scale = parsed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_embedded_seed_and_unscaled_text() {
        let settings = Settings::default();
        assert!(settings.seed_path.is_none());
        assert_eq!(settings.ui_scale, 1.0);
    }

    #[test]
    fn file_overrides_replace_defaults() {
        let mut settings = Settings::default();
        apply_file_overrides(
            &mut settings,
            "seed_path = \"./demo-seed.json\"\nui_scale = \"1.25\"\n",
        );
        assert_eq!(settings.seed_path, Some(PathBuf::from("./demo-seed.json")));
        assert_eq!(settings.ui_scale, 1.25);
    }

    #[test]
    fn malformed_values_are_ignored() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "ui_scale = \"not a number\"\n");
        assert_eq!(settings.ui_scale, 1.0);

        apply_file_overrides(&mut settings, "this is not toml at all [[");
        assert!(settings.seed_path.is_none());
    }
}
