use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WellcheckConfig {
    pub profile: Option<ProfileConfig>,
    pub store: Option<StoreConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatSetting>,
}

impl WellcheckConfig {
    pub fn user_id(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|profile| profile.user_id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    pub fn store_path(&self) -> Option<&str> {
        self.store.as_ref().and_then(|store| store.path.as_deref())
    }

    pub fn output_format(&self) -> Option<FormatSetting> {
        self.output.as_ref().and_then(|output| output.format)
    }
}
