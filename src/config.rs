use eyre::{Result, WrapErr, ensure};
use rranker::{Curve, RankingOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title of the composite assessment when several are merged.
    pub title: Option<String>,
    #[serde(default)]
    pub ranking: RankingOptions,
    #[serde(rename = "assessment")]
    pub assessments: Vec<AssessmentConfig>,
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupConfig>,
    #[serde(skip)]
    base: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentConfig {
    pub title: String,
    pub results: PathBuf,
    /// Scale of the scores found in the results file, defaults to `scale`.
    pub source_scale: Option<f64>,
    pub scale: f64,
    #[serde(default = "default_precision")]
    pub precision: u32,
    pub curve: Option<Curve>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    pub members: PathBuf,
}

fn default_precision() -> u32 {
    rranker::model::DEFAULT_PRECISION
}

impl AssessmentConfig {
    pub fn source_scale(&self) -> f64 {
        self.source_scale.unwrap_or(self.scale)
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        let base = file_name.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, base)
            .wrap_err_with(|| format!("invalid configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str, base: PathBuf) -> Result<Config> {
        let mut config: Config = toml::from_str(content).wrap_err("cannot parse configuration")?;
        config.base = base;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.assessments.is_empty(),
            "at least one [[assessment]] section is required"
        );
        for a in &self.assessments {
            ensure!(
                a.scale > 0.0 && a.source_scale() > 0.0,
                "assessment {}: scales must be strictly positive",
                a.title
            );
        }
        Ok(())
    }

    /// Resolve a path relative to the configuration file directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base.join(path)
    }

    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            self.assessments
                .iter()
                .map(|a| a.title.as_str())
                .collect::<Vec<_>>()
                .join(" & ")
        })
    }
}
