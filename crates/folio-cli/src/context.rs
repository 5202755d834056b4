use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use folio_config::FolioConfig;
use folio_core::catalog::Catalog;
use folio_search::clock::FixedClock;
use folio_search::page::ResearchPage;

use crate::cli::GlobalFlags;

/// Everything a command needs to mount a page session.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub catalog: Arc<Catalog>,
    /// Fixed "now" for date-range filters, `None` for the system clock.
    pub reference_time: Option<DateTime<Utc>>,
}

impl AppContext {
    /// Load the catalog once and resolve the clock.
    ///
    /// `--catalog` wins over `catalog.path`; with neither, the built-in sample
    /// library is used.
    pub fn init(config: &FolioConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = flags.catalog.clone().or_else(|| config.catalog.path());
        let catalog = match path.as_deref() {
            Some(path) => load_catalog(path)?,
            None => Catalog::sample(),
        };
        let reference_time = config.general.reference_time()?;

        let source = path
            .as_deref()
            .map_or_else(|| String::from("sample"), |p| p.display().to_string());
        tracing::debug!(
            items = catalog.len(),
            source = %source,
            fixed_clock = reference_time.is_some(),
            "catalog loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            reference_time,
        })
    }

    /// Mount a fresh page session over the shared catalog.
    #[must_use]
    pub fn mount_page(&self) -> ResearchPage {
        let catalog = Arc::clone(&self.catalog);
        match self.reference_time {
            Some(now) => ResearchPage::mount(catalog, Box::new(FixedClock(now))),
            None => ResearchPage::with_system_clock(catalog),
        }
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::load(path).with_context(|| format!("failed to load catalog {}", path.display()))
}

/// Warn about `FOLIO_*` variables that look like single-underscore typos.
pub fn warn_unconfigured(config: &FolioConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FolioConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.catalog.is_configured() && keys.iter().any(|key| key == "FOLIO_CATALOG_PATH") {
        warnings.push(
            "FOLIO_CATALOG_PATH is set but ignored. Use double underscores: FOLIO_CATALOG__PATH."
                .to_string(),
        );
    }
    if config.general.reference_time.is_empty()
        && keys.iter().any(|key| key == "FOLIO_GENERAL_REFERENCE_TIME")
    {
        warnings.push(
            "FOLIO_GENERAL_REFERENCE_TIME is set but ignored. Use double underscores: FOLIO_GENERAL__REFERENCE_TIME."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(catalog: Option<&Path>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            catalog: catalog.map(Path::to_path_buf),
        }
    }

    #[test]
    fn defaults_to_sample_catalog_and_system_clock() {
        let ctx = AppContext::init(&FolioConfig::default(), &flags(None)).unwrap();
        assert_eq!(ctx.catalog.len(), 16);
        assert_eq!(ctx.reference_time, None);
    }

    #[test]
    fn catalog_flag_overrides_config_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let sample = Catalog::sample();
        let items = &sample.items()[..3];
        write!(file, "{}", serde_json::to_string(items).unwrap()).unwrap();

        let mut config = FolioConfig::default();
        config.catalog.path = "/definitely/not/here.json".into();

        let ctx = AppContext::init(&config, &flags(Some(file.path()))).unwrap();
        assert_eq!(ctx.catalog.len(), 3);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let error = AppContext::init(
            &FolioConfig::default(),
            &flags(Some(Path::new("/definitely/not/here.json"))),
        )
        .unwrap_err();
        assert!(format!("{error:#}").contains("failed to load catalog"));
    }

    #[test]
    fn reference_time_pins_the_page_clock() {
        let mut config = FolioConfig::default();
        config.general.reference_time = "2023-09-15T12:00:00Z".into();
        let ctx = AppContext::init(&config, &flags(None)).unwrap();
        assert_eq!(
            ctx.reference_time,
            Some(Utc.with_ymd_and_hms(2023, 9, 15, 12, 0, 0).unwrap())
        );
        assert_eq!(ctx.mount_page().results().count(), Some(16));
    }

    #[test]
    fn invalid_reference_time_fails_init() {
        let mut config = FolioConfig::default();
        config.general.reference_time = "yesterday".into();
        assert!(AppContext::init(&config, &flags(None)).is_err());
    }

    #[test]
    fn warns_on_single_underscore_keys() {
        let env = vec![
            ("FOLIO_CATALOG_PATH".to_string(), "/tmp/x.json".to_string()),
            ("HOME".to_string(), "/root".to_string()),
        ];
        let warnings = collect_unconfigured_warnings(&FolioConfig::default(), env);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("FOLIO_CATALOG__PATH"));
    }

    #[test]
    fn no_warning_when_configured() {
        let mut config = FolioConfig::default();
        config.catalog.path = "/tmp/x.json".into();
        let env = vec![("FOLIO_CATALOG_PATH".to_string(), String::new())];
        assert!(collect_unconfigured_warnings(&config, env).is_empty());
    }
}
