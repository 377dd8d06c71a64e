use serial_test::serial;
use spinline::{Spinner, SpinnerConfig, SpinnerError};
use std::env;
use std::io::Write;
use std::time::Duration;

const ENV_KEYS: [&str; 4] = [
    "SPINLINE_STATUS",
    "SPINLINE_FRAMES",
    "SPINLINE_INTERVAL_MS",
    "SPINLINE_EMPTY_FRAME",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial]
    fn test_load_without_sources_uses_defaults() {
        clear_env();
        let config = SpinnerConfig::load(None).unwrap();
        assert_eq!(config, SpinnerConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        clear_env();
        let file = write_config(
            "status = \"Loading \"\nframes = [\"a\", \"b\"]\ninterval_ms = 120\n",
        );

        let config = SpinnerConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.status, "Loading ");
        assert_eq!(config.frames, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(config.interval(), Duration::from_millis(120));
        // Not in the file, so the default survives
        assert_eq!(config.empty_frame, " ");
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        clear_env();
        let file = write_config("status = \"From file \"\ninterval_ms = 120\n");
        env::set_var("SPINLINE_STATUS", "From env");
        env::set_var("SPINLINE_FRAMES", "a,b,c");
        env::set_var("SPINLINE_INTERVAL_MS", "50");

        let config = SpinnerConfig::load(Some(file.path()));
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.status, "From env");
        assert_eq!(config.frames, vec!["a", "b", "c"]);
        assert_eq!(config.interval_ms, 50);
    }

    #[test]
    #[serial]
    fn test_missing_file_is_an_error() {
        clear_env();
        let result = SpinnerConfig::load(Some(std::path::Path::new(
            "/nonexistent/spinline/config.toml",
        )));
        assert!(matches!(result, Err(SpinnerError::Config(_))));
    }

    #[test]
    fn test_spinner_from_config() {
        let config = SpinnerConfig {
            status: "Syncing ".to_string(),
            frames: vec!["a".to_string(), "b".to_string()],
            interval_ms: 75,
            empty_frame: "!".to_string(),
        };

        let spinner = Spinner::from_config(&config);

        assert_eq!(spinner.status(), "Syncing ");
        assert_eq!(spinner.frames(), config.frames);
        assert_eq!(spinner.interval(), Duration::from_millis(75));
        assert_eq!(spinner.empty_frame(), "!");
        assert!(!spinner.is_active());
    }
}
