// SPDX-License-Identifier: MPL-2.0
use iced_alert::config::{self, Config, HexColor, MAX_DISMISS_DURATION_MS};
use iced_alert::ui::alert::Alert;
use iced_alert::ui::design_tokens::palette;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn saved_settings_reach_new_alerts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.appearance.separator_color = Some(HexColor(palette::ERROR_500));
    settings.animation.dismiss_duration_ms = Some(350);
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let alert = Alert::default().with_config(&loaded);
    assert_eq!(alert.dismiss_duration(), Duration::from_millis(350));
    let separator = alert.separator_color();
    assert!((separator.r - palette::ERROR_500.r).abs() < 0.01);
    assert!((separator.g - palette::ERROR_500.g).abs() < 0.01);
}

#[test]
fn out_of_range_duration_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[animation]\ndismiss_duration_ms = 60000\n",
    )
    .expect("Failed to write config file");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(
        loaded.dismiss_duration(),
        Duration::from_millis(MAX_DISMISS_DURATION_MS)
    );
}

#[test]
fn broken_file_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[appearance]\nseparator_color = \"not a color\"\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
