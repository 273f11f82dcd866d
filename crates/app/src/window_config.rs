//! Window configuration for the desktop app.

use app::APP_NAME;
use app::settings_file::WindowSettings;
use macroquad::window::Conf;

const MIN_WINDOW_SIDE: i32 = 320;

pub fn build_window_conf(settings: &WindowSettings) -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: settings.width.max(MIN_WINDOW_SIDE),
        window_height: settings.height.max(MIN_WINDOW_SIDE),
        high_dpi: settings.high_dpi,
        window_resizable: true,
        ..Default::default()
    }
}
