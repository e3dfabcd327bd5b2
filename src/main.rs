use gpui::*;
use gpui_component::theme::{Theme as GpuiComponentTheme, ThemeMode as GpuiThemeMode};
use gpui_component::Root;

use pomatez_titlebar::assets::Assets;
use pomatez_titlebar::settings::{self, AppSettings};
use pomatez_titlebar::theme::{theme, AppTheme, GlobalTheme};
use pomatez_titlebar::{Titlebar, TitlebarProps};

/// Main window: the titlebar over an empty timer surface.
struct TimerWindow {
    titlebar: Entity<Titlebar>,
}

impl TimerWindow {
    fn new(settings: AppSettings, cx: &mut Context<Self>) -> Self {
        let titlebar = cx.new(|_cx| {
            Titlebar::new(
                TitlebarProps::new()
                    .app_state(settings.app_state)
                    .app_version(env!("CARGO_PKG_VERSION"))
                    .on_minimize(|window, _cx| window.minimize_window())
                    .on_close(move |_window, cx| {
                        if let Err(e) = settings::save_settings(&settings) {
                            log::warn!("Failed to save settings: {}", e);
                        }
                        cx.quit();
                    }),
            )
        });
        Self { titlebar }
    }
}

impl Render for TimerWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme(cx);
        let state = self.titlebar.read(cx).props().app_state;

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(t.bg))
            .child(Titlebar::cached_view(&self.titlebar))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(rgb(t.gray11))
                    .child(state.display_name()),
            )
    }
}

fn main() {
    env_logger::init();

    Application::new().with_assets(Assets).run(|cx: &mut App| {
        let settings = settings::load_settings();
        let theme_entity = cx.new(|_cx| AppTheme::new(settings.theme_mode, false));
        cx.set_global(GlobalTheme(theme_entity.clone()));

        let result = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Pomatez".into()),
                    appears_transparent: true,
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    size(px(360.0), px(480.0)),
                    cx,
                ))),
                is_resizable: false,
                window_decorations: Some(WindowDecorations::Client),
                app_id: Some("pomatez".to_string()),
                ..Default::default()
            },
            |window, cx| {
                let is_dark = matches!(
                    window.appearance(),
                    WindowAppearance::Dark | WindowAppearance::VibrantDark
                );
                theme_entity.update(cx, |theme, _cx| {
                    theme.set_system_appearance(is_dark);
                });

                gpui_component::init(cx);
                let gpui_mode = if is_dark { GpuiThemeMode::Dark } else { GpuiThemeMode::Light };
                GpuiComponentTheme::change(gpui_mode, Some(window), cx);

                let theme_for_observer = theme_entity.clone();
                window
                    .observe_window_appearance(move |window: &mut Window, cx: &mut App| {
                        let is_dark = matches!(
                            window.appearance(),
                            WindowAppearance::Dark | WindowAppearance::VibrantDark
                        );
                        theme_for_observer.update(cx, |theme, cx| {
                            theme.set_system_appearance(is_dark);
                            cx.notify();
                        });
                        let gpui_mode = if is_dark { GpuiThemeMode::Dark } else { GpuiThemeMode::Light };
                        GpuiComponentTheme::change(gpui_mode, Some(window), cx);
                    })
                    .detach();

                let timer_window = cx.new(|cx| TimerWindow::new(settings, cx));
                cx.new(|cx| Root::new(timer_window, window, cx))
            },
        );

        if let Err(e) = result {
            log::error!("Failed to open window: {}", e);
            cx.quit();
        }
    });
}
