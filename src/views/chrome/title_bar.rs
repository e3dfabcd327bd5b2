use super::content::{TitlebarContent, WindowControl};
use crate::props::{ControlHandler, ResolvedProps, TitlebarProps};
use crate::theme::{theme, ThemeColors};
use crate::ui::tokens::*;
use gpui::*;
use gpui::prelude::*;
use gpui_component::h_flex;
use gpui_component::tooltip::Tooltip;

/// Custom window titlebar: logo, name and version on the left, minimize
/// and close on the right. The whole bar drags the window.
pub struct Titlebar {
    props: ResolvedProps,
    content: TitlebarContent,
    render_count: usize,
}

impl Titlebar {
    pub fn new(props: TitlebarProps) -> Self {
        let props = props.resolve();
        Self {
            content: TitlebarContent::from_props(&props),
            props,
            render_count: 0,
        }
    }

    pub fn props(&self) -> &ResolvedProps {
        &self.props
    }

    pub fn content(&self) -> &TitlebarContent {
        &self.content
    }

    /// Number of render passes so far.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Replace the props. Returns false, and skips the re-render, when the
    /// resolved props equal the current ones.
    pub fn set_props(&mut self, props: TitlebarProps, cx: &mut Context<Self>) -> bool {
        let props = props.resolve();
        if props == self.props {
            log::trace!("Titlebar props unchanged, skipping render");
            return false;
        }
        self.content = TitlebarContent::from_props(&props);
        self.props = props;
        cx.notify();
        true
    }

    /// Wrap the titlebar as a cached view so parent redraws reuse its last
    /// frame. It only renders again after its own `notify`.
    pub fn cached_view(titlebar: &Entity<Self>) -> AnyView {
        AnyView::from(titlebar.clone())
            .cached(StyleRefinement::default().w_full().h(TITLEBAR_HEIGHT))
    }

    pub fn handler(&self, control: WindowControl) -> Option<ControlHandler> {
        match control {
            WindowControl::Minimize => self.props.on_minimize.clone(),
            WindowControl::Close => self.props.on_close.clone(),
        }
    }

    /// Run the callback bound to `control`, if any.
    pub fn activate(&self, control: WindowControl, window: &mut Window, cx: &mut App) {
        invoke(control, self.handler(control).as_ref(), window, cx);
    }

    fn render_brand(&self, t: &ThemeColors) -> impl IntoElement {
        let logo_alt = self.content.logo_alt;
        let brand_color = t.blue12;

        h_flex()
            .gap(SPACE_2)
            .child(
                img(self.content.logo_path)
                    .size(LOGO_SIZE)
                    .flex_shrink_0()
                    .with_fallback(move || {
                        div()
                            .text_size(TEXT_SUP)
                            .text_color(rgb(brand_color))
                            .child(logo_alt)
                            .into_any_element()
                    }),
            )
            .child(
                div()
                    .text_size(TEXT_SM)
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(t.blue12))
                    .child(self.content.app_name.clone()),
            )
            .when_some(self.content.version_label.clone(), |d, label| {
                d.child(
                    // Superscript badge
                    div()
                        .mt(SUP_OFFSET)
                        .text_size(TEXT_SUP)
                        .font_weight(FontWeight::BOLD)
                        .text_color(rgb(t.blue12))
                        .child(label),
                )
            })
    }

    fn render_control(&self, control: WindowControl, t: &ThemeColors) -> impl IntoElement {
        let handler = self.handler(control);
        let label = control.aria_label();
        let group = SharedString::from(control.element_id());
        let hover_bg = t.gray4;
        let hover_glyph = if control.is_close() { t.red9 } else { t.gray11 };

        div()
            .id(control.element_id())
            .debug_selector(|| control.element_id().into())
            .group(group.clone())
            .w(CONTROL_WIDTH)
            .h_full()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .hover(move |s| s.bg(rgb(hover_bg)))
            .child(
                svg()
                    .path(control.icon())
                    .size(GLYPH_SIZE)
                    .text_color(rgb(t.gray11))
                    .group_hover(group, move |s| s.text_color(rgb(hover_glyph))),
            )
            .on_mouse_down(MouseButton::Left, |_, _, cx| {
                cx.stop_propagation();
            })
            .on_click(move |_, window, cx| {
                cx.stop_propagation();
                invoke(control, handler.as_ref(), window, cx);
            })
            .tooltip(move |window, cx| Tooltip::new(label).build(window, cx))
    }
}

fn invoke(control: WindowControl, handler: Option<&ControlHandler>, window: &mut Window, cx: &mut App) {
    match handler {
        Some(handler) => {
            log::debug!("{} activated", control.aria_label());
            handler(window, cx);
        }
        None => log::trace!("{} activated with no handler", control.aria_label()),
    }
}

impl Render for Titlebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.render_count += 1;
        let t = theme(cx);

        h_flex()
            .id("titlebar")
            .w_full()
            .h(TITLEBAR_HEIGHT)
            .flex_shrink_0()
            .justify_between()
            .pl(SPACE_3)
            .bg(rgb(t.bg))
            .cursor_pointer()
            .when(self.content.draggable, |d| {
                d.window_control_area(WindowControlArea::Drag)
                    // Linux client decorations have no native drag area
                    .when(cfg!(target_os = "linux"), |d| {
                        d.on_mouse_down(MouseButton::Left, |_, window, _cx| {
                            window.start_window_move();
                        })
                    })
            })
            .child(self.render_brand(&t))
            .child(
                h_flex()
                    .id("titlebar-controls")
                    .h_full()
                    // occlude() keeps the parent drag hitbox from swallowing clicks
                    .when(!self.content.controls_draggable, |d| {
                        d.occlude().on_mouse_down(MouseButton::Left, |_, _, cx| {
                            cx.stop_propagation();
                        })
                    })
                    .children(
                        self.content
                            .controls
                            .iter()
                            .map(|control| self.render_control(*control, &t)),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<usize>>, impl Fn(&mut Window, &mut App) + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move |_: &mut Window, _: &mut App| handle.set(handle.get() + 1))
    }

    #[gpui::test]
    fn test_close_scenario(cx: &mut gpui::TestAppContext) {
        let (closes, on_close) = counter();
        let props = TitlebarProps::new().app_version("1.2.3").on_close(on_close);
        let (view, cx) = cx.add_window_view(|_window, _cx| Titlebar::new(props));

        view.read_with(cx, |this, _cx| {
            let texts = this.content().texts();
            assert_eq!(texts, vec![SharedString::from("Pomatez"), SharedString::from("v1.2.3")]);
        });

        view.update_in(cx, |this, window, cx| {
            this.activate(WindowControl::Close, window, cx);
        });
        assert_eq!(closes.get(), 1);

        view.update_in(cx, |this, window, cx| {
            this.activate(WindowControl::Close, window, cx);
        });
        assert_eq!(closes.get(), 2);
    }

    #[gpui::test]
    fn test_minimize_calls_only_minimize(cx: &mut gpui::TestAppContext) {
        let (minimizes, on_minimize) = counter();
        let (closes, on_close) = counter();
        let props = TitlebarProps::new().on_minimize(on_minimize).on_close(on_close);
        let (view, cx) = cx.add_window_view(|_window, _cx| Titlebar::new(props));

        view.update_in(cx, |this, window, cx| {
            this.activate(WindowControl::Minimize, window, cx);
        });
        assert_eq!(minimizes.get(), 1);
        assert_eq!(closes.get(), 0);
    }

    #[gpui::test]
    fn test_missing_handlers_are_noops(cx: &mut gpui::TestAppContext) {
        let (view, cx) = cx.add_window_view(|_window, _cx| Titlebar::new(TitlebarProps::new()));

        view.update_in(cx, |this, window, cx| {
            for control in WindowControl::all() {
                assert!(this.handler(*control).is_none());
                this.activate(*control, window, cx);
            }
        });
    }

    #[gpui::test]
    fn test_defaults_applied(cx: &mut gpui::TestAppContext) {
        let view = cx.new(|_cx| Titlebar::new(TitlebarProps::new()));
        view.read_with(cx, |this, _cx| {
            assert_eq!(this.props().app_state, AppState::StayFocused);
            assert_eq!(&*this.props().app_version, "0.0.0");
            assert_eq!(this.content().version_label.as_deref(), Some("v0.0.0"));
        });
    }

    #[gpui::test]
    fn test_identical_props_skip_render(cx: &mut gpui::TestAppContext) {
        let (closes, on_close) = counter();
        let on_close: ControlHandler = Rc::new(on_close);
        let props = TitlebarProps {
            app_version: Some("1.2.3".into()),
            on_close: Some(on_close.clone()),
            ..TitlebarProps::new()
        };
        let view = cx.new(|_cx| Titlebar::new(props.clone()));

        let notified = Rc::new(Cell::new(0));
        let _subscription = cx.update(|cx| {
            let notified = notified.clone();
            cx.observe(&view, move |_, _| notified.set(notified.get() + 1))
        });

        let changed = view.update(cx, |this, cx| this.set_props(props.clone(), cx));
        assert!(!changed);
        cx.run_until_parked();
        assert_eq!(notified.get(), 0);

        // Omitted fields resolve to the same defaults
        let changed = view.update(cx, |this, cx| {
            this.set_props(TitlebarProps::from(this.props().clone()), cx)
        });
        assert!(!changed);

        let changed = view.update(cx, |this, cx| {
            this.set_props(props.clone().app_version("1.2.4"), cx)
        });
        assert!(changed);
        cx.run_until_parked();
        assert_eq!(notified.get(), 1);
        view.read_with(cx, |this, _cx| {
            assert_eq!(this.content().version_label.as_deref(), Some("v1.2.4"));
        });
        assert_eq!(closes.get(), 0);
    }

    #[gpui::test]
    fn test_new_handler_is_a_change(cx: &mut gpui::TestAppContext) {
        let view = cx.new(|_cx| Titlebar::new(TitlebarProps::new()));
        let changed = view.update(cx, |this, cx| {
            this.set_props(TitlebarProps::new().on_minimize(|_, _| {}), cx)
        });
        assert!(changed);
    }

    #[gpui::test]
    fn test_unchanged_props_do_not_redraw(cx: &mut gpui::TestAppContext) {
        let props = TitlebarProps::new().app_version("2.0.0");
        let (view, cx) = cx.add_window_view(|_window, _cx| Titlebar::new(props.clone()));
        cx.run_until_parked();

        let before = view.read_with(cx, |this, _cx| this.render_count());
        assert!(before >= 1);

        view.update(cx, |this, cx| {
            assert!(!this.set_props(props.clone(), cx));
        });
        cx.run_until_parked();
        assert_eq!(view.read_with(cx, |this, _cx| this.render_count()), before);
    }

    #[gpui::test]
    fn test_clicking_controls_fires_callbacks(cx: &mut gpui::TestAppContext) {
        let (minimizes, on_minimize) = counter();
        let (closes, on_close) = counter();
        let props = TitlebarProps::new()
            .app_version("1.2.3")
            .on_minimize(on_minimize)
            .on_close(on_close);
        let (_view, cx) = cx.add_window_view(|_window, _cx| Titlebar::new(props));
        cx.run_until_parked();

        let close = cx
            .debug_bounds(WindowControl::Close.element_id())
            .expect("close control not painted");
        cx.simulate_click(close.center(), Modifiers::none());
        assert_eq!(closes.get(), 1);
        assert_eq!(minimizes.get(), 0);

        let minimize = cx
            .debug_bounds(WindowControl::Minimize.element_id())
            .expect("minimize control not painted");
        cx.simulate_click(minimize.center(), Modifiers::none());
        assert_eq!(minimizes.get(), 1);
        assert_eq!(closes.get(), 1);
    }

    struct Host {
        titlebar: Entity<Titlebar>,
        render_count: usize,
    }

    impl Render for Host {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            self.render_count += 1;
            div()
                .size_full()
                .child(Titlebar::cached_view(&self.titlebar))
        }
    }

    #[gpui::test]
    fn test_parent_redraw_reuses_titlebar(cx: &mut gpui::TestAppContext) {
        let (host, cx) = cx.add_window_view(|_window, cx| Host {
            titlebar: cx.new(|_cx| Titlebar::new(TitlebarProps::new().app_version("1.2.3"))),
            render_count: 0,
        });
        cx.run_until_parked();

        let titlebar = host.read_with(cx, |host, _cx| host.titlebar.clone());
        let host_before = host.read_with(cx, |host, _cx| host.render_count);
        let titlebar_before = titlebar.read_with(cx, |this, _cx| this.render_count());
        assert!(titlebar_before >= 1);

        host.update(cx, |_host, cx| cx.notify());
        cx.run_until_parked();

        assert!(host.read_with(cx, |host, _cx| host.render_count) > host_before);
        assert_eq!(titlebar.read_with(cx, |this, _cx| this.render_count()), titlebar_before);

        // A real prop change still gets through the cache
        titlebar.update(cx, |this, cx| {
            assert!(this.set_props(TitlebarProps::new().app_version("1.2.4"), cx));
        });
        cx.run_until_parked();
        assert!(titlebar.read_with(cx, |this, _cx| this.render_count()) > titlebar_before);
    }

    #[gpui::test]
    fn test_empty_version_renders_name_only(cx: &mut gpui::TestAppContext) {
        let props = TitlebarProps::new().app_version("");
        let (view, cx) = cx.add_window_view(|_window, _cx| Titlebar::new(props));
        view.read_with(cx, |this, _cx| {
            assert_eq!(this.content().texts(), vec![SharedString::from("Pomatez")]);
            assert!(this.render_count() >= 1);
        });
    }
}
