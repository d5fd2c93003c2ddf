//! Standalone demo: opens a window with the picker and a swatch of the
//! selected color.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv::{hsv_picker, HsvColor};

fn main() {
    let color = RwSignal::new(HsvColor::from_degrees(0, 255, 255));

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    hsv_picker(color),
                    empty().style(move |st| {
                        let (r, g, b) = color.get().to_rgbf();
                        st.height(32.0)
                            .margin(8.0)
                            .border_radius(4.0)
                            .background(Color::rgba(r, g, b, 1.0))
                    }),
                ))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((276.0, 360.0))
                    .title("floem-hsv"),
            ),
        )
        .run();
}
