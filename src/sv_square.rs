//! Saturation/value square for the current hue.
//!
//! A fixed 256×256 raster where x is saturation and y is inverted value,
//! regenerated whenever the hue changes. The widget sits at its natural
//! size so raster pixels map 1:1 to widget pixels inside the border.

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::plane::{PlaneConfig, SvPlane};
use crate::raster::RasterCache;

/// Rasterize the saturation/value plane for `hue`: pixel `(s, 255 - v)`
/// holds the RGB of `HSV(hue, s, v)`.
fn rasterize_sv_plane(hue: f64) -> Vec<u8> {
    const SIDE: u32 = 256;
    let mut buf = vec![0u8; (SIDE * SIDE * 4) as usize];
    for v in 0..SIDE {
        let row_offset = ((SIDE - 1 - v) * SIDE * 4) as usize;
        for s in 0..SIDE {
            let (r, g, b) = math::hsv8_to_rgb8(hue, s as u8, v as u8);
            let offset = row_offset + (s * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

enum SquareUpdate {
    Hue(f64),
    Sv(i32, i32),
}

pub struct SvSquare {
    id: ViewId,
    held: bool,
    plane: SvPlane,
    on_change: Option<Box<dyn Fn(u8, u8)>>,
    /// Cached plane image, keyed by the hue it was rasterized for.
    plane_img: RasterCache<u64>,
}

/// Creates a saturation/value square bound to `saturation` and `value`
/// (both 0–255), rendering the plane for `hue`.
///
/// Pointer input writes saturation/value back to their signals; a hue change
/// re-rasterizes the plane but leaves the pointer where it is.
pub fn sv_square(
    hue: RwSignal<f64>,
    saturation: RwSignal<u8>,
    value: RwSignal<u8>,
) -> SvSquare {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = hue.get();
        id.update_state(SquareUpdate::Hue(h));
    });

    create_effect(move |_| {
        let s = saturation.get();
        let v = value.get();
        id.update_state(SquareUpdate::Sv(s as i32, v as i32));
    });

    let cfg = PlaneConfig::default();
    let mut plane = SvPlane::new(cfg);
    plane.set_hue(hue.get_untracked());
    plane.set_sv(
        saturation.get_untracked() as i32,
        value.get_untracked() as i32,
    );

    let side = (cfg.range + 1 + 2 * cfg.inset) as f32;
    SvSquare {
        id,
        held: false,
        plane,
        on_change: Some(Box::new(move |s, v| {
            saturation.set(s);
            value.set(v);
        })),
        plane_img: RasterCache::new(),
    }
    .style(move |st| {
        st.width(side)
            .height(side)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SvSquare {
    fn emit(&self) {
        if let Some(cb) = &self.on_change {
            let c = self.plane.color();
            cb(c.s(), c.v());
        }
    }
}

impl View for SvSquare {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SquareUpdate>() {
            match *update {
                SquareUpdate::Hue(h) => {
                    self.plane.set_hue(h);
                }
                SquareUpdate::Sv(s, v) => {
                    self.plane.set_sv(s, v);
                }
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.plane
                    .move_to(e.pos.x.round() as i32, e.pos.y.round() as i32);
                self.emit();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.plane
                        .move_to(e.pos.x.round() as i32, e.pos.y.round() as i32);
                    self.emit();
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let cfg = self.plane.cfg();
        let inset = cfg.inset as f64;
        let side = (cfg.range + 1) as f64;
        let rect = Rect::new(inset, inset, inset + side, inset + side);
        let rrect = rect.to_rounded_rect(constants::CORNER_RADIUS);

        let hue = self.plane.hue();
        self.plane_img.ensure(hue.to_bits(), || {
            (rasterize_sv_plane(hue), side as u32, side as u32)
        });

        cx.save();
        cx.clip(&rrect);
        if let Some((img, hash)) = self.plane_img.image() {
            cx.draw_img(floem_renderer::Img { img, hash }, rect);
        }
        cx.restore();

        // Square border
        cx.stroke(&rrect, Color::rgba8(80, 80, 80, 200), &Stroke::new(1.0));

        // Pointer
        let (px, py) = self.plane.pointer();
        let circle = Circle::new((px as f64, py as f64), constants::POINTER_RADIUS);
        cx.fill(&circle, Color::rgb8(0x33, 0x33, 0x33), 0.0);
        cx.stroke(
            &circle,
            Color::rgb8(0xdd, 0xdd, 0xdd),
            &Stroke::new(constants::POINTER_BORDER),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(buf: &[u8], x: usize, y: usize) -> [u8; 4] {
        let o = (y * 256 + x) * 4;
        [buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]
    }

    #[test]
    fn plane_corners() {
        let buf = rasterize_sv_plane(120.0 / 360.0);
        // top-left: s=0, v=255 → white; top-right: full hue
        assert_eq!(px(&buf, 0, 0), [255, 255, 255, 255]);
        assert_eq!(px(&buf, 255, 0), [0, 255, 0, 255]);
        // bottom row: v=0 → black regardless of saturation
        assert_eq!(px(&buf, 0, 255), [0, 0, 0, 255]);
        assert_eq!(px(&buf, 255, 255), [0, 0, 0, 255]);
    }

    #[test]
    fn plane_indexes_value_downward() {
        let buf = rasterize_sv_plane(0.0);
        // pixel (s, 255 - v) holds HSV(hue, s, v)
        let (r, g, b) = math::hsv8_to_rgb8(0.0, 128, 191);
        assert_eq!(px(&buf, 128, 255 - 191), [r, g, b, 255]);
        // red axis: full saturation, value fades toward the bottom
        assert_eq!(px(&buf, 255, 0), [255, 0, 0, 255]);
        assert_eq!(px(&buf, 255, 155), [100, 0, 0, 255]);
    }

    #[test]
    fn plane_is_opaque() {
        let buf = rasterize_sv_plane(0.42);
        assert!(buf.chunks_exact(4).all(|p| p[3] == 255));
    }
}
