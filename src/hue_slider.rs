//! Horizontal hue slider (0.0–1.0 across the track).
//!
//! Renders the full hue sweep at full saturation/value as a rasterized
//! image, cached per track width, with a circle-and-ticks pointer at the
//! current offset. Scroll steps the pointer by one pixel, or ten with Ctrl.

use floem::kurbo::{Circle, Line, Point, Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::raster::RasterCache;
use crate::track::{HueTrack, TrackConfig};

/// Rasterize a horizontal hue gradient at full saturation/value.
///
/// The hue is sampled left to right over `[0, 1)`, quantized to `steps`
/// samples so the ramp matches the slider's degree resolution.
fn rasterize_hue_gradient(width: u32, height: u32, steps: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let steps = steps.max(1) as f64;
    for px in 0..width {
        let t = px as f64 / width as f64;
        let hue = (t * steps).floor() / steps;
        let (r, g, b) = math::hsv_to_rgb(hue, 1.0, 1.0);
        let cr = (r * 255.0 + 0.5) as u8;
        let cg = (g * 255.0 + 0.5) as u8;
        let cb = (b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

enum SliderUpdate {
    Hue(f64),
}

pub struct HueSlider {
    id: ViewId,
    held: bool,
    track: HueTrack,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(f64)>>,
    /// Cached gradient image, keyed by track length.
    gradient: RasterCache<u32>,
    /// Last programmatic hue, re-applied across resizes until the user
    /// moves the pointer. A user-set pixel offset instead survives a
    /// resize as-is and only saturates at the new track end.
    programmatic: Option<f64>,
}

/// Creates a horizontal hue slider bound to `hue` (0.0–1.0).
///
/// User input writes back to the signal; external writes reposition the
/// pointer without re-firing the change path, so driving the signal from
/// elsewhere cannot feed back.
pub fn hue_slider(hue: RwSignal<f64>) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = hue.get();
        id.update_state(SliderUpdate::Hue(h));
    });

    let initial = hue.get_untracked();
    let mut track = HueTrack::new(TrackConfig::default());
    track.set_hue(initial);

    HueSlider {
        id,
        held: false,
        track,
        size: Default::default(),
        on_change: Some(Box::new(move |h| {
            hue.set(h);
        })),
        gradient: RasterCache::new(),
        programmatic: Some(initial),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn emit(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.track.hue());
        }
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                // Echoes of our own emission arrive with an unchanged hue
                // and must not count as a programmatic set.
                SliderUpdate::Hue(h) => {
                    if h != self.track.hue() {
                        self.track.set_hue(h);
                        self.programmatic = Some(h);
                    }
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
                self.programmatic = None;
                self.track.move_to(e.pos.x.round() as i32);
                self.emit();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.track.move_to(e.pos.x.round() as i32);
                    self.emit();
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerWheel(e) => {
                let step = if e.modifiers.control() { 10 } else { 1 };
                if e.delta.y < 0.0 {
                    self.track.nudge(step);
                } else if e.delta.y > 0.0 {
                    self.track.nudge(-step);
                } else {
                    return EventPropagation::Continue;
                }
                self.programmatic = None;
                self.emit();
                self.id.request_layout();
                EventPropagation::Stop
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

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        let inset = self.track.cfg().inset;
        let len = (self.size.width as i32 - 2 * inset).max(1);
        if self.track.resize(len) {
            self.gradient.invalidate();
            // A pending programmatic hue re-anchors to the new length; a
            // user-placed pixel offset is kept as-is (it may sit past the
            // end of a shrunken track until moved).
            if let Some(h) = self.programmatic {
                self.track.set_hue(h);
            }
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let inset = self.track.cfg().inset as f64;
        let track_rect = Rect::new(inset, inset, w - inset, h - inset);
        let rrect = track_rect.to_rounded_rect(constants::CORNER_RADIUS);

        let len = self.track.len() as u32;
        let steps = self.track.cfg().steps;
        let raster_h = (h - 2.0 * inset).max(1.0) as u32;
        self.gradient.ensure(len, || {
            (rasterize_hue_gradient(len, raster_h, steps), len, raster_h)
        });

        cx.save();
        cx.clip(&rrect);
        if let Some((img, hash)) = self.gradient.image() {
            cx.draw_img(floem_renderer::Img { img, hash }, track_rect);
        }
        cx.restore();

        // Track border
        cx.stroke(&rrect, Color::rgba8(80, 80, 80, 200), &Stroke::new(1.0));

        // Pointer: filled circle at mid-height plus tick lines to the track edges
        let px = self.track.pointer_x() as f64;
        let cy = h / 2.0;
        let circle = Circle::new((px, cy), constants::POINTER_RADIUS);
        cx.fill(&circle, Color::rgb8(0x33, 0x33, 0x33), 0.0);
        cx.stroke(
            &circle,
            Color::rgb8(0xdd, 0xdd, 0xdd),
            &Stroke::new(constants::POINTER_BORDER),
        );

        let gap = constants::POINTER_RADIUS + constants::POINTER_BORDER / 2.0;
        let tick = Stroke::new(constants::TICK_WIDTH);
        let tick_color = Color::rgba8(80, 80, 80, 200);
        cx.stroke(
            &Line::new(Point::new(px, inset), Point::new(px, cy - gap)),
            tick_color,
            &tick,
        );
        cx.stroke(
            &Line::new(Point::new(px, h - inset), Point::new(px, cy + gap)),
            tick_color,
            &tick,
        );
    }
}
