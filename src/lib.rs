//! # floem-hsv
//!
//! Hue slider and saturation/value square picker widgets for
//! [Floem](https://github.com/lapce/floem).
//!
//! The slider emits a hue; the square renders the saturation/value plane
//! for that hue and emits the full color. [`hsv_picker`] wires the two
//! together around an [`HsvColor`] signal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsv::{hsv_picker, HsvColor};
//!
//! let color = RwSignal::new(HsvColor::from_degrees(210, 200, 230));
//! // Use `hsv_picker(color)` in your Floem view tree.
//! ```

mod color;
mod constants;
mod hue_slider;
mod math;
mod plane;
mod raster;
mod sv_square;
mod track;

pub use color::HsvColor;
pub use hue_slider::{hue_slider, HueSlider};
pub use plane::{PlaneConfig, SvPlane};
pub use sv_square::{sv_square, SvSquare};
pub use track::{HueTrack, TrackConfig};

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal};

/// Creates the combined picker: saturation/value square above a hue slider.
///
/// The picker reads from and writes to `color`. External writes reposition
/// both pointers without re-emitting; user edits update the signal.
pub fn hsv_picker(color: RwSignal<HsvColor>) -> impl IntoView {
    let initial = color.get_untracked();
    let h = RwSignal::new(initial.h());
    let s = RwSignal::new(initial.s());
    let v = RwSignal::new(initial.v());

    // h/s/v → color: any component change recombines into the full color.
    create_effect(move |_| {
        let new_color = HsvColor::new(h.get(), s.get(), v.get());
        if color.get_untracked() != new_color {
            color.set(new_color);
        }
    });

    // External color → h/s/v. Writes from the effect above arrive here with
    // an unchanged color and fall through, so the two effects cannot loop.
    create_effect(move |prev: Option<HsvColor>| {
        let c = color.get();
        if prev == Some(c) {
            return c;
        }
        if h.get_untracked() != c.h() {
            h.set(c.h());
        }
        if s.get_untracked() != c.s() {
            s.set(c.s());
        }
        if v.get_untracked() != c.v() {
            v.set(c.v());
        }
        c
    });

    v_stack((
        sv_square(h, s, v),
        hue_slider(h).style(|st| st.margin_top(constants::GAP).width_full()),
    ))
    .style(|st| st.padding(constants::PADDING).items_center())
}
