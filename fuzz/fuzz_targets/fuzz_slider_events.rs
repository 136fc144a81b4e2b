#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splitview_core::event::{EventOrigin, HostEvent, PointerButton};
use splitview_core::{BoundingRect, ContainerBounds, ContentSize, PagePoint};
use splitview_web::{CompareSlider, InteractiveTarget, SliderOptions};

#[derive(Debug, Arbitrary)]
enum Op {
    Press { origin: u8, button: u8, x: i16, y: i16 },
    Move { origin: u8, x: i16, y: i16 },
    Release,
    Leave,
    Resize { width: u16, height: u16 },
    HandleMounted(bool),
    Options { position: i8, padding: u8, hover: bool, only_handle: bool, portrait: bool },
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    ops: Vec<Op>,
}

fn origin(code: u8) -> EventOrigin {
    match code % 3 {
        0 => EventOrigin::Handle,
        1 => EventOrigin::Container,
        _ => EventOrigin::Viewport,
    }
}

fn point(x: i16, y: i16) -> PagePoint {
    PagePoint::new(f64::from(x), f64::from(y))
}

fuzz_target!(|input: Input| {
    let mut host = ContainerBounds::unscaled(BoundingRect::from_size(
        f64::from(input.width),
        f64::from(input.height),
    ));
    let Ok(mut slider) = CompareSlider::new(SliderOptions::default()) else {
        return;
    };
    slider.mount(&host);

    for op in input.ops {
        match op {
            Op::Press { origin: o, button, x, y } => {
                let Some(button) = PointerButton::from_dom_code(i32::from(button % 4)) else {
                    continue;
                };
                slider.handle_event(
                    &HostEvent::MouseDown { origin: origin(o), button, point: point(x, y) },
                    &host,
                );
            }
            Op::Move { origin: o, x, y } => {
                slider.handle_event(
                    &HostEvent::MouseMove { origin: origin(o), point: point(x, y) },
                    &host,
                );
            }
            Op::Release => {
                slider.handle_event(&HostEvent::MouseUp { origin: EventOrigin::Viewport }, &host);
            }
            Op::Leave => {
                slider.handle_event(&HostEvent::MouseLeave, &host);
            }
            Op::Resize { width, height } => {
                host = ContainerBounds::unscaled(BoundingRect::from_size(
                    f64::from(width),
                    f64::from(height),
                ));
                slider.observe_resize(ContentSize::new(f64::from(width), f64::from(height)), &host);
            }
            Op::HandleMounted(mounted) => {
                if mounted {
                    slider.target_mounted(InteractiveTarget::Handle);
                } else {
                    slider.target_unmounted(InteractiveTarget::Handle);
                }
            }
            Op::Options { position, padding, hover, only_handle, portrait } => {
                let options = SliderOptions::new()
                    .position(f64::from(position))
                    .bounds_padding(f64::from(padding))
                    .change_position_on_hover(hover)
                    .only_handle_draggable(only_handle)
                    .portrait(portrait);
                let _ = slider.set_options(options, &host);
            }
        }

        // Post-conditions that must always hold:
        assert!((0.0..=100.0).contains(&slider.position()), "position out of range");
        assert_eq!(slider.is_dragging(), slider.session().has_viewport_binding());
        if let Some(output) = slider.last_output() {
            assert!(output.clamped_px.is_finite(), "non-finite render offset");
        }
    }

    slider.unmount();
    assert!(slider.session().registry().is_empty(), "listener leak");
});
