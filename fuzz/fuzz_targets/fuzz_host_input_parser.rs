#![no_main]

use libfuzzer_sys::fuzz_target;
use splitview_core::event::HostEvent;
use splitview_web::input_parser::parse_host_event;

fuzz_target!(|data: &[u8]| {
    // The parser must never panic, whatever the host sends.
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(Some(event)) = parse_host_event(json) {
        // Every decoded event except leave is a press, move or release.
        assert_eq!(
            event.is_press() || event.is_move() || event.is_release(),
            !matches!(event, HostEvent::MouseLeave)
        );
    }
});
