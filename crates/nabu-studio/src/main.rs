//! Session walkthrough: drives one render session through its lifecycle and
//! logs the statistics each frame reports. No window, no rasterizer — the
//! surface here is just an id a real backend would resolve.

use nabu_render::coords::Rect;
use nabu_render::logging::{init_logging, LoggingConfig};
use nabu_render::paint::Color;
use nabu_render::{RenderSession, SessionDesc};

/// Index into a (hypothetical) backend surface registry.
type SurfaceId = u64;

fn main() {
    init_logging(LoggingConfig {
        env_filter: Some("info,nabu_render=trace".to_owned()),
    });

    let surface: SurfaceId = 1;
    let mut session = RenderSession::new(
        surface,
        SessionDesc::new(1280, 720, 2.0, "DisplayP3"),
    );

    for frame in 0..3 {
        session.begin(640.0, 360.0, 2.0, "DisplayP3");

        session.draw_rect(
            Rect::new(0.0, 0.0, 640.0, 360.0),
            Color::from_packed(0x1020_30FF),
            1.0,
        );
        session.draw_rect(
            Rect::new(20.0, 20.0, 200.0, 120.0),
            Color::from_rgba8(220, 80, 40, 255),
            0.9,
        );
        session.draw_text(
            Rect::new(24.0, 24.0, 192.0, 20.0),
            Color::white(),
            14.0,
            1.0,
            &format!("frame {frame}"),
        );

        let stats = session.end();
        log::info!(
            "frame #{}: {} cmds ({} rect, {} text) in {:.1} ms",
            session.frame_serial(),
            stats.command_count,
            stats.rect_count,
            stats.text_count,
            stats.gpu_time_ms,
        );
    }

    // A mid-run resize only touches the backing store.
    session.resize(1920, 1080);
    log::info!(
        "resized to {}x{} px, logical still {:?}",
        session.pixel_width(),
        session.pixel_height(),
        session.logical_size(),
    );

    // Closing without opening is allowed; it reports an empty frame.
    let stats = session.end();
    log::info!(
        "idle end: serial {} elapsed {:.1} ms",
        session.frame_serial(),
        stats.gpu_time_ms,
    );
}
