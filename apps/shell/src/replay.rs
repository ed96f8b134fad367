use park_domain::config::{ReplayConfig, WindowConfig};
use park_domain::events::{
    KEY_ESCAPE, KEY_SPACE, KeyPressed, KeyReleased, MOUSE_BUTTON_LEFT, MouseClick, MouseMoved,
    Vec2, WindowResized,
};
use park_event_bus::{Event, EventBus, SubscriptionHandle};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

const KEY_PERIOD: u32 = 30;
const CLICK_PERIOD: u32 = 45;

/// Totals gathered over one replay run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReplayStats {
    pub(crate) frames: u32,
    pub(crate) published: u64,
    pub(crate) delivered: u64,
}

/// Scripted stand-in for a window's input pump.
///
/// Publishes a [`WindowResized`] for the configured resolution, then one
/// [`MouseMoved`] per frame plus periodic key and click transitions. An
/// `Escape` key press from any publisher ends the run after the current frame,
/// the same way a real window reports that it should close.
#[derive(Debug)]
pub(crate) struct InputReplay {
    bus: EventBus,
    width: i32,
    height: i32,
    frames: u32,
    frame_interval: Duration,
    close_requested: Arc<AtomicBool>,
    _close_watch: SubscriptionHandle,
}

impl InputReplay {
    pub(crate) fn new(bus: EventBus, window: &WindowConfig, replay: &ReplayConfig) -> Self {
        let close_requested = Arc::new(AtomicBool::new(false));
        let flag = close_requested.clone();
        let close_watch = bus.subscribe(move |event: &KeyPressed| {
            if event.key == KEY_ESCAPE {
                flag.store(true, Ordering::Release);
            }
        });

        Self {
            bus,
            width: window.width,
            height: window.height,
            frames: replay.frames,
            frame_interval: Duration::from_millis(replay.frame_millis),
            close_requested,
            _close_watch: close_watch,
        }
    }

    pub(crate) fn run(&self) -> ReplayStats {
        let mut stats = ReplayStats::default();
        info!(
            frames = self.frames,
            width = self.width,
            height = self.height,
            "Input replay started"
        );

        self.emit(&mut stats, WindowResized { width: self.width, height: self.height });

        for frame in 0..self.frames {
            self.frame(frame, &mut stats);
            stats.frames += 1;

            if self.close_requested.load(Ordering::Acquire) {
                debug!(frame, "Close requested");
                break;
            }
            if !self.frame_interval.is_zero() {
                std::thread::sleep(self.frame_interval);
            }
        }

        stats
    }

    fn frame(&self, frame: u32, stats: &mut ReplayStats) {
        let cursor = self.cursor(frame);
        self.emit(stats, MouseMoved { position: cursor });

        match frame % KEY_PERIOD {
            0 => self.emit(stats, KeyPressed { key: KEY_SPACE }),
            5 => self.emit(stats, KeyReleased { key: KEY_SPACE }),
            _ => {},
        }

        match frame % CLICK_PERIOD {
            20 => self.click(stats, cursor, true),
            22 => self.click(stats, cursor, false),
            _ => {},
        }

        if frame + 1 == self.frames {
            self.emit(stats, KeyPressed { key: KEY_ESCAPE });
        }
    }

    fn click(&self, stats: &mut ReplayStats, position: Vec2, down: bool) {
        self.emit(stats, MouseClick { button: MOUSE_BUTTON_LEFT, position, down });
    }

    /// Cursor path: an ellipse around the window center.
    #[allow(clippy::cast_precision_loss)]
    fn cursor(&self, frame: u32) -> Vec2 {
        let t = frame as f32 * 0.1;
        let (cx, cy) = (self.width as f32 / 2.0, self.height as f32 / 2.0);
        Vec2::new(cx + cx / 2.0 * t.cos(), cy + cy / 2.0 * t.sin())
    }

    fn emit<T: Event>(&self, stats: &mut ReplayStats, event: T) {
        stats.published += 1;
        stats.delivered += self.bus.publish(event) as u64;
    }
}
