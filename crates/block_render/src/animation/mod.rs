pub mod config;
pub mod frames;
pub mod style;

use std::io;
use std::os::raw::c_int;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::SigId;

use crate::render::config::RenderConfig;
use crate::render::BlockRenderer;
use crate::terminal::{CrosstermSurface, Surface};
use crate::AnimationError;

use config::AnimationConfig;
use frames::FrameGenerator;
use style::AnimationStyle;

/// Shortest wait between frames; keeps a zero interval from spinning.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// A text animation driven at a fixed interval.
///
/// `start` blocks the caller until [`stop`](Self::stop) is called from
/// another thread, or SIGINT/SIGTERM arrives. The frame counter carries over
/// between runs; call [`reset_frames`](Self::reset_frames) to start over.
pub struct Animation {
    frames: Mutex<FrameGenerator>,
    running: AtomicBool,
    stop_tx: Mutex<Option<Sender<()>>>,
}

impl Animation {
    pub fn new(text: &str, render: RenderConfig, config: AnimationConfig) -> Self {
        Self::with_rng(text, render, config, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with reproducible frame effects.
    pub fn with_seed(text: &str, render: RenderConfig, config: AnimationConfig, seed: u64) -> Self {
        Self::with_rng(text, render, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(text: &str, render: RenderConfig, config: AnimationConfig, rng: StdRng) -> Self {
        let generator = FrameGenerator::new(text, BlockRenderer::new(render), config, rng);
        Self { frames: Mutex::new(generator), running: AtomicBool::new(false), stop_tx: Mutex::new(None) }
    }

    pub fn set_style(&self, style: AnimationStyle) {
        self.frames().config_mut().style = style;
    }

    pub fn set_chance(&self, chance: f64) {
        self.frames().config_mut().effect_chance = chance;
    }

    pub fn set_interval(&self, interval: Duration) {
        self.frames().config_mut().interval = interval;
    }

    pub fn set_range(&self, min: usize, max: usize) {
        let mut frames = self.frames();
        let config = frames.config_mut();
        config.min_affected = min;
        config.max_affected = max;
    }

    pub fn config(&self) -> AnimationConfig {
        self.frames().config().clone()
    }

    pub fn frame_count(&self) -> usize {
        self.frames().frame_count()
    }

    pub fn reset_frames(&self) {
        self.frames().reset();
    }

    /// Produce the next frame without touching the terminal.
    pub fn frame(&self) -> String {
        self.frames().next_frame()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Request termination. Does nothing unless a run is in progress; the
    /// cancellation signal fires at most once per run.
    pub fn stop(&self) {
        if let Some(sender) = lock(&self.stop_tx).take() {
            debug!("animation stop requested");
            drop(sender);
        }
    }

    /// Run on stdout until stopped or interrupted.
    ///
    /// SIGINT and SIGTERM end the loop instead of the process while it runs.
    /// Once no animation is running they terminate the process again.
    pub fn start(&self) -> Result<(), AnimationError> {
        self.run(&mut CrosstermSurface::stdout())
    }

    /// Run on `surface` until stopped or interrupted.
    pub fn run<S: Surface>(&self, surface: &mut S) -> Result<(), AnimationError> {
        let stop_rx = self.arm()?;
        self.run_armed(surface, stop_rx)
    }

    /// Run on stdout from a background thread.
    ///
    /// The animation counts as running once this returns, so an immediate
    /// `stop` is honored.
    pub fn start_detached(
        self: &Arc<Self>,
    ) -> Result<JoinHandle<Result<(), AnimationError>>, AnimationError> {
        let stop_rx = self.arm()?;
        let animation = Arc::clone(self);
        Ok(thread::spawn(move || animation.run_armed(&mut CrosstermSurface::stdout(), stop_rx)))
    }

    /// Run on stdout, stopping automatically after `duration`.
    pub fn start_for(self: &Arc<Self>, duration: Duration) -> Result<(), AnimationError> {
        self.run_for(&mut CrosstermSurface::stdout(), duration)
    }

    /// Run on `surface`, stopping automatically after `duration`.
    pub fn run_for<S: Surface>(
        self: &Arc<Self>,
        surface: &mut S,
        duration: Duration,
    ) -> Result<(), AnimationError> {
        let stop_rx = self.arm()?;
        let animation = Arc::clone(self);
        thread::spawn(move || {
            thread::sleep(duration);
            animation.stop();
        });
        self.run_armed(surface, stop_rx)
    }

    /// Mark the animation running. The sender is stored under the same lock,
    /// so a `stop` that sees the running flag always finds it.
    fn arm(&self) -> Result<Receiver<()>, AnimationError> {
        let mut stop_tx = lock(&self.stop_tx);
        if self.running.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            return Err(AnimationError::AlreadyRunning);
        }
        let (sender, stop_rx) = mpsc::channel();
        *stop_tx = Some(sender);
        Ok(stop_rx)
    }

    fn disarm(&self) {
        let mut stop_tx = lock(&self.stop_tx);
        stop_tx.take();
        self.running.store(false, Ordering::Release);
    }

    fn run_armed<S: Surface>(&self, surface: &mut S, stop_rx: Receiver<()>) -> Result<(), AnimationError> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let result = match SignalGuard::listen(&interrupted) {
            Ok(guard) => {
                let result = self.drive(surface, &stop_rx, &interrupted);
                drop(guard);
                result
            },
            Err(err) => Err(AnimationError::Signal(err)),
        };
        self.disarm();
        result
    }

    fn drive<S: Surface>(
        &self,
        surface: &mut S,
        stop_rx: &Receiver<()>,
        interrupted: &AtomicBool,
    ) -> Result<(), AnimationError> {
        surface.enter()?;
        let result = self.frame_loop(surface, stop_rx, interrupted);
        let restored = surface.leave();
        result?;
        restored?;
        Ok(())
    }

    fn frame_loop<S: Surface>(
        &self,
        surface: &mut S,
        stop_rx: &Receiver<()>,
        interrupted: &AtomicBool,
    ) -> Result<(), AnimationError> {
        let (first, interval) = {
            let mut frames = self.frames();
            (frames.next_frame(), frames.config().interval.max(MIN_INTERVAL))
        };
        let lines = first.split('\n').count();
        debug!("animation started: {lines} lines every {interval:?}");
        surface.write_frame(&first)?;

        loop {
            if interrupted.load(Ordering::Relaxed) {
                debug!("animation interrupted by signal");
                return Ok(());
            }
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {},
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!("animation stopped");
                    return Ok(());
                },
            }
            if interrupted.load(Ordering::Relaxed) {
                debug!("animation interrupted by signal");
                return Ok(());
            }

            let frame = self.frame();
            surface.rewind(lines)?;
            surface.write_frame(&frame)?;
        }
    }

    fn frames(&self) -> MutexGuard<'_, FrameGenerator> {
        lock(&self.frames)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Loops listening for SIGINT/SIGTERM in this process.
static SIGNAL_OWNERS: Mutex<SignalOwners> = Mutex::new(SignalOwners::new());

/// Hands SIGINT/SIGTERM back to their default action once no loop listens.
///
/// Unregistering a signal-hook action leaves its handler installed, which
/// would swallow every later Ctrl+C. A conditional default action stays
/// registered instead and fires whenever the owner count is zero.
#[derive(Debug)]
struct SignalOwners {
    count: usize,
    released: Option<Arc<AtomicBool>>,
}

impl SignalOwners {
    const fn new() -> Self {
        Self { count: 0, released: None }
    }

    fn acquire(&mut self) -> io::Result<()> {
        let released = match self.released.clone() {
            Some(released) => released,
            None => {
                let released = Arc::new(AtomicBool::new(false));
                register_all(|signal| {
                    signal_hook::flag::register_conditional_default(signal, Arc::clone(&released))
                })?;
                self.released = Some(Arc::clone(&released));
                released
            },
        };
        released.store(false, Ordering::SeqCst);
        self.count += 1;
        Ok(())
    }

    fn release(&mut self) {
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            if let Some(released) = &self.released {
                released.store(true, Ordering::SeqCst);
            }
        }
    }

    #[cfg(test)]
    fn is_released(&self) -> bool {
        self.released.as_ref().map_or(true, |released| released.load(Ordering::SeqCst))
    }
}

/// SIGINT/SIGTERM routed into one loop's interrupt flag until dropped.
struct SignalGuard {
    ids: Vec<SigId>,
}

impl SignalGuard {
    fn listen(flag: &Arc<AtomicBool>) -> io::Result<Self> {
        let mut owners = lock(&SIGNAL_OWNERS);
        owners.acquire()?;
        match register_all(|signal| signal_hook::flag::register(signal, Arc::clone(flag))) {
            Ok(ids) => Ok(Self { ids }),
            Err(err) => {
                owners.release();
                Err(err)
            },
        }
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
        lock(&SIGNAL_OWNERS).release();
    }
}

/// Register `action` for SIGINT and SIGTERM, rolling back on failure.
fn register_all<F>(mut action: F) -> io::Result<Vec<SigId>>
where
    F: FnMut(c_int) -> io::Result<SigId>,
{
    let mut ids = Vec::with_capacity(2);
    for signal in [SIGINT, SIGTERM] {
        match action(signal) {
            Ok(id) => ids.push(id),
            Err(err) => {
                for id in ids {
                    signal_hook::low_level::unregister(id);
                }
                return Err(err);
            },
        }
    }
    Ok(ids)
}
