//! Per-view history buffer management and the resolve protocol.
//!
//! Each view owns at most one history buffer. A resolve either seeds a fresh
//! history from the current source (first frame, resize, explicit reset) or
//! blends source and history into two simultaneous outputs: the antialiased
//! frame and the history for the next frame. The old history is retired and
//! the freshly blended copy takes its slot.

use log::debug;

use crate::config::{
    MOTION_AMPLIFICATION, UNIFORM_MOTION_AMPLIFICATION, UNIFORM_MOTION_BLENDING,
    UNIFORM_ORTHOGRAPHIC, UNIFORM_SHARPEN, UNIFORM_STATIONARY_BLENDING, VIEW_COUNT,
};
use crate::error::Result;
use crate::host::{RenderHost, ResolvePass, ViewTarget};

/// Scalar inputs of one resolve pass, pushed to the host by name.
#[derive(Debug, Clone, Copy)]
pub struct ResolveParams {
    pub sharpen: f32,
    pub stationary_blending: f32,
    pub motion_blending: f32,
    pub orthographic: bool,
}

struct ViewSlot<B> {
    history: Option<B>,
}

/// Double-buffered history state machine, one slot per view.
pub struct HistoryResolver<H: RenderHost> {
    views: [ViewSlot<H::Buffer>; VIEW_COUNT],
    reset_pending: bool,
}

impl<H: RenderHost> HistoryResolver<H> {
    /// Creates a resolver with every view uninitialized and a reset pending,
    /// so the first resolve per view always takes the seed path.
    pub fn new() -> Self {
        Self {
            views: [ViewSlot { history: None }, ViewSlot { history: None }],
            reset_pending: true,
        }
    }

    /// Flags the history for a re-seed on the next resolve. Idempotent; takes
    /// effect starting from the next [`resolve`](Self::resolve) call.
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Whether a reset is pending.
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Whether `view` currently holds a history buffer.
    pub fn has_history(&self, view: ViewTarget) -> bool {
        self.views[view.index()].history.is_some()
    }

    /// Runs one resolve for `view`.
    ///
    /// Seeds a fresh history (pass-through copy of `source`) when the slot is
    /// empty, its dimensions or format no longer match the source, or a reset
    /// is pending; then blends `source` with the history into `destination`
    /// and a newly allocated next-history buffer in a single submission.
    ///
    /// On allocation failure the error propagates and no partial state is
    /// left behind: a failed seed leaves the slot uninitialized, a failed
    /// next-history allocation keeps the current history for the next frame.
    pub fn resolve(
        &mut self,
        host: &mut H,
        view: ViewTarget,
        source: &H::Buffer,
        destination: &H::Buffer,
        params: ResolveParams,
    ) -> Result<()> {
        let desc = host.buffer_desc(source);
        let reset_pending = self.reset_pending;
        let slot = &mut self.views[view.index()];

        let history = match slot.history.take() {
            Some(buffer) if !reset_pending && host.buffer_desc(&buffer) == desc => buffer,
            stale => {
                if let Some(buffer) = stale {
                    let old = host.buffer_desc(&buffer);
                    debug!(
                        "retiring history ({}x{}, view {})",
                        old.width,
                        old.height,
                        view.index()
                    );
                    host.release_buffer(buffer);
                }
                let seeded = host.allocate_buffer(desc)?;
                host.copy_buffer(source, &seeded);
                debug!(
                    "seeded history ({}x{}, view {})",
                    desc.width,
                    desc.height,
                    view.index()
                );
                seeded
            }
        };

        host.set_float(UNIFORM_SHARPEN, params.sharpen);
        host.set_float(UNIFORM_STATIONARY_BLENDING, params.stationary_blending);
        host.set_float(UNIFORM_MOTION_BLENDING, params.motion_blending);
        host.set_float(UNIFORM_MOTION_AMPLIFICATION, MOTION_AMPLIFICATION);
        host.set_float(
            UNIFORM_ORTHOGRAPHIC,
            if params.orthographic { 1.0 } else { 0.0 },
        );

        let next_history = match host.allocate_buffer(desc) {
            Ok(buffer) => buffer,
            Err(err) => {
                slot.history = Some(history);
                return Err(err);
            }
        };

        host.submit_resolve(ResolvePass {
            source,
            history: &history,
            output: destination,
            next_history: &next_history,
        });

        host.release_buffer(history);
        slot.history = Some(next_history);
        self.reset_pending = false;
        Ok(())
    }

    /// Releases every history buffer and flags a reset, so a later re-enable
    /// starts from the seed path.
    pub fn release_all(&mut self, host: &mut H) {
        for (index, slot) in self.views.iter_mut().enumerate() {
            if let Some(buffer) = slot.history.take() {
                debug!("released history (view {index})");
                host.release_buffer(buffer);
            }
        }
        self.reset_pending = true;
    }
}

impl<H: RenderHost> Default for HistoryResolver<H> {
    fn default() -> Self {
        Self::new()
    }
}
