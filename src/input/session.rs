//! Drag session controller - one press-move-release gesture at a time
//!
//! The controller is a two-state machine (Idle, Active). A primary-button
//! press captures the brush controls, paints the press coordinate for
//! every tool but Constant, and goes Active; each motion sample paints
//! through the stroke sampler; release tears the session down. Only one
//! session exists at a time (single-pointer model), and a surface failure
//! mid-gesture aborts the session rather than leaving it Active.

use super::{PointerButton, PointerEvent, Position};
use crate::brush::{paint_dab, paint_sample, BrushParams, BrushSpec, KernelKind, MaskCache};
use crate::core::errors::CoreError;
use crate::raster::RasterSurface;

/// Ephemeral per-gesture state; exists only while Active.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    spec: BrushSpec,
    kind: KernelKind,
    /// Last painted coordinate, fed to the Linear tool's gap fill
    last_position: Position,
}

/// Owns the gesture lifecycle and the mask cache shared across strokes.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    cache: MaskCache,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one pointer event through the state machine.
    ///
    /// Blends happen synchronously, in delivery order, before this
    /// returns. A surface error aborts the gesture: the session is torn
    /// down and no further painting occurs until the next press.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        params: &dyn BrushParams,
        surface: &mut dyn RasterSurface,
    ) -> Result<(), CoreError> {
        match event {
            PointerEvent::Press { position, button } => self.press(position, button, params, surface),
            PointerEvent::Move { position } => self.motion(position, surface),
            PointerEvent::Release { .. } => {
                if self.session.take().is_some() {
                    tracing::debug!("drag session ended");
                }
                Ok(())
            }
        }
    }

    fn press(
        &mut self,
        position: Position,
        button: PointerButton,
        params: &dyn BrushParams,
        surface: &mut dyn RasterSurface,
    ) -> Result<(), CoreError> {
        if button != PointerButton::Primary || self.session.is_some() {
            return Ok(());
        }

        let spec = params.capture();
        let kind = params.tool();
        tracing::debug!(?kind, radius = spec.radius, flow = spec.flow_rate, "drag session started");

        self.session = Some(DragSession {
            spec,
            kind,
            last_position: position,
        });

        if kind.paints_on_press() {
            if let Err(error) = paint_dab(surface, &self.cache, &spec, kind, position) {
                self.abort(&error);
                return Err(error);
            }
        }

        Ok(())
    }

    fn motion(
        &mut self,
        position: Position,
        surface: &mut dyn RasterSurface,
    ) -> Result<(), CoreError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let previous = session.last_position;
        session.last_position = position;
        let (spec, kind) = (session.spec, session.kind);

        if let Err(error) = paint_sample(surface, &self.cache, &spec, kind, Some(previous), position)
        {
            self.abort(&error);
            return Err(error);
        }

        Ok(())
    }

    fn abort(&mut self, error: &CoreError) {
        tracing::warn!(%error, "drag session aborted by surface failure");
        self.session = None;
    }
}
