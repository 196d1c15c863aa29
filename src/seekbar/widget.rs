//! The seek bar aggregate.
//!
//! Holds the model constraints supplied by the host and their projection onto the
//! current viewport. The projection is recomputed on the three triggers that can
//! invalidate it: layout, content load, and any committed gesture step. Pointer input
//! is handled in view space and written back into the model immediately.

use crossbeam::channel::{self, Receiver, Sender};

use crate::config::SeekBarConfig;
use crate::core::constraints::Constraints;
use crate::core::range::{Range, RangeChange};
use crate::core::units::Unit;
use crate::error::Result;
use crate::gesture::handle::{HandlePair, Side};
use crate::gesture::pan::pan_by_pixels;
use crate::gesture::state::{DragState, DragStep, DragTarget, DragTracker, PointerEvent};
use crate::mapping::projection::{project, transfer_bound};
use crate::seekbar::geometry::BarGeometry;
use crate::seekbar::labels::{LabelText, Labels};

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing happened (other pointer, noise, no content or no layout yet)
    Ignored,
    Started(DragTarget),
    /// The timeline moved by `delta` model units
    Panned { delta: Unit },
    /// The pan would have left the permitted ranges and was dropped
    Rejected,
    /// A selection edge moved; `position` is the new model-space bound
    HandleMoved { side: Side, position: Unit },
    Finished,
    Cancelled,
}

impl GestureOutcome {
    /// Whether the renderer has to draw a new frame
    pub fn needs_redraw(&self) -> bool {
        matches!(self, GestureOutcome::Panned { .. } | GestureOutcome::HandleMoved { .. })
    }
}

/// Projected state, only present once there is both content and a laid out viewport
#[derive(Debug, Clone)]
struct Projection {
    view: Constraints,
    handles: HandlePair,
}

/// Dual-handle range selection over a pannable timeline
pub struct SeekBar {
    config: SeekBarConfig,
    model: Option<Constraints>,
    viewport: Range,
    projection: Option<Projection>,
    tracker: DragTracker,
    sender: Sender<RangeChange>,
    receiver: Receiver<RangeChange>,
}

impl SeekBar {
    /// Fails with `InvalidConfig` when `config` doesn't validate
    pub fn new(config: SeekBarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: SeekBarConfig) -> Self {
        let (sender, receiver) = channel::unbounded();
        let tracker = DragTracker::new(config.drag_threshold_px);
        Self {
            config,
            model: None,
            viewport: Range::default(),
            projection: None,
            tracker,
            sender,
            receiver,
        }
    }

    /// Change events of the model ranges.
    ///
    /// Drain after handling an event. Receivers are shared, each event goes to one of them.
    pub fn changes(&self) -> Receiver<RangeChange> {
        self.receiver.clone()
    }

    /// Load new content. Any drag in progress is abandoned.
    pub fn load(&mut self, mut model: Constraints) -> Result<()> {
        model.subscribe(&self.sender);
        tracing::debug!(%model, "loading constraints");
        self.model = Some(model);
        self.tracker.reset();
        self.reproject()
    }

    /// Lay out over `[start, end]` pixels
    pub fn layout(&mut self, start: Unit, end: Unit) -> Result<()> {
        if self.viewport.set(start, end)? {
            tracing::debug!(viewport = %self.viewport, "layout changed");
            self.reproject()?;
        }
        Ok(())
    }

    /// Lay out over `[0, width]` pixels
    pub fn set_view_width(&mut self, width: Unit) -> Result<()> {
        self.layout(0, width)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<GestureOutcome> {
        let Some(projection) = &self.projection else {
            return Ok(GestureOutcome::Ignored);
        };
        let slop = self.config.handle_hit_slop_px;
        let step = self.tracker.handle(event, |x| match projection.handles.hit(x as Unit, slop) {
            Some(Side::Left) => DragTarget::LeftHandle,
            Some(Side::Right) => DragTarget::RightHandle,
            None => DragTarget::Timeline,
        });

        match step {
            DragStep::Ignored => Ok(GestureOutcome::Ignored),
            DragStep::Started(target) => Ok(GestureOutcome::Started(target)),
            DragStep::Finished => Ok(GestureOutcome::Finished),
            DragStep::Cancelled => Ok(GestureOutcome::Cancelled),
            DragStep::Delta { delta, .. } => self.pan(delta),
            DragStep::Moved { target: DragTarget::LeftHandle, x } => self.drag_handle(Side::Left, x),
            DragStep::Moved { target: DragTarget::RightHandle, x } => self.drag_handle(Side::Right, x),
            DragStep::Moved { target: DragTarget::Timeline, .. } => Ok(GestureOutcome::Ignored),
        }
    }

    fn pan(&mut self, delta_px: Unit) -> Result<GestureOutcome> {
        let (Some(model), Some(projection)) = (self.model.as_mut(), self.projection.as_ref()) else {
            return Ok(GestureOutcome::Ignored);
        };
        match pan_by_pixels(model, &projection.view, delta_px)? {
            Some(delta) => {
                self.reproject()?;
                Ok(GestureOutcome::Panned { delta })
            }
            None => Ok(GestureOutcome::Rejected),
        }
    }

    fn drag_handle(&mut self, side: Side, x: Unit) -> Result<GestureOutcome> {
        let (Some(model), Some(projection)) = (self.model.as_mut(), self.projection.as_mut()) else {
            return Ok(GestureOutcome::Ignored);
        };
        let handle_x = projection.handles.drag_to(side, x);
        // Clamp in model space from the raw pointer position. The pixel bounds of the
        // handle are rounded and would leave the selection wider than min_range.
        let bound = transfer_bound(x, &projection.view, model)?;

        let selected = model.selected().clone();
        let allowed = model.allowed();
        let position = match side {
            Side::Left => {
                let permitted = Range::new(
                    allowed.lower(),
                    model.current().min(selected.upper().saturating_sub(model.min_range())),
                )?;
                let lower = permitted.clamp(bound);
                model.selected_mut().set(lower, selected.upper())?;
                lower
            }
            Side::Right => {
                let permitted = Range::new(
                    model.current().max(selected.lower().saturating_add(model.min_range())),
                    allowed.upper(),
                )?;
                let upper = permitted.clamp(bound);
                model.selected_mut().set(selected.lower(), upper)?;
                upper
            }
        };
        tracing::debug!(?side, x, handle_x, position, selected = %model.selected(), "handle moved");

        self.reproject_keeping_handles()?;
        Ok(GestureOutcome::HandleMoved { side, position })
    }

    fn reproject(&mut self) -> Result<()> {
        self.projection = match &self.model {
            Some(model) if self.viewport.width() > 0 => {
                let view = project(model, &self.viewport)?;
                let handles = HandlePair::from_view(&view);
                Some(Projection { view, handles })
            }
            _ => None,
        };
        Ok(())
    }

    // The view follows the model, the dragged handle stays under the finger.
    fn reproject_keeping_handles(&mut self) -> Result<()> {
        let handles = self.projection.as_ref().map(|projection| projection.handles.clone());
        self.reproject()?;
        if let (Some(projection), Some(handles)) = (self.projection.as_mut(), handles) {
            projection.handles = handles;
        }
        Ok(())
    }

    pub fn config(&self) -> &SeekBarConfig {
        &self.config
    }

    pub fn model(&self) -> Option<&Constraints> {
        self.model.as_ref()
    }

    /// Model constraints projected onto the viewport
    pub fn view(&self) -> Option<&Constraints> {
        self.projection.as_ref().map(|projection| &projection.view)
    }

    pub fn handles(&self) -> Option<&HandlePair> {
        self.projection.as_ref().map(|projection| &projection.handles)
    }

    pub fn viewport(&self) -> &Range {
        &self.viewport
    }

    pub fn drag_state(&self) -> DragState {
        self.tracker.state()
    }

    /// Model-space selection, the widget's main output
    pub fn selected(&self) -> Option<&Range> {
        self.model.as_ref().map(Constraints::selected)
    }

    pub fn labels(&self) -> Option<Labels> {
        let model = self.model.as_ref()?;
        let projection = self.projection.as_ref()?;
        Some(Labels::new(model, &projection.view))
    }

    /// Label text with the configured unit suffix
    pub fn label_text(&self) -> Option<LabelText> {
        Some(self.labels()?.text(&self.config.time_unit))
    }

    pub fn geometry(&self) -> Option<BarGeometry> {
        let projection = self.projection.as_ref()?;
        Some(BarGeometry::new(
            &projection.view,
            &projection.handles,
            &self.viewport,
            self.config.pattern_step_px,
        ))
    }
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::with_config(SeekBarConfig::default())
    }
}
