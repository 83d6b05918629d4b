use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::error::SetupError;
use crate::event::{PointerEvent, PointerEventKind, PointerId};
use crate::geom::Vec2;
use crate::graphics::GraphicsContext;
use crate::host::{Canvas, HostElement, ListenerId, PointerListener};
use crate::plugin::Plugin;

/// Observer signature: normalized `x`, normalized `y`, drag state.
pub type Observer = dyn FnMut(f32, f32, bool);

/// Event kinds the tracker registers on its host element.
const LISTENED: [PointerEventKind; 5] = PointerEventKind::ALL;

/// Handle returned by [`PointerTracker::add_subscriber`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriberId(u64);

/// Shader uniform names written by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformNames {
    /// `vec2`: current normalized position.
    pub pointer: String,
    /// `vec2`: normalized position at press time.
    pub pointer_start: String,
    /// `int`: 1 while dragging, 0 otherwise.
    pub dragging: String,
}

impl Default for UniformNames {
    fn default() -> Self {
        Self {
            pointer: "pointer".to_string(),
            pointer_start: "pointerStart".to_string(),
            dragging: "dragging".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub uniforms: UniformNames,

    /// Push `dragging = 1` on press, mirroring the `dragging = 0` push on release.
    pub push_dragging_on_press: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            uniforms: UniformNames::default(),
            push_dragging_on_press: true,
        }
    }
}

/// External handles borrowed from the host. Never created or destroyed here.
struct Handles<G: GraphicsContext> {
    host: Option<Rc<dyn HostElement>>,
    gl: Option<Rc<G>>,
    program: Option<Rc<G::Program>>,
    canvas: Option<Rc<dyn Canvas>>,
    listeners: Vec<ListenerId>,
}

impl<G: GraphicsContext> Default for Handles<G> {
    fn default() -> Self {
        Self {
            host: None,
            gl: None,
            program: None,
            canvas: None,
            listeners: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct DragState {
    pointer_id: Option<PointerId>,
    dragging: bool,
    start: Option<Vec2>,
    /// Last normalized position of the captured pointer.
    last: Option<Vec2>,
}

struct Subscriber {
    id: SubscriberId,
    callback: Rc<RefCell<Observer>>,
}

struct Shared<G: GraphicsContext> {
    config: TrackerConfig,
    handles: RefCell<Handles<G>>,
    drag: RefCell<DragState>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_subscriber: Cell<u64>,
}

/// Listener registered on the host. Holds the tracker weakly so the host never
/// keeps a dropped tracker alive.
struct Binding<G: GraphicsContext> {
    shared: Weak<Shared<G>>,
}

impl<G: GraphicsContext + 'static> PointerListener for Binding<G> {
    fn handle_event(&self, kind: PointerEventKind, event: &PointerEvent) {
        if let Some(shared) = self.shared.upgrade() {
            shared.handle_event(kind, event);
        }
    }
}

/// Turns a single-pointer drag on a host element into shader uniforms and
/// observer callbacks.
///
/// State machine:
/// - idle → dragging on `Down`, when no pointer is captured
/// - dragging → dragging on `Move` from the captured pointer
/// - dragging → idle on `Up`, `Cancel` or `LostCapture` from the captured pointer
///
/// Every other event is dropped. Each processed event produces exactly one
/// observer notification, with coordinates normalized to the host element's
/// bounding box and clamped to `[0, 1]`.
///
/// Uniform pushes are skipped while no graphics context or program is bound.
pub struct PointerTracker<G: GraphicsContext + 'static> {
    shared: Rc<Shared<G>>,
}

impl<G: GraphicsContext + 'static> PointerTracker<G> {
    pub fn new() -> Self {
        Self::with_config(TrackerConfig::default())
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                handles: RefCell::new(Handles::default()),
                drag: RefCell::new(DragState::default()),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(1),
            }),
        }
    }

    /// Binds the tracker to a host element and its rendering resources.
    ///
    /// Fails without side effects when `host` is `None`. Calling `setup` again
    /// detaches the previous binding first, so listeners are never doubled.
    pub fn setup(
        &self,
        host: Option<Rc<dyn HostElement>>,
        gl: Rc<G>,
        program: Rc<G::Program>,
        canvas: Rc<dyn Canvas>,
    ) -> Result<(), SetupError> {
        let Some(host) = host else {
            return Err(SetupError::MissingHostElement);
        };

        self.detach();

        let binding: Rc<dyn PointerListener> = Rc::new(Binding {
            shared: Rc::downgrade(&self.shared),
        });
        let listeners = LISTENED
            .iter()
            .map(|kind| host.add_listener(*kind, Rc::clone(&binding)))
            .collect();

        *self.shared.handles.borrow_mut() = Handles {
            host: Some(host),
            gl: Some(gl),
            program: Some(program),
            canvas: Some(canvas),
            listeners,
        };

        log::debug!("pointer tracker attached");
        Ok(())
    }

    /// Appends an observer. Duplicates are allowed. Returns `self` for chaining.
    pub fn subscribe(&self, observer: impl FnMut(f32, f32, bool) + 'static) -> &Self {
        self.add_subscriber(observer);
        self
    }

    /// Appends an observer and returns a handle for [`PointerTracker::unsubscribe`].
    pub fn add_subscriber(&self, observer: impl FnMut(f32, f32, bool) + 'static) -> SubscriberId {
        let id = SubscriberId(self.shared.next_subscriber.get());
        self.shared.next_subscriber.set(id.0 + 1);

        let callback: Rc<RefCell<Observer>> = Rc::new(RefCell::new(observer));
        self.shared
            .subscribers
            .borrow_mut()
            .push(Subscriber { id, callback });
        id
    }

    /// Removes an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subs = self.shared.subscribers.borrow_mut();
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() != before
    }

    /// Releases the host bindings and clears all external handles.
    ///
    /// No-op when no graphics context is bound. Afterwards the tracker is inert:
    /// late events push no uniforms and notify nobody.
    pub fn dispose(&self) {
        if self.shared.handles.borrow().gl.is_none() {
            return;
        }
        self.detach();
        log::debug!("pointer tracker disposed");
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.drag.borrow().dragging
    }

    pub fn pointer_id(&self) -> Option<PointerId> {
        self.shared.drag.borrow().pointer_id
    }

    /// Normalized position recorded by the last press, if any.
    pub fn start(&self) -> Option<Vec2> {
        self.shared.drag.borrow().start
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    pub fn is_attached(&self) -> bool {
        self.shared.handles.borrow().host.is_some()
    }

    pub fn canvas(&self) -> Option<Rc<dyn Canvas>> {
        self.shared.handles.borrow().canvas.clone()
    }

    /// Removes host listeners, ends any active drag and clears the handles.
    ///
    /// An interrupted drag still pushes `dragging = 0` through the outgoing
    /// context and notifies observers with its last position.
    fn detach(&self) {
        let handles = std::mem::take(&mut *self.shared.handles.borrow_mut());
        let Some(host) = handles.host else { return };

        for id in handles.listeners {
            host.remove_listener(id);
        }

        let interrupted = {
            let mut drag = self.shared.drag.borrow_mut();
            drag.dragging = false;
            let last = drag.last.or(drag.start).unwrap_or_default();
            drag.pointer_id.take().map(|id| (id, last))
        };
        let Some((id, pos)) = interrupted else { return };

        if host.has_pointer_capture(id) {
            host.release_pointer_capture(id);
        }

        if let (Some(gl), Some(program)) = (handles.gl.as_deref(), handles.program.as_deref()) {
            let location = gl.uniform_location(program, &self.shared.config.uniforms.dragging);
            gl.uniform1i(location.as_ref(), 0);
        }

        log::debug!("drag of pointer {id} interrupted by detach");
        self.shared.notify(pos.x, pos.y, false);
    }
}

impl<G: GraphicsContext + 'static> Default for PointerTracker<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GraphicsContext + 'static> Drop for PointerTracker<G> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<G: GraphicsContext + 'static> PointerListener for PointerTracker<G> {
    fn handle_event(&self, kind: PointerEventKind, event: &PointerEvent) {
        self.shared.handle_event(kind, event);
    }
}

impl<G: GraphicsContext + 'static> Plugin<G> for PointerTracker<G> {
    fn name(&self) -> &'static str {
        "PointerInteractionsPlugin"
    }

    fn setup(
        &mut self,
        host: Option<Rc<dyn HostElement>>,
        gl: Rc<G>,
        program: Rc<G::Program>,
        canvas: Rc<dyn Canvas>,
    ) -> Result<(), SetupError> {
        PointerTracker::setup(self, host, gl, program, canvas)
    }

    fn dispose(&mut self) {
        PointerTracker::dispose(self);
    }
}

/// Returns a fresh, unbound tracker.
pub fn pointer_interactions_plugin<G: GraphicsContext + 'static>() -> PointerTracker<G> {
    PointerTracker::new()
}

impl<G: GraphicsContext> Shared<G> {
    fn handle_event(&self, kind: PointerEventKind, event: &PointerEvent) {
        let notification = match kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel | PointerEventKind::LostCapture => {
                self.on_sequence_aborted(kind, event)
            }
        };

        if let Some(pos) = notification {
            let dragging = self.drag.borrow().dragging;
            self.notify(pos.x, pos.y, dragging);
        }
    }

    fn on_pointer_down(&self, event: &PointerEvent) -> Option<Vec2> {
        let host = self.host()?;
        if let Some(active) = self.drag.borrow().pointer_id {
            log::trace!(
                "press from pointer {} ignored; {active} already captured",
                event.pointer_id
            );
            return None;
        }

        let id = event.pointer_id;
        let pos = host.bounding_client_rect().normalize_point(event.client);
        {
            let mut drag = self.drag.borrow_mut();
            drag.pointer_id = Some(id);
            drag.dragging = true;
            drag.start = Some(pos);
            drag.last = Some(pos);
        }

        host.set_pointer_capture(id);

        let names = &self.config.uniforms;
        self.push_vec2(&names.pointer_start, pos);
        self.push_vec2(&names.pointer, pos);
        if self.config.push_dragging_on_press {
            self.push_int(&names.dragging, 1);
        }

        log::debug!("drag started by pointer {id} at ({:.3}, {:.3})", pos.x, pos.y);
        Some(pos)
    }

    fn on_pointer_move(&self, event: &PointerEvent) -> Option<Vec2> {
        let host = self.host()?;
        if !self.is_captured(event.pointer_id) {
            return None;
        }

        let pos = host.bounding_client_rect().normalize_point(event.client);
        self.drag.borrow_mut().last = Some(pos);
        self.push_vec2(&self.config.uniforms.pointer, pos);
        Some(pos)
    }

    fn on_pointer_up(&self, event: &PointerEvent) -> Option<Vec2> {
        let host = self.host()?;
        if !self.is_captured(event.pointer_id) {
            return None;
        }

        let pos = host.bounding_client_rect().normalize_point(event.client);
        self.end_drag();

        // State is already idle: a synchronous lost-capture callback is ignored.
        host.release_pointer_capture(event.pointer_id);

        self.push_int(&self.config.uniforms.dragging, 0);
        log::debug!("drag ended by pointer {} at ({:.3}, {:.3})", event.pointer_id, pos.x, pos.y);
        Some(pos)
    }

    fn on_sequence_aborted(&self, kind: PointerEventKind, event: &PointerEvent) -> Option<Vec2> {
        let host = self.host()?;
        if !self.is_captured(event.pointer_id) {
            return None;
        }

        let pos = host.bounding_client_rect().normalize_point(event.client);
        self.end_drag();

        if kind == PointerEventKind::Cancel && host.has_pointer_capture(event.pointer_id) {
            host.release_pointer_capture(event.pointer_id);
        }

        self.push_int(&self.config.uniforms.dragging, 0);
        log::debug!("drag of pointer {} aborted by {kind}", event.pointer_id);
        Some(pos)
    }

    fn host(&self) -> Option<Rc<dyn HostElement>> {
        self.handles.borrow().host.clone()
    }

    fn is_captured(&self, id: PointerId) -> bool {
        self.drag.borrow().pointer_id == Some(id)
    }

    fn end_drag(&self) {
        let mut drag = self.drag.borrow_mut();
        drag.pointer_id = None;
        drag.dragging = false;
        drag.last = None;
    }

    fn push_vec2(&self, name: &str, value: Vec2) {
        let handles = self.handles.borrow();
        let (Some(gl), Some(program)) = (handles.gl.as_deref(), handles.program.as_deref()) else {
            return;
        };
        let location = gl.uniform_location(program, name);
        gl.uniform2fv(location.as_ref(), value.to_array());
    }

    fn push_int(&self, name: &str, value: i32) {
        let handles = self.handles.borrow();
        let (Some(gl), Some(program)) = (handles.gl.as_deref(), handles.program.as_deref()) else {
            return;
        };
        let location = gl.uniform_location(program, name);
        gl.uniform1i(location.as_ref(), value);
    }

    /// Invokes observers in registration order with no internal borrow held,
    /// so observers may subscribe or unsubscribe from inside the callback.
    fn notify(&self, x: f32, y: f32, dragging: bool) {
        let callbacks: Vec<Rc<RefCell<Observer>>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| Rc::clone(&s.callback))
            .collect();

        for callback in callbacks {
            match callback.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(x, y, dragging),
                Err(_) => log::warn!("observer re-entered its own notification; skipped"),
            }
        }
    }
}
