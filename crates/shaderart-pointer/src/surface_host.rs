use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::event::{PointerEvent, PointerEventKind, PointerId, PointerType};
use crate::geom::{Rect, Vec2};
use crate::host::{HostElement, ListenerId, PointerListener};

struct Registration {
    id: ListenerId,
    kind: PointerEventKind,
    listener: Rc<dyn PointerListener>,
}

/// Host element covering a rectangle of the viewport.
///
/// Provides the pieces a pointer plugin expects from its host:
/// - listener registration per event kind, invoked in registration order
/// - hit testing: `Down` only inside the rectangle, `Move`/`Up`/`Cancel` inside
///   the rectangle or for a captured pointer
/// - pointer capture, released implicitly after `Up`/`Cancel`
/// - `LostCapture` whenever a capture ends
///
/// Events raised while a dispatch is in progress (for example the
/// `LostCapture` produced by a listener releasing its capture) are queued and
/// delivered after the current event, never re-entrantly.
pub struct SurfaceHost {
    rect: Cell<Rect>,
    next_listener: Cell<u64>,
    listeners: RefCell<Vec<Registration>>,

    /// Captured pointers and the last event seen for each.
    captures: RefCell<HashMap<PointerId, PointerEvent>>,

    queue: RefCell<VecDeque<(PointerEventKind, PointerEvent)>>,
    dispatching: Cell<bool>,
    in_flight: Cell<Option<PointerEvent>>,
}

impl SurfaceHost {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Cell::new(rect),
            next_listener: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
            captures: RefCell::new(HashMap::new()),
            queue: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            in_flight: Cell::new(None),
        }
    }

    /// Host anchored at the viewport origin.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    /// Updates the on-screen rectangle (layout change, window resize).
    pub fn set_bounding_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, kind: PointerEventKind) -> usize {
        self.listeners.borrow().iter().filter(|r| r.kind == kind).count()
    }

    /// Ends a capture the way a platform would when it takes the pointer away
    /// (window deactivated, touch stolen by a system gesture).
    ///
    /// Unlike a release requested by the capturing listener, this is the only
    /// signal the listener gets that its pointer sequence is over.
    pub fn revoke_pointer_capture(&self, pointer_id: PointerId) {
        self.end_capture(pointer_id);
    }

    /// Dispatches a pointer event to the listeners registered for `kind`.
    pub fn dispatch(&self, kind: PointerEventKind, event: PointerEvent) {
        self.queue.borrow_mut().push_back((kind, event));
        self.flush();
    }

    fn flush(&self) {
        if self.dispatching.replace(true) {
            return;
        }

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some((kind, event)) = next else { break };
            self.deliver(kind, &event);
        }

        self.dispatching.set(false);
    }

    fn deliver(&self, kind: PointerEventKind, event: &PointerEvent) {
        let id = event.pointer_id;
        let captured = self.has_pointer_capture(id);
        let inside = self.rect.get().contains(event.client);

        let routed = match kind {
            PointerEventKind::Down => inside,
            PointerEventKind::Move | PointerEventKind::Up | PointerEventKind::Cancel => {
                captured || inside
            }
            PointerEventKind::LostCapture => true,
        };

        if routed {
            if captured {
                self.captures.borrow_mut().insert(id, *event);
            }

            // Snapshot so listeners may add/remove listeners while being called.
            let targets: Vec<Rc<dyn PointerListener>> = self
                .listeners
                .borrow()
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| Rc::clone(&r.listener))
                .collect();

            self.in_flight.set(Some(*event));
            for listener in targets {
                listener.handle_event(kind, event);
            }
            self.in_flight.set(None);
        } else {
            log::trace!("{kind} for pointer {id} outside host bounds; dropped");
        }

        if matches!(kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.end_capture(id);
        }
    }

    fn end_capture(&self, pointer_id: PointerId) {
        let removed = self.captures.borrow_mut().remove(&pointer_id);
        if let Some(last) = removed {
            self.queue
                .borrow_mut()
                .push_back((PointerEventKind::LostCapture, last));
            self.flush();
        }
    }
}

impl HostElement for SurfaceHost {
    fn bounding_client_rect(&self) -> Rect {
        self.rect.get()
    }

    fn set_pointer_capture(&self, pointer_id: PointerId) {
        let last = self
            .in_flight
            .get()
            .filter(|e| e.pointer_id == pointer_id)
            .unwrap_or_else(|| PointerEvent::new(pointer_id, PointerType::default(), Vec2::zero()));

        self.captures.borrow_mut().entry(pointer_id).or_insert(last);
    }

    fn release_pointer_capture(&self, pointer_id: PointerId) {
        self.end_capture(pointer_id);
    }

    fn has_pointer_capture(&self, pointer_id: PointerId) -> bool {
        self.captures.borrow().contains_key(&pointer_id)
    }

    fn add_listener(
        &self,
        kind: PointerEventKind,
        listener: Rc<dyn PointerListener>,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push(Registration { id, kind, listener });
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|r| r.id != id);
        listeners.len() != before
    }
}
