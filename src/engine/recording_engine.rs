use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{BridgeError, BridgeResult};
use crate::interaction::{InteractionKind, RawInteractionEvent};

use super::{InstanceHandle, InteractionHandler, ListenerHandle, PlotEngine};

/// Engine call as observed by `RecordingEngine`.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Create {
        container_id: String,
        data: Vec<Value>,
        layout: Map<String, Value>,
    },
    Destroy {
        container_id: String,
    },
    On {
        container_id: String,
        kind: InteractionKind,
        handle: ListenerHandle,
    },
    Off {
        handle: ListenerHandle,
    },
}

struct LiveInstance {
    handle: InstanceHandle,
    data: Vec<Value>,
    layout: Map<String, Value>,
}

struct Listener {
    container_id: String,
    kind: InteractionKind,
    handler: Rc<RefCell<InteractionHandler>>,
}

#[derive(Default)]
struct RecordingState {
    calls: Vec<RecordedCall>,
    instances: IndexMap<String, LiveInstance>,
    listeners: IndexMap<ListenerHandle, Listener>,
    next_instance_id: u64,
    next_listener_id: u64,
    fail_next_create: bool,
    fail_next_on: bool,
    fail_next_off: bool,
}

/// Headless engine used by tests and hosts without a rendering surface.
///
/// Clones share state, so a test can keep one clone while the bridge owns
/// another. Events are delivered synchronously through `emit`.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    state: Rc<RefCell<RecordingState>>,
}

impl RecordingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    #[must_use]
    pub fn create_count(&self) -> usize {
        self.count_calls(|call| matches!(call, RecordedCall::Create { .. }))
    }

    #[must_use]
    pub fn destroy_count(&self) -> usize {
        self.count_calls(|call| matches!(call, RecordedCall::Destroy { .. }))
    }

    #[must_use]
    pub fn on_count(&self) -> usize {
        self.count_calls(|call| matches!(call, RecordedCall::On { .. }))
    }

    #[must_use]
    pub fn off_count(&self) -> usize {
        self.count_calls(|call| matches!(call, RecordedCall::Off { .. }))
    }

    #[must_use]
    pub fn live_listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    #[must_use]
    pub fn live_listener_count_for(&self, kind: InteractionKind) -> usize {
        self.state
            .borrow()
            .listeners
            .values()
            .filter(|listener| listener.kind == kind)
            .count()
    }

    #[must_use]
    pub fn has_instance(&self, container_id: &str) -> bool {
        self.state.borrow().instances.contains_key(container_id)
    }

    #[must_use]
    pub fn instance_handle(&self, container_id: &str) -> Option<InstanceHandle> {
        self.state
            .borrow()
            .instances
            .get(container_id)
            .map(|instance| instance.handle)
    }

    /// Data and layout currently rendered on `container_id`.
    #[must_use]
    pub fn rendered(&self, container_id: &str) -> Option<(Vec<Value>, Map<String, Value>)> {
        self.state
            .borrow()
            .instances
            .get(container_id)
            .map(|instance| (instance.data.clone(), instance.layout.clone()))
    }

    pub fn fail_next_create(&self) {
        self.state.borrow_mut().fail_next_create = true;
    }

    pub fn fail_next_on(&self) {
        self.state.borrow_mut().fail_next_on = true;
    }

    pub fn fail_next_off(&self) {
        self.state.borrow_mut().fail_next_off = true;
    }

    /// Delivers `event` to listeners of `kind` on `container_id`.
    ///
    /// Nothing is delivered while the container has no live instance.
    /// Returns the number of handlers invoked.
    pub fn emit(
        &self,
        container_id: &str,
        kind: InteractionKind,
        event: &RawInteractionEvent,
    ) -> usize {
        let handlers: Vec<Rc<RefCell<InteractionHandler>>> = {
            let state = self.state.borrow();
            if !state.instances.contains_key(container_id) {
                return 0;
            }
            state
                .listeners
                .values()
                .filter(|listener| listener.container_id == container_id && listener.kind == kind)
                .map(|listener| Rc::clone(&listener.handler))
                .collect()
        };
        for handler in &handlers {
            (handler.borrow_mut().as_mut())(event);
        }
        handlers.len()
    }

    fn count_calls(&self, predicate: impl Fn(&RecordedCall) -> bool) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|call| predicate(call))
            .count()
    }
}

impl PlotEngine for RecordingEngine {
    fn create(
        &mut self,
        container_id: &str,
        data: &[Value],
        layout: &Map<String, Value>,
    ) -> BridgeResult<InstanceHandle> {
        let mut state = self.state.borrow_mut();
        if std::mem::take(&mut state.fail_next_create) {
            return Err(BridgeError::Engine(format!(
                "failed to create chart instance on `{container_id}`"
            )));
        }
        state.calls.push(RecordedCall::Create {
            container_id: container_id.to_owned(),
            data: data.to_vec(),
            layout: layout.clone(),
        });
        state.next_instance_id += 1;
        let handle = InstanceHandle::new(state.next_instance_id);
        state.instances.insert(
            container_id.to_owned(),
            LiveInstance {
                handle,
                data: data.to_vec(),
                layout: layout.clone(),
            },
        );
        Ok(handle)
    }

    fn destroy(&mut self, container_id: &str) -> BridgeResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(RecordedCall::Destroy {
            container_id: container_id.to_owned(),
        });
        state.instances.shift_remove(container_id);
        Ok(())
    }

    fn on(
        &mut self,
        container_id: &str,
        kind: InteractionKind,
        handler: InteractionHandler,
    ) -> BridgeResult<ListenerHandle> {
        let mut state = self.state.borrow_mut();
        if std::mem::take(&mut state.fail_next_on) {
            return Err(BridgeError::Engine(format!(
                "failed to subscribe to `{}` on `{container_id}`",
                kind.event_name()
            )));
        }
        state.next_listener_id += 1;
        let handle = ListenerHandle::new(state.next_listener_id);
        state.calls.push(RecordedCall::On {
            container_id: container_id.to_owned(),
            kind,
            handle,
        });
        state.listeners.insert(
            handle,
            Listener {
                container_id: container_id.to_owned(),
                kind,
                handler: Rc::new(RefCell::new(handler)),
            },
        );
        Ok(handle)
    }

    fn off(&mut self, handle: ListenerHandle) -> BridgeResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(RecordedCall::Off { handle });
        if std::mem::take(&mut state.fail_next_off) {
            return Err(BridgeError::Engine(format!(
                "failed to release listener {}",
                handle.id()
            )));
        }
        state.listeners.shift_remove(&handle);
        Ok(())
    }
}
