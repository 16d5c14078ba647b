use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::engine::{InteractionHandler, ListenerHandle, PlotEngine};
use crate::error::BridgeResult;
use crate::interaction::{EventWhitelist, InteractionKind, RawInteractionEvent};

use super::{BindingFlags, ValueChangedCallback};

/// Listener handles held for the container's interaction emitters.
///
/// At most one click and one hover handle exist at a time.
#[derive(Debug, Default)]
pub struct EventSubscriptions {
    click: Option<ListenerHandle>,
    hover: Option<ListenerHandle>,
}

impl EventSubscriptions {
    #[must_use]
    pub fn click_handle(&self) -> Option<ListenerHandle> {
        self.click
    }

    #[must_use]
    pub fn hover_handle(&self) -> Option<ListenerHandle> {
        self.hover
    }

    #[must_use]
    pub fn handle_count(&self) -> usize {
        usize::from(self.click.is_some()) + usize::from(self.hover.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handle_count() == 0
    }

    /// Subscribes the enabled streams, forwarding filtered events to `callback`.
    ///
    /// Streams that already hold a handle are left alone. When a subscription
    /// fails, handles created by this call are released before the error is
    /// returned.
    pub fn bind<E: PlotEngine>(
        &mut self,
        engine: &mut E,
        container_id: &str,
        flags: BindingFlags,
        whitelist: &EventWhitelist,
        callback: &ValueChangedCallback,
    ) -> BridgeResult<()> {
        let mut created = Vec::with_capacity(2);
        for (enabled, kind) in [
            (flags.click, InteractionKind::Click),
            (flags.hover, InteractionKind::Hover),
        ] {
            if !enabled || self.slot(kind).is_some() {
                continue;
            }
            let handler = forwarding_handler(kind, whitelist.clone(), Rc::clone(callback));
            match engine.on(container_id, kind, handler) {
                Ok(handle) => {
                    debug!(
                        container_id,
                        event = kind.event_name(),
                        handle = handle.id(),
                        "bound interaction listener"
                    );
                    *self.slot_mut(kind) = Some(handle);
                    created.push(kind);
                }
                Err(err) => {
                    // The subscription error is reported; rollback failures
                    // are logged, not returned.
                    for kind in created {
                        let Some(handle) = self.slot_mut(kind).take() else {
                            continue;
                        };
                        if release(engine, kind, handle).is_err() {
                            debug!(
                                container_id,
                                event = kind.event_name(),
                                "rollback release failed after subscription error"
                            );
                        }
                    }
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Releases every held handle.
    ///
    /// Each handle is released even if an earlier release failed; all handles
    /// are discarded and the first failure is returned. No handles is a no-op.
    pub fn unbind<E: PlotEngine>(&mut self, engine: &mut E) -> BridgeResult<()> {
        let mut first_error = None;
        for kind in [InteractionKind::Click, InteractionKind::Hover] {
            let Some(handle) = self.slot_mut(kind).take() else {
                continue;
            };
            if let Err(err) = release(engine, kind, handle) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn slot(&self, kind: InteractionKind) -> Option<ListenerHandle> {
        match kind {
            InteractionKind::Click => self.click,
            InteractionKind::Hover => self.hover,
        }
    }

    fn slot_mut(&mut self, kind: InteractionKind) -> &mut Option<ListenerHandle> {
        match kind {
            InteractionKind::Click => &mut self.click,
            InteractionKind::Hover => &mut self.hover,
        }
    }
}

fn forwarding_handler(
    kind: InteractionKind,
    whitelist: EventWhitelist,
    callback: ValueChangedCallback,
) -> InteractionHandler {
    Box::new(move |raw: &RawInteractionEvent| {
        let filtered = whitelist.filter(raw);
        trace!(
            event = kind.event_name(),
            points = filtered.points.len(),
            "forward interaction"
        );
        callback(kind.into_partial_state(filtered));
    })
}

fn release<E: PlotEngine>(
    engine: &mut E,
    kind: InteractionKind,
    handle: ListenerHandle,
) -> BridgeResult<()> {
    engine.off(handle).inspect_err(|err| {
        warn!(
            error = %err,
            event = kind.event_name(),
            handle = handle.id(),
            "failed to release interaction listener"
        );
    })
}
