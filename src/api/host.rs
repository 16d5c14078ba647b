use tracing::debug;

use crate::engine::PlotEngine;
use crate::error::BridgeResult;

use super::{ExternallyOwnedRegion, GraphBridge, GraphProps};

/// Lifecycle hooks a declarative host calls for a component that owns an
/// externally managed region.
///
/// The host renders the region once, then only calls these hooks; it never
/// diffs or re-renders the region's subtree.
pub trait ExternallyOwnedComponent {
    type Props;

    /// Region element placed by the host before `on_attach`.
    fn render(props: &Self::Props) -> ExternallyOwnedRegion;

    fn on_attach(&mut self, props: Self::Props) -> BridgeResult<()>;

    fn on_before_update(&mut self, next_props: Self::Props) -> BridgeResult<()>;

    fn on_detach(&mut self) -> BridgeResult<()>;

    fn should_rerender(&self) -> bool {
        false
    }
}

impl<E: PlotEngine> ExternallyOwnedComponent for GraphBridge<E> {
    type Props = GraphProps;

    fn render(props: &GraphProps) -> ExternallyOwnedRegion {
        ExternallyOwnedRegion::from_config(&props.config)
    }

    fn on_attach(&mut self, props: GraphProps) -> BridgeResult<()> {
        self.attach(props)
    }

    /// Only data and layout flow into the instance; binding flags and the
    /// callback are fixed at attach.
    fn on_before_update(&mut self, next_props: GraphProps) -> BridgeResult<()> {
        let outcome = self.receive_update(next_props.config.spec())?;
        debug!(?outcome, "host update handled");
        Ok(())
    }

    fn on_detach(&mut self) -> BridgeResult<()> {
        self.detach()
    }

    fn should_rerender(&self) -> bool {
        GraphBridge::should_rerender(self)
    }
}
