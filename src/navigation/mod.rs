//! Coordinate services for the canvas
//!
//! Scene/geographic resolution, extent aggregation, the jump-to-location
//! workflow and the input dispatch that ties them to canvas events.

pub mod errors;
mod resolver;
mod extent;
mod marker;
mod view;
mod navigator;
mod dispatch;

#[cfg(test)]
mod tests;

pub use errors::{NavError, NavResult};
pub use resolver::{CoordinateResolver, FallbackPolicy, SceneLookup, DEFAULT_UNITS_PER_DEGREE};
pub use extent::{Extent, ExtentAggregator, ExtentKind, VectorLayerBounds};
pub use marker::{ExpiryTimer, ExpiryToken, LocationMarker, MarkerId, DEFAULT_MARKER_LIFETIME};
pub use view::SceneView;
pub use navigator::{JumpResult, LocationNavigator, NavigatorMode, NavigatorSettings, NavigatorState};
pub use dispatch::{dispatch, CapturedPoint, DispatchContext, DispatchOutcome, InputEvent};
