use std::path::Path;
use std::time::Instant;

use log::info;

use crate::coordinate::{GeoPoint, Point};
use crate::gazetteer::Gazetteer;
use crate::navigation::{
    dispatch, CoordinateResolver, DispatchContext, DispatchOutcome, Extent, ExtentAggregator,
    FallbackPolicy, InputEvent, JumpResult, LocationNavigator, NavError, NavResult, SceneLookup,
    SceneView,
};
use crate::session::{DisplaySettings, Session, SessionConfig};
use crate::utils::format_utils::format_extent;

/// Main interface to the geocanvas library
///
/// Bundles a loaded session with the navigator and the display preferences
/// it was configured with.
pub struct Workbench {
    session: Session,
    navigator: LocationNavigator,
    display: DisplaySettings,
    fallback: FallbackPolicy,
}

impl Workbench {
    /// Build a workbench from a parsed session config
    pub fn new(config: &SessionConfig) -> Self {
        Workbench {
            session: Session::from_config(config),
            navigator: LocationNavigator::new(config.display.navigator_settings()),
            display: config.display,
            fallback: config.fallback,
        }
    }

    /// Load a session file
    ///
    /// # Arguments
    /// * `path` - Path to the session TOML file
    pub fn open<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let config = SessionConfig::from_file(path)?;
        Ok(Self::new(&config))
    }

    /// Build a workbench from session TOML text
    pub fn from_str(content: &str) -> NavResult<Self> {
        let config = SessionConfig::from_str(content)?;
        Ok(Self::new(&config))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn navigator(&self) -> &LocationNavigator {
        &self.navigator
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Unload every layer and drop the active marker ("new project")
    pub fn clear(&mut self, view: &mut dyn SceneView) {
        self.navigator.clear_marker(view);
        self.session.clear();
        info!("Session cleared");
    }

    /// Extent of everything loaded
    pub fn extent(&self) -> Extent {
        ExtentAggregator::new(self.session.registry(), self.session.vectors()).compute_extent()
    }

    /// Extent as a status-bar line
    pub fn extent_text(&self) -> String {
        format_extent(&self.extent(), self.display.coordinate_format)
    }

    /// Geographic coordinate under a scene point
    pub fn scene_to_geographic(&self, scene: &Point) -> NavResult<SceneLookup> {
        self.resolver().scene_to_geographic(scene)
    }

    /// Scene position of a geographic coordinate
    pub fn geographic_to_scene(&self, geo: &GeoPoint) -> Option<Point> {
        self.resolver().geographic_to_scene(geo)
    }

    /// Jump to a coordinate and drop a marker in `view`
    pub fn jump_to(&mut self, view: &mut dyn SceneView, lon: f64, lat: f64, now: Instant) -> NavResult<JumpResult> {
        self.navigator.jump_to(self.session.registry(), view, lon, lat, now)
    }

    /// Look up a city by name and jump to it
    ///
    /// # Errors
    /// `GazetteerError` when the name matches no city, otherwise whatever
    /// the jump itself reports.
    pub fn locate_city(
        &mut self,
        gazetteer: &Gazetteer,
        text: &str,
        view: &mut dyn SceneView,
        now: Instant,
    ) -> NavResult<JumpResult> {
        let city = gazetteer.find(text)
            .ok_or_else(|| NavError::GazetteerError(format!("No city matches '{}'", text)))?;
        info!("Locating {}", city.search_key());
        let location = city.location();
        self.jump_to(view, location.lon, location.lat, now)
    }

    /// Route an input event through the navigator
    pub fn dispatch(&mut self, view: &mut dyn SceneView, event: InputEvent) -> NavResult<DispatchOutcome> {
        let mut ctx = DispatchContext {
            registry: self.session.registry(),
            vectors: self.session.vectors(),
            view,
            fallback: self.fallback,
            format: self.display.coordinate_format,
        };
        dispatch(&mut self.navigator, &mut ctx, event)
    }

    fn resolver(&self) -> CoordinateResolver<'_> {
        CoordinateResolver::new(self.session.registry(), self.fallback)
    }
}
