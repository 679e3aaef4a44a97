//! Boundary to the layer management service.
//!
//! Commands describe what they want as a [`Request`]; a [`Session`] carries
//! it to the service and hands back the service's JSON reply. What the
//! service does with a request is outside this crate.

mod dry_run;
mod error;
mod socket;

use serde::Serialize;

pub use dry_run::DryRunConnector;
pub use error::*;
pub use socket::SocketConnector;

/// Object addressed by a property request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Layer(u32),
    Surface(u32),
}

/// Input device whose focus is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusDevice {
    Keyboard,
    Pointer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A single control operation, serialized as one JSON object tagged by `op`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    GetScene,
    GetScreens,
    GetLayers,
    GetSurfaces,
    GetScreen {
        screen: u32,
    },
    GetLayer {
        layer: u32,
    },
    GetSurface {
        surface: u32,
    },
    CreateLayer {
        layer: u32,
        width: u32,
        height: u32,
    },
    Destroy {
        target: Target,
    },
    LayerAddSurface {
        layer: u32,
        surface: u32,
    },
    LayerRemoveSurface {
        layer: u32,
        surface: u32,
    },
    SetSourceRegion {
        target: Target,
        region: Region,
    },
    SetDestinationRegion {
        target: Target,
        region: Region,
    },
    SetOpacity {
        target: Target,
        opacity: f64,
    },
    SetVisibility {
        target: Target,
        visible: bool,
    },
    SetScreenRenderOrder {
        screen: u32,
        layers: Vec<u32>,
    },
    SetLayerRenderOrder {
        layer: u32,
        surfaces: Vec<u32>,
    },
    SetFocus {
        surface: u32,
        device: FocusDevice,
    },
    GetKeyboardFocus,
    /// Apply every pending change atomically.
    Commit,
}

/// An open conversation with the service. Dropping it closes the connection.
pub trait Session {
    fn send(&mut self, request: &Request) -> Result<serde_json::Value, SessionError>;
}

/// Opens sessions. Called once per executed command that needs one.
pub trait Connector {
    fn connect(&self) -> Result<Box<dyn Session>, SessionError>;
}
