//! Scene identifiers and the default-scene resolution chain.

use crate::builder::BuildError;
use crate::core::DestinationId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a motion scene asset owned by the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for SceneId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// A scene played in a given direction.
///
/// Symmetric scenes are reused backwards instead of authoring a second asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneRef {
    pub scene: SceneId,
    pub reversed: bool,
}

impl SceneRef {
    pub fn forward(scene: impl Into<SceneId>) -> Self {
        Self {
            scene: scene.into(),
            reversed: false,
        }
    }

    pub fn backward(scene: impl Into<SceneId>) -> Self {
        Self {
            scene: scene.into(),
            reversed: true,
        }
    }

    /// The same scene played in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            scene: self.scene.clone(),
            reversed: !self.reversed,
        }
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reversed {
            write!(f, "{} (reversed)", self.scene)
        } else {
            write!(f, "{}", self.scene)
        }
    }
}

/// Scenes configured for a destination, any of which may be left out.
///
/// # Example
///
/// ```rust
/// use viewnav::core::DestinationId;
/// use viewnav::motion::{SceneRef, SceneSpec};
///
/// let scenes = SceneSpec::new()
///     .enter("slide_in")
///     .pop_enter("fade_in")
///     .resolve(&DestinationId::from("details"))
///     .unwrap();
///
/// assert_eq!(scenes.exit, SceneRef::backward("slide_in"));
/// assert_eq!(scenes.pop_exit, SceneRef::backward("fade_in"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSpec {
    pub enter: Option<SceneId>,
    pub exit: Option<SceneId>,
    pub pop_enter: Option<SceneId>,
    pub pop_exit: Option<SceneId>,
}

impl SceneSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene played when navigating to the destination (required).
    pub fn enter(mut self, scene: impl Into<SceneId>) -> Self {
        self.enter = Some(scene.into());
        self
    }

    pub fn exit(mut self, scene: impl Into<SceneId>) -> Self {
        self.exit = Some(scene.into());
        self
    }

    pub fn pop_enter(mut self, scene: impl Into<SceneId>) -> Self {
        self.pop_enter = Some(scene.into());
        self
    }

    pub fn pop_exit(mut self, scene: impl Into<SceneId>) -> Self {
        self.pop_exit = Some(scene.into());
        self
    }

    /// Infer the missing scenes.
    ///
    /// The chain runs in a fixed order: `enter` is required, `exit` falls
    /// back to `enter` reversed, `pop_enter` to `enter`, and `pop_exit` to
    /// the resolved `pop_enter` reversed.
    pub fn resolve(&self, destination: &DestinationId) -> Result<SceneSet, BuildError> {
        let enter = self
            .enter
            .clone()
            .map(SceneRef::forward)
            .ok_or_else(|| BuildError::MissingEnterScene {
                destination: destination.clone(),
            })?;

        let exit = self
            .exit
            .clone()
            .map_or_else(|| enter.reversed(), SceneRef::forward);

        let pop_enter = self
            .pop_enter
            .clone()
            .map_or_else(|| enter.clone(), SceneRef::forward);

        let pop_exit = self
            .pop_exit
            .clone()
            .map_or_else(|| pop_enter.reversed(), SceneRef::forward);

        Ok(SceneSet {
            enter,
            exit,
            pop_enter,
            pop_exit,
        })
    }
}

/// Fully resolved scenes for the four roles of a destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSet {
    pub enter: SceneRef,
    pub exit: SceneRef,
    pub pop_enter: SceneRef,
    pub pop_exit: SceneRef,
}
