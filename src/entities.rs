//! This module contains all the top level bundles.
//! These are entities that are used in the scene.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod celestials;
pub mod labels;
pub mod paths;
pub mod scale;
pub mod starfield;
pub mod utils;

pub struct EntitiesPluginGroup;

impl PluginGroup for EntitiesPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(scale::ScalePlugin)
            .add(celestials::sun::SunPlugin)
            .add(celestials::celestial::CelestialPlugin)
            .add(starfield::StarfieldPlugin)
            .add(paths::PathsPlugin)
            .add(labels::LabelPlugin)
    }
}
