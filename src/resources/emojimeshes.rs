//! Back-references from each emoji to its dispensable entity.
//!
//! The emoji set is closed, so the lookup is a fixed-size array indexed by
//! [`Emoji::index`] rather than a map.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::emoji::{EMOJI_COUNT, Emoji};

#[derive(Resource, Debug, Clone, Default)]
pub struct EmojiMeshes {
    entities: [Option<Entity>; EMOJI_COUNT],
}

impl EmojiMeshes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, emoji: Emoji, entity: Entity) {
        self.entities[emoji.index()] = Some(entity);
    }

    pub fn get(&self, emoji: Emoji) -> Option<Entity> {
        self.entities[emoji.index()]
    }

    /// Registered `(emoji, entity)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Emoji, Entity)> + '_ {
        Emoji::ALL
            .into_iter()
            .filter_map(|emoji| self.get(emoji).map(|entity| (emoji, entity)))
    }
}
